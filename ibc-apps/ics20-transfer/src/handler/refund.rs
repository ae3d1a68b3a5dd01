use ibc_app_transfer_types::error::TokenTransferError;
use ibc_app_transfer_types::events::{LedgerEvent, RefundEvent};
use ibc_app_transfer_types::PayloadCoinsFail;
use ibc_core::primitives::prelude::*;
use ibc_core::router::types::module::ModuleExtras;

use crate::context::TokenTransferExecutionContext;

/// Gives the coins of a transfer that failed on its destination back to the
/// sender they were debited from.
pub fn refund_coins_execute<Ctx: TokenTransferExecutionContext>(
    ctx_a: &mut Ctx,
    receipt: &PayloadCoinsFail,
) -> Result<ModuleExtras, TokenTransferError> {
    let original = receipt.original();

    let (_, tags) = ctx_a.add_coins(&original.src_addr, &original.coins)?;

    let refund_event = RefundEvent {
        refund_receiver: original.src_addr.clone(),
        coins: original.coins.clone(),
    };

    Ok(ModuleExtras {
        events: vec![refund_event.into(), LedgerEvent { tags }.into()],
        log: vec![format!(
            "transfer: refunded {} to {}",
            original.coins, original.src_addr
        )],
    })
}
