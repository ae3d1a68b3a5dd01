use ibc_app_transfer_types::error::TokenTransferError;
use ibc_app_transfer_types::events::{LedgerEvent, RecvEvent};
use ibc_app_transfer_types::{PayloadCoins, PayloadCoinsFail};
use ibc_core::primitives::prelude::*;
use ibc_core::router::types::module::ModuleExtras;

use crate::context::TokenTransferExecutionContext;

/// This function handles the transfer receiving logic: the coins debited on
/// the source chain are credited to the receiver.
///
/// On failure the caller gets back the receipt to return to the source chain,
/// so that the sender can be refunded.
pub fn process_recv_packet_execute<Ctx: TokenTransferExecutionContext>(
    ctx_b: &mut Ctx,
    payload: &PayloadCoins,
) -> Result<ModuleExtras, (PayloadCoinsFail, TokenTransferError)> {
    let fail = |err| (PayloadCoinsFail(payload.clone()), err);

    ctx_b
        .add_coins_validate(&payload.dest_addr, &payload.coins)
        .map_err(fail)?;

    let (_, tags) = ctx_b
        .add_coins(&payload.dest_addr, &payload.coins)
        .map_err(fail)?;

    let recv_event = RecvEvent {
        sender: payload.src_addr.clone(),
        receiver: payload.dest_addr.clone(),
        coins: payload.coins.clone(),
        success: true,
    };

    Ok(ModuleExtras {
        events: vec![recv_event.into(), LedgerEvent { tags }.into()],
        log: vec![format!(
            "transfer: credited {} to {}",
            payload.coins, payload.dest_addr
        )],
    })
}
