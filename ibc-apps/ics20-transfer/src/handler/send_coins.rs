use ibc_app_transfer_types::error::TokenTransferError;
use ibc_app_transfer_types::events::{LedgerEvent, SendEvent};
use ibc_app_transfer_types::PayloadCoins;
use ibc_core::primitives::prelude::*;
use ibc_core::router::types::module::ModuleExtras;

use crate::context::{TokenTransferExecutionContext, TokenTransferValidationContext};

/// Validates that the sender can afford the transfer.
pub fn send_coins_validate<Ctx>(ctx: &Ctx, payload: &PayloadCoins) -> Result<(), TokenTransferError>
where
    Ctx: TokenTransferValidationContext,
{
    payload.validate_basic()?;

    ctx.subtract_coins_validate(&payload.src_addr, &payload.coins)
}

/// Debits the transferred coins from the sender.
pub fn send_coins_execute<Ctx>(
    ctx: &mut Ctx,
    payload: &PayloadCoins,
) -> Result<ModuleExtras, TokenTransferError>
where
    Ctx: TokenTransferExecutionContext,
{
    let (_, tags) = ctx.subtract_coins(&payload.src_addr, &payload.coins)?;

    let extras = {
        let send_event = SendEvent {
            sender: payload.src_addr.clone(),
            receiver: payload.dest_addr.clone(),
            coins: payload.coins.clone(),
        };
        let log_message = format!(
            "transfer: debited {} from {}",
            payload.coins, payload.src_addr
        );

        ModuleExtras {
            events: vec![send_event.into(), LedgerEvent { tags }.into()],
            log: vec![log_message],
        }
    };

    Ok(extras)
}
