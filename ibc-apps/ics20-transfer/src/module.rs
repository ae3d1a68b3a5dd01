use ibc_app_transfer_types::error::TokenTransferError;
use ibc_core::channel::types::error::ChannelError;
use ibc_core::channel::types::Payload;
use ibc_core::primitives::prelude::*;
use ibc_core::router::module::{Module, PacketOutcome};
use ibc_core::router::types::module::ModuleExtras;

use crate::context::{TokenTransferExecutionContext, TokenTransferValidationContext};
use crate::handler::{
    process_recv_packet_execute, refund_coins_execute, send_coins_execute, send_coins_validate,
};

fn unexpected_payload(payload: &Payload) -> TokenTransferError {
    TokenTransferError::UnexpectedPayload {
        type_url: payload.type_url().to_string(),
    }
}

fn into_channel_error(err: TokenTransferError) -> ChannelError {
    ChannelError::AppModule {
        description: err.to_string(),
    }
}

/// Only coin transfers can be sent: failure receipts are produced by the
/// channel on behalf of the receiving chain.
pub fn on_send_validate(
    ctx: &impl TokenTransferValidationContext,
    payload: &Payload,
) -> Result<(), TokenTransferError> {
    match payload {
        Payload::Coins(coins) => send_coins_validate(ctx, coins),
        _ => Err(unexpected_payload(payload)),
    }
}

pub fn on_send_execute(
    ctx: &mut impl TokenTransferExecutionContext,
    payload: &Payload,
) -> Result<ModuleExtras, TokenTransferError> {
    match payload {
        Payload::Coins(coins) => send_coins_execute(ctx, coins),
        _ => Err(unexpected_payload(payload)),
    }
}

pub fn on_recv_packet_execute(
    ctx: &mut impl TokenTransferExecutionContext,
    payload: &Payload,
) -> PacketOutcome {
    let coins = match payload {
        Payload::Coins(coins) => coins,
        _ => return PacketOutcome::failure(into_channel_error(unexpected_payload(payload)), None),
    };

    match process_recv_packet_execute(ctx, coins) {
        Ok(extras) => PacketOutcome::success(extras),
        Err((receipt, err)) => {
            PacketOutcome::failure(into_channel_error(err), Some(receipt.into()))
        }
    }
}

pub fn on_recv_receipt_execute(
    ctx: &mut impl TokenTransferExecutionContext,
    payload: &Payload,
) -> PacketOutcome {
    let result = match payload {
        Payload::CoinsFail(receipt) => refund_coins_execute(ctx, receipt),
        _ => Err(unexpected_payload(payload)),
    };

    PacketOutcome {
        reply: None,
        result: result.map_err(into_channel_error),
    }
}

/// The ledger-transfer application, bound to the `ibc/bank` route.
#[derive(Debug, Default)]
pub struct TransferModule;

impl<Ctx> Module<Ctx> for TransferModule
where
    Ctx: TokenTransferExecutionContext,
{
    fn on_send_validate(&self, ctx: &Ctx, payload: &Payload) -> Result<(), ChannelError> {
        on_send_validate(ctx, payload).map_err(into_channel_error)
    }

    fn on_send_execute(
        &mut self,
        ctx: &mut Ctx,
        payload: &Payload,
    ) -> Result<ModuleExtras, ChannelError> {
        on_send_execute(ctx, payload).map_err(into_channel_error)
    }

    fn on_recv_packet_execute(&mut self, ctx: &mut Ctx, payload: &Payload) -> PacketOutcome {
        on_recv_packet_execute(ctx, payload)
    }

    fn on_recv_receipt_execute(&mut self, ctx: &mut Ctx, payload: &Payload) -> PacketOutcome {
        on_recv_receipt_execute(ctx, payload)
    }
}
