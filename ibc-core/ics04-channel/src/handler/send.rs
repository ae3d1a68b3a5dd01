use ibc_core_channel_types::error::ChannelError;
use ibc_core_channel_types::events::SendDatagram;
use ibc_core_channel_types::msgs::MsgSend;
use ibc_core_channel_types::{Datagram, Header};
use ibc_core_handler_types::events::{IbcEvent, MessageEvent};
use ibc_core_host::types::path::OutgoingQueuePath;
use ibc_core_host::{ExecutionContext, ValidationContext};
use ibc_core_router::module::Module;
use ibc_primitives::prelude::*;

use super::emit_module_extras;

/// Validate that sending the given payload would succeed.
pub fn send_validate<Ctx>(
    ctx: &Ctx,
    module: &dyn Module<Ctx>,
    msg: &MsgSend,
) -> Result<(), ChannelError>
where
    Ctx: ValidationContext,
{
    msg.payload.validate_basic()?;

    let signers = msg.signers();
    if signers.is_empty() {
        return Err(ChannelError::MissingSigner);
    }
    for signer in &signers {
        ctx.validate_message_signer(signer)?;
    }

    module.on_send_validate(ctx, &msg.payload)
}

/// Runs the local half of the send, then queues the datagram for the
/// destination chain. Nothing is queued if the application fails.
pub fn send_execute<Ctx>(
    ctx: &mut Ctx,
    module: &mut dyn Module<Ctx>,
    msg: MsgSend,
) -> Result<(), ChannelError>
where
    Ctx: ExecutionContext,
{
    let extras = module.on_send_execute(ctx, &msg.payload)?;

    let MsgSend {
        dest_chain,
        payload,
    } = msg;
    let src_chain = ctx.host_chain_id();
    let datagram_type = payload.datagram_type();
    let route = payload.route();

    let queue_path = OutgoingQueuePath::new(datagram_type, &dest_chain);
    let datagram = Datagram::new(Header::new(src_chain.clone(), dest_chain.clone()), payload);

    // The queue index is the sequence the destination expects the datagram at.
    let sequence = ctx.push_outgoing_datagram(&queue_path, datagram)?;

    ctx.log_message(format!(
        "success: send: queued {datagram_type} {sequence} for {dest_chain}"
    ))?;

    ctx.emit_ibc_event(IbcEvent::Message(MessageEvent::Channel))?;
    ctx.emit_ibc_event(IbcEvent::SendDatagram(SendDatagram {
        src_chain,
        dest_chain,
        datagram_type,
        sequence: sequence.into(),
        route: route.to_string(),
    }))?;

    emit_module_extras(ctx, extras)
}
