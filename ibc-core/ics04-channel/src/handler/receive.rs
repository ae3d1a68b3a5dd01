use ibc_core_channel_types::error::ChannelError;
use ibc_core_channel_types::events::{ReceiveDatagram, WriteReceipt};
use ibc_core_channel_types::msgs::MsgReceive;
use ibc_core_channel_types::{Datagram, DatagramType, Header, Payload};
use ibc_core_handler_types::events::{IbcEvent, MessageEvent};
use ibc_core_host::types::path::{CommitPath, OutgoingQueuePath, SeqRecvPath};
use ibc_core_host::{ExecutionContext, ValidationContext, WriteBuffer};
use ibc_core_router::module::{Module, PacketOutcome};
use ibc_primitives::prelude::*;

use super::emit_module_extras;

/// Validate that the datagram is bound for this chain, carries a well-formed
/// payload, is proven and is next in its sequence stream.
pub fn receive_validate<Ctx>(ctx: &Ctx, msg: &MsgReceive) -> Result<(), ChannelError>
where
    Ctx: ValidationContext,
{
    ctx.validate_message_signer(&msg.signer)?;

    let header = &msg.datagram.header;
    let host_chain_id = ctx.host_chain_id();
    if header.dest_chain != host_chain_id {
        return Err(ChannelError::ChainMismatch {
            expected: host_chain_id,
            actual: header.dest_chain.clone(),
        });
    }

    msg.datagram.payload.validate_basic()?;

    // Verify proof
    {
        let trust_root = ctx.commit(&CommitPath::new(&header.src_chain, msg.proof.height))?;

        ctx.verify_datagram_proof(trust_root.as_ref(), &msg.datagram, &msg.proof)
            .map_err(|e| ChannelError::ProofVerificationFailed {
                description: e.to_string(),
            })?;
    }

    let seq_recv_path = SeqRecvPath::new(msg.datagram.datagram_type(), &header.src_chain);
    let next_seq_recv = ctx.get_next_sequence_recv(&seq_recv_path)?;
    if msg.proof.sequence != next_seq_recv {
        return Err(ChannelError::InvalidSequence {
            expected: next_seq_recv,
            actual: msg.proof.sequence,
        });
    }

    Ok(())
}

/// Accepts the datagram and hands its payload to the application.
///
/// The sequence counter advances before the application runs and stays
/// advanced when a packet fails. A failed packet returns its error after its
/// writes were discarded and its failure receipt, if any, was queued: hosts
/// must persist these writes rather than roll back the whole message.
///
/// # Panics
///
/// Panics if the application fails to apply a receipt, or replies to one.
/// A receipt reports a packet that already completed on the other chain, so
/// the local chain has no way to correct such a failure.
pub fn receive_execute<Ctx>(
    ctx: &mut Ctx,
    module: &mut dyn Module<Ctx>,
    msg: MsgReceive,
) -> Result<(), ChannelError>
where
    Ctx: ExecutionContext,
{
    let Datagram { header, payload } = msg.datagram;
    let datagram_type = payload.datagram_type();

    let seq_recv_path = SeqRecvPath::new(datagram_type, &header.src_chain);
    let sequence = ctx.get_next_sequence_recv(&seq_recv_path)?;
    ctx.store_next_sequence_recv(&seq_recv_path, sequence.increment())?;

    ctx.log_message(format!(
        "success: receive: accepted {datagram_type} {sequence} from {}",
        header.src_chain
    ))?;

    ctx.emit_ibc_event(IbcEvent::Message(MessageEvent::Channel))?;
    ctx.emit_ibc_event(IbcEvent::ReceiveDatagram(ReceiveDatagram {
        src_chain: header.src_chain.clone(),
        dest_chain: header.dest_chain.clone(),
        datagram_type,
        sequence,
        route: payload.route().to_string(),
    }))?;

    match datagram_type {
        DatagramType::Packet => process_packet(ctx, module, &header, &payload),
        DatagramType::Receipt => process_receipt(ctx, module, &header, &payload),
    }
}

fn process_packet<Ctx>(
    ctx: &mut Ctx,
    module: &mut dyn Module<Ctx>,
    header: &Header,
    payload: &Payload,
) -> Result<(), ChannelError>
where
    Ctx: ExecutionContext,
{
    let mut buffer = WriteBuffer::begin(&mut *ctx)?;
    let PacketOutcome { reply, result } = module.on_recv_packet_execute(&mut buffer, payload);

    let (reply, result) = match reply {
        Some(reply) if reply.datagram_type() != DatagramType::Receipt => (
            None,
            Err(ChannelError::InvalidReply {
                description: format!(
                    "a packet must be answered with a receipt, got a {}",
                    reply.datagram_type()
                ),
            }),
        ),
        reply => (reply, result),
    };

    match result {
        Ok(extras) => {
            buffer.commit()?;

            if let Some(reply) = reply {
                write_receipt(ctx, header, reply)?;
            }

            emit_module_extras(ctx, extras)
        }
        Err(err) => {
            buffer.discard();

            if let Some(reply) = reply {
                write_receipt(ctx, header, reply)?;
            }

            ctx.log_message(format!(
                "failure: receive: packet from {} rolled back: {err}",
                header.src_chain
            ))?;

            Err(err)
        }
    }
}

fn process_receipt<Ctx>(
    ctx: &mut Ctx,
    module: &mut dyn Module<Ctx>,
    header: &Header,
    payload: &Payload,
) -> Result<(), ChannelError>
where
    Ctx: ExecutionContext,
{
    let PacketOutcome { reply, result } = module.on_recv_receipt_execute(ctx, payload);

    let extras = match result {
        Ok(extras) => extras,
        Err(err) => panic!("receipt from {} could not be applied: {err}", header.src_chain),
    };

    if let Some(reply) = reply {
        panic!(
            "receipt from {} was answered with a {} payload",
            header.src_chain,
            reply.type_url()
        );
    }

    emit_module_extras(ctx, extras)
}

/// Queues `reply` back to the source of the datagram described by `header`.
fn write_receipt<Ctx>(ctx: &mut Ctx, header: &Header, reply: Payload) -> Result<(), ChannelError>
where
    Ctx: ExecutionContext,
{
    let reply_header = header.inverse_direction();
    let route = reply.route().to_string();
    let queue_path = OutgoingQueuePath::new(DatagramType::Receipt, &reply_header.dest_chain);

    let sequence =
        ctx.push_outgoing_datagram(&queue_path, Datagram::new(reply_header.clone(), reply))?;

    ctx.log_message(format!(
        "success: receive: queued receipt {sequence} for {}",
        reply_header.dest_chain
    ))?;

    let Header {
        src_chain,
        dest_chain,
    } = reply_header;
    ctx.emit_ibc_event(IbcEvent::Message(MessageEvent::Channel))?;
    ctx.emit_ibc_event(IbcEvent::WriteReceipt(WriteReceipt {
        src_chain,
        dest_chain,
        sequence: sequence.into(),
        route,
    }))?;

    Ok(())
}
