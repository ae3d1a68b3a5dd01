//! Relayer operations from a source chain `a` to a destination chain `b`.

use ibc::core::channel::types::msgs::{ChannelMsg, MsgReceive};
use ibc::core::channel::types::{DatagramType, Proof};
use ibc::core::connection::types::msgs::{
    ConnectionMsg, MsgOpenConnection, MsgUpdateConnection,
};
use ibc::core::handler::types::error::HandlerError;
use ibc::core::handler::types::msgs::MsgEnvelope;
use ibc::core::primitives::prelude::*;
use ibc::core::primitives::Signer;
use tracing::debug;

use crate::context::MockContext;
use crate::relayer::error::RelayerError;

/// Pins the latest commit of `ctx_b` as the root of trust of `ctx_a`'s
/// connection to it.
pub fn open_connection_on_a(
    ctx_a: &mut MockContext,
    ctx_b: &MockContext,
    signer: Signer,
) -> Result<(), RelayerError> {
    let msg = MsgEnvelope::Connection(ConnectionMsg::OpenConnection(MsgOpenConnection {
        src_chain: ctx_b.chain_id().clone(),
        root_of_trust: ctx_b.host_commit(),
        signer,
    }));
    ctx_a.deliver(msg)?;
    Ok(())
}

/// Advances `ctx_a`'s connection to `ctx_b` to the latest commit of `ctx_b`.
pub fn update_connection_on_a(
    ctx_a: &mut MockContext,
    ctx_b: &MockContext,
    signer: Signer,
) -> Result<(), RelayerError> {
    let msg = MsgEnvelope::Connection(ConnectionMsg::UpdateConnection(MsgUpdateConnection {
        src_chain: ctx_b.chain_id().clone(),
        commit: ctx_b.host_commit(),
        signer,
    }));
    ctx_a.deliver(msg)?;
    Ok(())
}

/// Delivers to `ctx_b` every datagram of `datagram_type` that `ctx_a` queued
/// for it and `ctx_b` has not accepted yet, in queue order.
///
/// The queue index of a datagram is its sequence, and the proofs name the
/// last commit of `ctx_a` recorded on `ctx_b`. Returns the outcome of each
/// delivery: a packet the application rejected fails without stopping the
/// relay.
pub fn relay_datagrams_a_to_b(
    ctx_a: &MockContext,
    ctx_b: &mut MockContext,
    datagram_type: DatagramType,
    signer: Signer,
) -> Vec<Result<(), HandlerError>> {
    let chain_a = ctx_a.chain_id().clone();
    let chain_b = ctx_b.chain_id().clone();

    let next = ctx_b.next_sequence_recv(datagram_type, &chain_a).value();
    let datagrams = ctx_a.outgoing_datagrams(datagram_type, &chain_b);
    let proof_height = ctx_b.commit_height(&chain_a).unwrap_or_default();

    debug!(
        %chain_a,
        %chain_b,
        %datagram_type,
        next_sequence = next,
        "relaying datagrams"
    );

    datagrams
        .into_iter()
        .zip(0u64..)
        .skip_while(|(_, sequence)| *sequence < next)
        .map(|(datagram, sequence)| {
            let msg = MsgReceive {
                datagram,
                proof: Proof::new(proof_height, sequence),
                signer: signer.clone(),
            };
            ctx_b.deliver(MsgEnvelope::Channel(ChannelMsg::Receive(msg)))
        })
        .collect()
}
