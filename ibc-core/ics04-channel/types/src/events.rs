//! Types for the IBC events emitted by the datagram channel.

use ibc_core_host_types::identifiers::{ChainId, DatagramType, Sequence};
use ibc_core_router_types::event::{ModuleEvent, ModuleEventAttribute};
use ibc_primitives::prelude::*;

/// Channel event types
pub const SEND_DATAGRAM_EVENT: &str = "send_datagram";
pub const RECEIVE_DATAGRAM_EVENT: &str = "receive_datagram";
pub const WRITE_RECEIPT_EVENT: &str = "write_receipt";

pub const SRC_CHAIN_ATTRIBUTE_KEY: &str = "datagram_src_chain";
pub const DEST_CHAIN_ATTRIBUTE_KEY: &str = "datagram_dest_chain";
pub const DATAGRAM_TYPE_ATTRIBUTE_KEY: &str = "datagram_type";
pub const SEQUENCE_ATTRIBUTE_KEY: &str = "datagram_sequence";
pub const ROUTE_ATTRIBUTE_KEY: &str = "datagram_route";

/// Emitted when a datagram is appended to an outgoing queue.
///
/// `sequence` is the position of the datagram in its queue, which is the
/// sequence the destination chain expects it under.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SendDatagram {
    pub src_chain: ChainId,
    pub dest_chain: ChainId,
    pub datagram_type: DatagramType,
    pub sequence: Sequence,
    pub route: String,
}

impl SendDatagram {
    pub fn event_type(&self) -> &str {
        SEND_DATAGRAM_EVENT
    }
}

impl From<SendDatagram> for ModuleEvent {
    fn from(ev: SendDatagram) -> Self {
        ModuleEvent::new(
            SEND_DATAGRAM_EVENT,
            datagram_attributes(
                ev.src_chain,
                ev.dest_chain,
                ev.datagram_type,
                ev.sequence,
                ev.route,
            ),
        )
    }
}

/// Emitted when an incoming datagram was accepted and handed to its module.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReceiveDatagram {
    pub src_chain: ChainId,
    pub dest_chain: ChainId,
    pub datagram_type: DatagramType,
    pub sequence: Sequence,
    pub route: String,
}

impl ReceiveDatagram {
    pub fn event_type(&self) -> &str {
        RECEIVE_DATAGRAM_EVENT
    }
}

impl From<ReceiveDatagram> for ModuleEvent {
    fn from(ev: ReceiveDatagram) -> Self {
        ModuleEvent::new(
            RECEIVE_DATAGRAM_EVENT,
            datagram_attributes(
                ev.src_chain,
                ev.dest_chain,
                ev.datagram_type,
                ev.sequence,
                ev.route,
            ),
        )
    }
}

/// Emitted when processing a packet queued a receipt back to its source.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteReceipt {
    pub src_chain: ChainId,
    pub dest_chain: ChainId,
    pub sequence: Sequence,
    pub route: String,
}

impl WriteReceipt {
    pub fn event_type(&self) -> &str {
        WRITE_RECEIPT_EVENT
    }
}

impl From<WriteReceipt> for ModuleEvent {
    fn from(ev: WriteReceipt) -> Self {
        ModuleEvent::new(
            WRITE_RECEIPT_EVENT,
            datagram_attributes(
                ev.src_chain,
                ev.dest_chain,
                DatagramType::Receipt,
                ev.sequence,
                ev.route,
            ),
        )
    }
}

fn datagram_attributes(
    src_chain: ChainId,
    dest_chain: ChainId,
    datagram_type: DatagramType,
    sequence: Sequence,
    route: String,
) -> Vec<ModuleEventAttribute> {
    vec![
        (SRC_CHAIN_ATTRIBUTE_KEY, src_chain).into(),
        (DEST_CHAIN_ATTRIBUTE_KEY, dest_chain).into(),
        (DATAGRAM_TYPE_ATTRIBUTE_KEY, datagram_type).into(),
        (SEQUENCE_ATTRIBUTE_KEY, sequence).into(),
        (ROUTE_ATTRIBUTE_KEY, route).into(),
    ]
}
