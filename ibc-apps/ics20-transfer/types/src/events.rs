//! Defines all ledger-transfer event types
use ibc_core_router_types::event::{ModuleEvent, ModuleEventAttribute};
use ibc_primitives::prelude::*;
use ibc_primitives::Signer;

use crate::{Coins, MODULE_ID_STR};

const EVENT_TYPE_SEND: &str = "ibc_transfer";
const EVENT_TYPE_PACKET: &str = "coins_packet";
const EVENT_TYPE_REFUND: &str = "coins_refund";
const EVENT_TYPE_LEDGER: &str = "ledger";

/// Contains all events variants that can be emitted from the ledger-transfer application
pub enum Event {
    Send(SendEvent),
    Recv(RecvEvent),
    Refund(RefundEvent),
    Ledger(LedgerEvent),
}

/// Event emitted when coins were debited to be sent to another chain.
pub struct SendEvent {
    pub sender: Signer,
    pub receiver: Signer,
    pub coins: Coins,
}

impl From<SendEvent> for ModuleEvent {
    fn from(ev: SendEvent) -> Self {
        let SendEvent {
            sender,
            receiver,
            coins,
        } = ev;
        Self {
            kind: EVENT_TYPE_SEND.to_string(),
            attributes: vec![
                ("module", MODULE_ID_STR).into(),
                ("sender", sender).into(),
                ("receiver", receiver).into(),
                ("amount", coins).into(),
            ],
        }
    }
}

/// Event emitted once a received coin transfer packet was processed.
pub struct RecvEvent {
    pub sender: Signer,
    pub receiver: Signer,
    pub coins: Coins,
    pub success: bool,
}

impl From<RecvEvent> for ModuleEvent {
    fn from(ev: RecvEvent) -> Self {
        let RecvEvent {
            sender,
            receiver,
            coins,
            success,
        } = ev;
        Self {
            kind: EVENT_TYPE_PACKET.to_string(),
            attributes: vec![
                ("module", MODULE_ID_STR).into(),
                ("sender", sender).into(),
                ("receiver", receiver).into(),
                ("amount", coins).into(),
                ("success", success).into(),
            ],
        }
    }
}

/// Event emitted when a failed transfer receipt refunded its sender.
pub struct RefundEvent {
    pub refund_receiver: Signer,
    pub coins: Coins,
}

impl From<RefundEvent> for ModuleEvent {
    fn from(ev: RefundEvent) -> Self {
        let RefundEvent {
            refund_receiver,
            coins,
        } = ev;
        Self {
            kind: EVENT_TYPE_REFUND.to_string(),
            attributes: vec![
                ("module", MODULE_ID_STR).into(),
                ("refund_receiver", refund_receiver).into(),
                ("amount", coins).into(),
            ],
        }
    }
}

/// Audit tags reported by the ledger for a balance mutation.
pub struct LedgerEvent {
    pub tags: Vec<ModuleEventAttribute>,
}

impl From<LedgerEvent> for ModuleEvent {
    fn from(ev: LedgerEvent) -> Self {
        Self {
            kind: EVENT_TYPE_LEDGER.to_string(),
            attributes: ev.tags,
        }
    }
}

impl From<Event> for ModuleEvent {
    fn from(ev: Event) -> Self {
        match ev {
            Event::Send(ev) => ev.into(),
            Event::Recv(ev) => ev.into(),
            Event::Refund(ev) => ev.into(),
            Event::Ledger(ev) => ev.into(),
        }
    }
}
