//! Types for the IBC events emitted by the connection keeper.

use ibc_core_host_types::identifiers::ChainId;
use ibc_core_router_types::event::{ModuleEvent, ModuleEventAttribute};
use ibc_primitives::prelude::*;

/// Connection event types
pub const OPEN_CONNECTION_EVENT: &str = "open_connection";
pub const UPDATE_CONNECTION_EVENT: &str = "update_connection";

pub const SRC_CHAIN_ATTRIBUTE_KEY: &str = "src_chain";
pub const HEIGHT_ATTRIBUTE_KEY: &str = "commit_height";

/// Emitted when the first root of trust of a remote chain is recorded.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenConnection {
    src_chain: ChainId,
    height: u64,
}

impl OpenConnection {
    pub fn new(src_chain: ChainId, height: u64) -> Self {
        Self { src_chain, height }
    }

    pub fn src_chain(&self) -> &ChainId {
        &self.src_chain
    }

    pub fn height(&self) -> u64 {
        self.height
    }

    pub fn event_type(&self) -> &str {
        OPEN_CONNECTION_EVENT
    }
}

impl From<OpenConnection> for ModuleEvent {
    fn from(ev: OpenConnection) -> Self {
        ModuleEvent::new(
            OPEN_CONNECTION_EVENT,
            connection_attributes(ev.src_chain, ev.height),
        )
    }
}

/// Emitted when a later commit of a remote chain is accepted.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateConnection {
    src_chain: ChainId,
    height: u64,
}

impl UpdateConnection {
    pub fn new(src_chain: ChainId, height: u64) -> Self {
        Self { src_chain, height }
    }

    pub fn src_chain(&self) -> &ChainId {
        &self.src_chain
    }

    pub fn height(&self) -> u64 {
        self.height
    }

    pub fn event_type(&self) -> &str {
        UPDATE_CONNECTION_EVENT
    }
}

impl From<UpdateConnection> for ModuleEvent {
    fn from(ev: UpdateConnection) -> Self {
        ModuleEvent::new(
            UPDATE_CONNECTION_EVENT,
            connection_attributes(ev.src_chain, ev.height),
        )
    }
}

fn connection_attributes(src_chain: ChainId, height: u64) -> Vec<ModuleEventAttribute> {
    vec![
        (SRC_CHAIN_ATTRIBUTE_KEY, src_chain).into(),
        (HEIGHT_ATTRIBUTE_KEY, height).into(),
    ]
}
