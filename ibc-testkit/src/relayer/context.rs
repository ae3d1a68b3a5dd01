use ibc::core::channel::types::DatagramType;
use ibc::core::handler::types::error::HandlerError;
use ibc::core::primitives::prelude::*;
use ibc::core::primitives::Signer;

use crate::context::MockContext;
use crate::relayer::error::RelayerError;
use crate::relayer::utils::{
    open_connection_on_a, relay_datagrams_a_to_b, update_connection_on_a,
};

/// A relayer context that allows interaction between two [`MockContext`] instances.
#[derive(Debug)]
pub struct RelayerContext {
    ctx_a: MockContext,
    ctx_b: MockContext,
}

impl RelayerContext {
    pub fn new(ctx_a: MockContext, ctx_b: MockContext) -> Self {
        Self { ctx_a, ctx_b }
    }

    pub fn get_ctx_a(&self) -> &MockContext {
        &self.ctx_a
    }

    pub fn get_ctx_b(&self) -> &MockContext {
        &self.ctx_b
    }

    pub fn get_ctx_a_mut(&mut self) -> &mut MockContext {
        &mut self.ctx_a
    }

    pub fn get_ctx_b_mut(&mut self) -> &mut MockContext {
        &mut self.ctx_b
    }

    pub fn open_connection_on_a(&mut self, signer: Signer) -> Result<(), RelayerError> {
        open_connection_on_a(&mut self.ctx_a, &self.ctx_b, signer)
    }

    pub fn open_connection_on_b(&mut self, signer: Signer) -> Result<(), RelayerError> {
        open_connection_on_a(&mut self.ctx_b, &self.ctx_a, signer)
    }

    pub fn update_connection_on_a(&mut self, signer: Signer) -> Result<(), RelayerError> {
        update_connection_on_a(&mut self.ctx_a, &self.ctx_b, signer)
    }

    pub fn update_connection_on_b(&mut self, signer: Signer) -> Result<(), RelayerError> {
        update_connection_on_a(&mut self.ctx_b, &self.ctx_a, signer)
    }

    /// Opens the connections of both chains to each other.
    pub fn open_connections(&mut self, signer: Signer) -> Result<(), RelayerError> {
        self.open_connection_on_a(signer.clone())?;
        self.open_connection_on_b(signer)
    }

    pub fn relay_packets_a_to_b(&mut self, signer: Signer) -> Vec<Result<(), HandlerError>> {
        relay_datagrams_a_to_b(&self.ctx_a, &mut self.ctx_b, DatagramType::Packet, signer)
    }

    pub fn relay_packets_b_to_a(&mut self, signer: Signer) -> Vec<Result<(), HandlerError>> {
        relay_datagrams_a_to_b(&self.ctx_b, &mut self.ctx_a, DatagramType::Packet, signer)
    }

    pub fn relay_receipts_a_to_b(&mut self, signer: Signer) -> Vec<Result<(), HandlerError>> {
        relay_datagrams_a_to_b(&self.ctx_a, &mut self.ctx_b, DatagramType::Receipt, signer)
    }

    pub fn relay_receipts_b_to_a(&mut self, signer: Signer) -> Vec<Result<(), HandlerError>> {
        relay_datagrams_a_to_b(&self.ctx_b, &mut self.ctx_a, DatagramType::Receipt, signer)
    }
}
