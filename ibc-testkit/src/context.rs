use ibc::apps::transfer::types::Coins;
use ibc::core::channel::types::{Datagram, DatagramType};
use ibc::core::connection::types::{Commit, CommitmentRoot};
use ibc::core::entrypoint::dispatch;
use ibc::core::handler::types::error::HandlerError;
use ibc::core::handler::types::events::IbcEvent;
use ibc::core::handler::types::msgs::MsgEnvelope;
use ibc::core::host::types::identifiers::{ChainId, Sequence};
use ibc::core::host::types::path::{CommitHeightPath, OutgoingQueuePath, SeqRecvPath};
use ibc::core::host::ValidationContext;
use ibc::core::primitives::prelude::*;
use ibc::core::primitives::proto::Any;
use ibc::core::primitives::Signer;
use tracing::debug;

use crate::fixtures::core::context::MockContextConfig;
use crate::testapp::ibc::applications::transfer::types::BalancePath;
use crate::testapp::ibc::core::router::MockRouter;
use crate::testapp::ibc::core::types::MockIbcStore;

/// A mock host chain: the IBC store, the router that binds payload routes to
/// applications, and a block height that advances with every delivered
/// message.
#[derive(Debug)]
pub struct MockContext {
    pub ibc_store: MockIbcStore,
    pub ibc_router: MockRouter,
    pub latest_height: u64,
}

impl Default for MockContext {
    fn default() -> Self {
        MockContextConfig::builder().build()
    }
}

impl MockContext {
    pub fn chain_id(&self) -> &ChainId {
        &self.ibc_store.host_chain_id
    }

    pub fn ibc_store(&self) -> &MockIbcStore {
        &self.ibc_store
    }

    pub fn ibc_store_mut(&mut self) -> &mut MockIbcStore {
        &mut self.ibc_store
    }

    pub fn with_router(self, ibc_router: MockRouter) -> Self {
        Self { ibc_router, ..self }
    }

    /// Credits `coins` to `account` at genesis, bypassing the channel.
    pub fn with_balance(mut self, account: &Signer, coins: Coins) -> Self {
        let balance = self
            .balance(account)
            .checked_add(&coins)
            .expect("no overflow");
        self.ibc_store
            .bank
            .balances
            .set(BalancePath::new(account), balance)
            .expect("Never fails");
        self
    }

    pub fn advance_block(&mut self) {
        self.latest_height += 1;
    }

    /// The commit a remote chain records for this chain at its latest height.
    ///
    /// The root is derived from the chain id and the height only, so two
    /// commits of one chain at one height are equal.
    pub fn host_commit(&self) -> Commit {
        let root = format!("{}@{}", self.chain_id(), self.latest_height);
        Commit::new(self.latest_height, CommitmentRoot::from_bytes(root.as_bytes()))
            .expect("Never fails")
    }

    /// Validates and executes `msg`, then produces a new block.
    ///
    /// A failed message is not rolled back: the writes a failed packet keeps,
    /// its sequence advance and its failure receipt, stay in the store.
    pub fn deliver(&mut self, msg: MsgEnvelope) -> Result<(), HandlerError> {
        debug!(chain = %self.chain_id(), type_url = msg.type_url(), "delivering message");
        let result = dispatch(&mut self.ibc_store, &mut self.ibc_router, msg);
        self.advance_block();
        result
    }

    /// Decodes and delivers the messages of a transaction in order, stopping
    /// at the first failure.
    pub fn submit_tx(&mut self, msgs: Vec<Any>) -> Result<(), HandlerError> {
        for msg in msgs {
            let envelope = MsgEnvelope::try_from(msg)?;
            self.deliver(envelope)?;
        }
        Ok(())
    }

    pub fn balance(&self, account: &Signer) -> Coins {
        self.ibc_store.bank.balance(account)
    }

    pub fn outgoing_datagrams(
        &self,
        datagram_type: DatagramType,
        dest_chain: &ChainId,
    ) -> Vec<Datagram> {
        self.ibc_store
            .outgoing_queues
            .values(&OutgoingQueuePath::new(datagram_type, dest_chain))
    }

    pub fn outgoing_queue_len(&self, datagram_type: DatagramType, dest_chain: &ChainId) -> u64 {
        self.ibc_store
            .outgoing_queue_len(&OutgoingQueuePath::new(datagram_type, dest_chain))
            .expect("Never fails")
    }

    pub fn next_sequence_recv(
        &self,
        datagram_type: DatagramType,
        src_chain: &ChainId,
    ) -> Sequence {
        self.ibc_store
            .get_next_sequence_recv(&SeqRecvPath::new(datagram_type, src_chain))
            .expect("Never fails")
    }

    pub fn commit_height(&self, src_chain: &ChainId) -> Option<u64> {
        self.ibc_store
            .commit_height(&CommitHeightPath::new(src_chain))
            .expect("Never fails")
    }

    pub fn get_events(&self) -> Vec<IbcEvent> {
        self.ibc_store.events.clone()
    }

    pub fn get_logs(&self) -> Vec<String> {
        self.ibc_store.logs.clone()
    }
}
