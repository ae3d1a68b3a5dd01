//! Implementation of a global context mock. Used in testing handlers of all IBC modules.

use ibc::core::channel::types::proto::Datagram as RawDatagram;
use ibc::core::channel::types::Datagram;
use ibc::core::connection::types::proto::Commit as RawCommit;
use ibc::core::connection::types::Commit;
use ibc::core::handler::types::events::IbcEvent;
use ibc::core::host::types::identifiers::ChainId;
use ibc::core::host::types::path::{CommitHeightPath, CommitPath, OutgoingQueuePath, SeqRecvPath};
use ibc::core::primitives::prelude::*;
use ibc_testkit_store::impls::InMemoryStore;
use ibc_testkit_store::types::{MainStore, ProtobufStore, TypedQueue, U64Store};
use ibc_testkit_store::utils::ProtobufCodec;

use crate::testapp::ibc::applications::transfer::types::MockBank;

pub const DEFAULT_CHAIN_ID: &str = "mockgaia";

/// The store backing every module of the mock host.
pub type MockStore = MainStore<InMemoryStore>;

pub type OutgoingQueues = TypedQueue<MockStore, OutgoingQueuePath, ProtobufCodec<Datagram, RawDatagram>>;

/// An object that stores all IBC related data of the mock host.
///
/// The channel, the connection keeper and the bank each own a module-scoped
/// store. A write buffer opened on the host spans all three.
#[derive(Debug)]
pub struct MockIbcStore {
    pub host_chain_id: ChainId,

    /// Reject received datagrams proven at a height with no recorded commit.
    pub require_trust_root: bool,

    /// Module-scoped store of the channel
    pub channel_store: MockStore,
    /// Module-scoped store of the connection keeper
    pub connection_store: MockStore,

    /// Datagrams awaiting relay, per datagram type and destination chain
    pub outgoing_queues: OutgoingQueues,
    /// Counters of the datagrams accepted, per datagram type and source chain
    pub next_sequence_recv: U64Store<MockStore, SeqRecvPath>,

    /// Last established commit height, per remote chain
    pub commit_heights: U64Store<MockStore, CommitHeightPath>,
    /// Commits recorded per remote chain and height
    pub commits: ProtobufStore<MockStore, CommitPath, Commit, RawCommit>,

    pub bank: MockBank,

    /// Events emitted by the host
    pub events: Vec<IbcEvent>,
    /// Logs of the host
    pub logs: Vec<String>,

    /// Lengths of `events` and `logs` when each open write buffer began
    pub(crate) buffer_marks: Vec<(usize, usize)>,
}

impl MockIbcStore {
    pub fn new(host_chain_id: ChainId) -> Self {
        let channel_store = MockStore::default();
        let connection_store = MockStore::default();

        Self {
            host_chain_id,
            require_trust_root: false,
            outgoing_queues: TypedQueue::new(channel_store.share()),
            next_sequence_recv: U64Store::new(channel_store.share()),
            commit_heights: U64Store::new(connection_store.share()),
            commits: ProtobufStore::new(connection_store.share()),
            channel_store,
            connection_store,
            bank: MockBank::default(),
            events: Vec::new(),
            logs: Vec::new(),
            buffer_marks: Vec::new(),
        }
    }

    /// The module stores a write buffer spans.
    pub(crate) fn module_stores_mut(&mut self) -> [&mut MockStore; 3] {
        [
            &mut self.channel_store,
            &mut self.connection_store,
            &mut self.bank.store,
        ]
    }

    /// The number of write buffers currently open.
    pub fn write_buffer_depth(&self) -> usize {
        self.buffer_marks.len()
    }
}

impl Default for MockIbcStore {
    fn default() -> Self {
        Self::new(ChainId::new(DEFAULT_CHAIN_ID).expect("Never fails"))
    }
}
