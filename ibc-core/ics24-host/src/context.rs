use ibc_core_channel_types::{Datagram, Proof};
use ibc_core_connection_types::Commit;
use ibc_core_handler_types::events::IbcEvent;
use ibc_core_host_types::error::HostError;
use ibc_core_host_types::identifiers::{ChainId, Sequence};
use ibc_core_host_types::path::{CommitHeightPath, CommitPath, OutgoingQueuePath, SeqRecvPath};
use ibc_primitives::prelude::*;
use ibc_primitives::Signer;

/// Context to be implemented by the host that provides all "read-only" methods.
///
/// Trait used for the top-level `validate` entrypoint in the `ibc-core` crate.
pub trait ValidationContext {
    /// Returns the identifier of the local chain.
    fn host_chain_id(&self) -> ChainId;

    /// Returns the last established commit height of the connection to the
    /// remote chain, or `None` if the connection is not established.
    fn commit_height(&self, commit_height_path: &CommitHeightPath)
        -> Result<Option<u64>, HostError>;

    /// Returns the commit recorded for the remote chain at the given height.
    fn commit(&self, commit_path: &CommitPath) -> Result<Option<Commit>, HostError>;

    /// Returns the sequence of the next datagram to be received for the given
    /// store path. A counter that was never written reads as zero.
    fn get_next_sequence_recv(&self, seq_recv_path: &SeqRecvPath) -> Result<Sequence, HostError>;

    /// Returns the number of datagrams ever pushed onto the given outgoing
    /// queue.
    fn outgoing_queue_len(&self, queue_path: &OutgoingQueuePath) -> Result<u64, HostError>;

    /// Returns the datagram stored at `index` of the given outgoing queue.
    fn outgoing_datagram(
        &self,
        queue_path: &OutgoingQueuePath,
        index: u64,
    ) -> Result<Option<Datagram>, HostError>;

    /// Validates the signer of IBC messages, which represents the address
    /// of the user/relayer that signed the given message.
    fn validate_message_signer(&self, signer: &Signer) -> Result<(), HostError>;

    /// Light client hook: checks that `new_commit` is a legitimate
    /// continuation of `last_commit` on `src_chain`.
    ///
    /// Hosts without a light client accept every commit.
    fn verify_commit_update(
        &self,
        _src_chain: &ChainId,
        _last_commit: &Commit,
        _new_commit: &Commit,
    ) -> Result<(), HostError> {
        Ok(())
    }

    /// Checks that `datagram` was committed by its source chain under the
    /// commit it was proven against. `trust_root` is the commit recorded at
    /// `proof.height`, if any.
    ///
    /// Hosts that do not verify inclusion proofs accept every datagram.
    fn verify_datagram_proof(
        &self,
        _trust_root: Option<&Commit>,
        _datagram: &Datagram,
        _proof: &Proof,
    ) -> Result<(), HostError> {
        Ok(())
    }
}

/// Context to be implemented by the host that provides all "write-only" methods.
///
/// Trait used for the top-level `execute` and `dispatch` entrypoints in the `ibc-core` crate.
pub trait ExecutionContext: ValidationContext {
    /// Stores the given commit at path
    fn store_commit(&mut self, commit_path: CommitPath, commit: Commit) -> Result<(), HostError>;

    /// Stores the last established commit height of the connection to the
    /// remote chain.
    fn store_commit_height(
        &mut self,
        commit_height_path: CommitHeightPath,
        height: u64,
    ) -> Result<(), HostError>;

    /// Stores the given `nextSequenceRecv` number at the given store path
    fn store_next_sequence_recv(
        &mut self,
        seq_recv_path: &SeqRecvPath,
        seq: Sequence,
    ) -> Result<(), HostError>;

    /// Appends the datagram to the given outgoing queue and returns the index
    /// it was stored at.
    fn push_outgoing_datagram(
        &mut self,
        queue_path: &OutgoingQueuePath,
        datagram: Datagram,
    ) -> Result<u64, HostError>;

    /// Redirects all subsequent writes to a fresh overlay on top of the
    /// current state. Buffers nest.
    ///
    /// Prefer [`WriteBuffer`](crate::WriteBuffer), which guarantees the
    /// buffer is resolved on every exit path.
    fn begin_write_buffer(&mut self) -> Result<(), HostError>;

    /// Merges the innermost write buffer into its parent.
    fn commit_write_buffer(&mut self) -> Result<(), HostError>;

    /// Drops the innermost write buffer and every write it holds.
    fn discard_write_buffer(&mut self);

    /// Emit the given IBC event
    fn emit_ibc_event(&mut self, event: IbcEvent) -> Result<(), HostError>;

    /// Log the given message.
    fn log_message(&mut self, message: String) -> Result<(), HostError>;
}
