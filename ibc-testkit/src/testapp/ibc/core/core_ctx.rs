//! Implementation of a global context mock. Used in testing handlers of all IBC modules.

use ibc::core::channel::types::{Datagram, Proof};
use ibc::core::connection::types::Commit;
use ibc::core::handler::types::events::IbcEvent;
use ibc::core::host::types::error::HostError;
use ibc::core::host::types::identifiers::{ChainId, Sequence};
use ibc::core::host::types::path::{CommitHeightPath, CommitPath, OutgoingQueuePath, SeqRecvPath};
use ibc::core::host::{ExecutionContext, ValidationContext};
use ibc::core::primitives::prelude::*;
use ibc::core::primitives::Signer;
use ibc_testkit_store::context::Store;
use tracing::debug;

use super::types::MockIbcStore;

impl ValidationContext for MockIbcStore {
    fn host_chain_id(&self) -> ChainId {
        self.host_chain_id.clone()
    }

    fn commit_height(
        &self,
        commit_height_path: &CommitHeightPath,
    ) -> Result<Option<u64>, HostError> {
        Ok(self.commit_heights.get(commit_height_path))
    }

    fn commit(&self, commit_path: &CommitPath) -> Result<Option<Commit>, HostError> {
        Ok(self.commits.get(commit_path))
    }

    fn get_next_sequence_recv(&self, seq_recv_path: &SeqRecvPath) -> Result<Sequence, HostError> {
        Ok(self
            .next_sequence_recv
            .get(seq_recv_path)
            .unwrap_or_default()
            .into())
    }

    fn outgoing_queue_len(&self, queue_path: &OutgoingQueuePath) -> Result<u64, HostError> {
        Ok(self.outgoing_queues.len(queue_path))
    }

    fn outgoing_datagram(
        &self,
        queue_path: &OutgoingQueuePath,
        index: u64,
    ) -> Result<Option<Datagram>, HostError> {
        Ok(self.outgoing_queues.get(queue_path, index))
    }

    fn validate_message_signer(&self, signer: &Signer) -> Result<(), HostError> {
        if signer.is_empty() {
            return Err(HostError::invalid_data("message signer must not be empty"));
        }
        Ok(())
    }

    /// The mock host does not check inclusion proofs, but can require that
    /// the proof height names a commit recorded for the source chain.
    fn verify_datagram_proof(
        &self,
        trust_root: Option<&Commit>,
        datagram: &Datagram,
        proof: &Proof,
    ) -> Result<(), HostError> {
        if self.require_trust_root && trust_root.is_none() {
            return Err(HostError::failed_to_verify(format!(
                "no commit of {} recorded at height {}",
                datagram.header.src_chain, proof.height
            )));
        }
        Ok(())
    }
}

impl ExecutionContext for MockIbcStore {
    fn store_commit(&mut self, commit_path: CommitPath, commit: Commit) -> Result<(), HostError> {
        self.commits
            .set(commit_path.clone(), commit)
            .map_err(|_| HostError::failed_to_store(format!("commit at {commit_path}")))?;
        Ok(())
    }

    fn store_commit_height(
        &mut self,
        commit_height_path: CommitHeightPath,
        height: u64,
    ) -> Result<(), HostError> {
        self.commit_heights
            .set(commit_height_path.clone(), height)
            .map_err(|_| {
                HostError::failed_to_store(format!("commit height at {commit_height_path}"))
            })?;
        Ok(())
    }

    fn store_next_sequence_recv(
        &mut self,
        seq_recv_path: &SeqRecvPath,
        seq: Sequence,
    ) -> Result<(), HostError> {
        self.next_sequence_recv
            .set(seq_recv_path.clone(), seq.value())
            .map_err(|_| HostError::failed_to_store(format!("sequence at {seq_recv_path}")))?;
        Ok(())
    }

    fn push_outgoing_datagram(
        &mut self,
        queue_path: &OutgoingQueuePath,
        datagram: Datagram,
    ) -> Result<u64, HostError> {
        self.outgoing_queues
            .push(queue_path, datagram)
            .map_err(|_| HostError::failed_to_store(format!("datagram on {queue_path}")))
    }

    fn begin_write_buffer(&mut self) -> Result<(), HostError> {
        for store in self.module_stores_mut() {
            store.begin();
        }
        self.buffer_marks.push((self.events.len(), self.logs.len()));

        debug!(depth = self.buffer_marks.len(), "opened write buffer");
        Ok(())
    }

    fn commit_write_buffer(&mut self) -> Result<(), HostError> {
        if self.buffer_marks.is_empty() {
            return Err(HostError::Other {
                description: "no write buffer to commit".to_string(),
            });
        }

        // the mark stays until every store has merged
        for store in self.module_stores_mut() {
            store
                .apply()
                .map_err(|_| HostError::failed_to_store("merging write buffer"))?;
        }
        self.buffer_marks.pop();

        debug!(depth = self.buffer_marks.len(), "committed write buffer");
        Ok(())
    }

    fn discard_write_buffer(&mut self) {
        let Some((events_len, logs_len)) = self.buffer_marks.pop() else {
            return;
        };

        for store in self.module_stores_mut() {
            store.reset();
        }
        self.events.truncate(events_len);
        self.logs.truncate(logs_len);

        debug!(depth = self.buffer_marks.len(), "discarded write buffer");
    }

    fn emit_ibc_event(&mut self, event: IbcEvent) -> Result<(), HostError> {
        self.events.push(event);
        Ok(())
    }

    fn log_message(&mut self, message: String) -> Result<(), HostError> {
        debug!("{message}");
        self.logs.push(message);
        Ok(())
    }
}
