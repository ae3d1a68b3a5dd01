use ibc::core::connection::types::msgs::{MsgOpenConnection, MsgUpdateConnection};
use ibc::core::connection::types::{Commit, CommitmentRoot};
use ibc::core::host::types::identifiers::ChainId;

use crate::fixtures::core::signer::dummy_account_id;

/// Returns a dummy `ChainId`, for testing purposes only!
pub fn dummy_chain_id(id: &str) -> ChainId {
    ChainId::new(id).expect("Never fails")
}

/// Returns a dummy `Commit` at `height` over `root`, for testing purposes only!
pub fn dummy_commit(height: u64, root: &str) -> Commit {
    Commit::new(height, CommitmentRoot::from_bytes(root.as_bytes())).expect("Never fails")
}

/// Returns a dummy `MsgOpenConnection` pinning `root` of `src_chain` at
/// `height`, for testing purposes only!
pub fn dummy_msg_open_connection(src_chain: &str, height: u64, root: &str) -> MsgOpenConnection {
    MsgOpenConnection {
        src_chain: dummy_chain_id(src_chain),
        root_of_trust: dummy_commit(height, root),
        signer: dummy_account_id(),
    }
}

/// Returns a dummy `MsgUpdateConnection`, for testing purposes only!
pub fn dummy_msg_update_connection(
    src_chain: &str,
    height: u64,
    root: &str,
) -> MsgUpdateConnection {
    MsgUpdateConnection {
        src_chain: dummy_chain_id(src_chain),
        commit: dummy_commit(height, root),
        signer: dummy_account_id(),
    }
}
