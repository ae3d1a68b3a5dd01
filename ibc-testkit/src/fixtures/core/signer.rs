use ibc::core::primitives::Signer;

/// The account relaying datagrams and connection updates in the fixtures.
pub const RELAYER_ACCOUNT: &str = "relayer";

/// Returns the dummy relayer signer, for testing purposes only!
pub fn dummy_account_id() -> Signer {
    Signer::from(RELAYER_ACCOUNT)
}
