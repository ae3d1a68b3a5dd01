//! Defines the connection keeper error type

use displaydoc::Display;
use ibc_core_host_types::error::{DecodingError, HostError, IdentifierError};
use ibc_core_host_types::identifiers::ChainId;
use ibc_primitives::prelude::*;

#[derive(Debug, Display, derive_more::From)]
pub enum ConnectionError {
    /// host error: `{0}`
    Host(HostError),
    /// decoding error: `{0}`
    Decoding(DecodingError),
    /// connection to `{chain_id}` is already established
    #[from(ignore)]
    ConnectionAlreadyEstablished { chain_id: ChainId },
    /// connection to `{chain_id}` is not established
    #[from(ignore)]
    ConnectionNotEstablished { chain_id: ChainId },
    /// invalid commit height `{height}`: must not be lower than the last established height `{last_height}`
    #[from(ignore)]
    InvalidHeight { height: u64, last_height: u64 },
    /// invalid commit: `{description}`
    #[from(ignore)]
    InvalidCommit { description: String },
    /// missing commit of `{chain_id}` at height `{height}`
    #[from(ignore)]
    MissingCommit { chain_id: ChainId, height: u64 },
    /// commit verification failed: `{description}`
    #[from(ignore)]
    VerificationFailed { description: String },
}

impl From<IdentifierError> for ConnectionError {
    fn from(e: IdentifierError) -> Self {
        Self::Decoding(DecodingError::Identifier(e))
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConnectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            Self::Host(e) => Some(e),
            Self::Decoding(e) => Some(e),
            _ => None,
        }
    }
}
