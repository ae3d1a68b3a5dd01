//! Defines the datagram channel error type

use displaydoc::Display;
use ibc_core_host_types::error::{DecodingError, HostError, IdentifierError};
use ibc_core_host_types::identifiers::{ChainId, DatagramType, Sequence};
use ibc_primitives::prelude::*;

#[derive(Debug, Display, derive_more::From)]
pub enum ChannelError {
    /// host error: `{0}`
    Host(HostError),
    /// decoding error: `{0}`
    Decoding(DecodingError),
    /// datagram is bound for `{actual}` but this chain is `{expected}`
    #[from(ignore)]
    ChainMismatch { expected: ChainId, actual: ChainId },
    /// invalid datagram sequence: expected `{expected}`, actual `{actual}`
    #[from(ignore)]
    InvalidSequence { expected: Sequence, actual: Sequence },
    /// unknown datagram type tag `{tag}`
    #[from(ignore)]
    UnknownDatagramType { tag: u64 },
    /// mismatched datagram type: payload requires `{expected}`, tagged `{actual}`
    #[from(ignore)]
    MismatchedDatagramType {
        expected: DatagramType,
        actual: DatagramType,
    },
    /// invalid payload: `{description}`
    #[from(ignore)]
    InvalidPayload { description: String },
    /// unknown payload type `{type_url}`
    #[from(ignore)]
    UnknownPayloadType { type_url: String },
    /// application module error: `{description}`
    #[from(ignore)]
    AppModule { description: String },
    /// invalid reply: `{description}`
    #[from(ignore)]
    InvalidReply { description: String },
    /// datagram proof verification failed: `{description}`
    #[from(ignore)]
    ProofVerificationFailed { description: String },
    /// payload designates no signer
    #[from(ignore)]
    MissingSigner,
}

impl From<IdentifierError> for ChannelError {
    fn from(e: IdentifierError) -> Self {
        Self::Decoding(DecodingError::Identifier(e))
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ChannelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            Self::Host(e) => Some(e),
            Self::Decoding(e) => Some(e),
            _ => None,
        }
    }
}
