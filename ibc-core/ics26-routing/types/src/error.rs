use displaydoc::Display;
use ibc_core_host_types::error::{DecodingError, HostError};
use ibc_primitives::prelude::*;

/// Error type for the router module.
#[derive(Debug, Display, derive_more::From)]
pub enum RouterError {
    /// host error: `{0}`
    Host(HostError),
    /// decoding error: `{0}`
    Decoding(DecodingError),
    /// unknown request: unrecognized message type `{type_url}`
    #[from(ignore)]
    UnknownRequest { type_url: String },
    /// missing module for route `{route}`
    #[from(ignore)]
    MissingModule { route: String },
}

#[cfg(feature = "std")]
impl std::error::Error for RouterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            Self::Host(e) => Some(e),
            Self::Decoding(e) => Some(e),
            _ => None,
        }
    }
}
