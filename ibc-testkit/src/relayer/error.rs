use derive_more::From;
use displaydoc::Display;
use ibc::core::handler::types::error::HandlerError;

#[derive(Debug, Display, From)]
pub enum RelayerError {
    /// transaction processing by modules failed error: `{0}`
    TransactionFailed(HandlerError),
}

#[cfg(feature = "std")]
impl std::error::Error for RelayerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            Self::TransactionFailed(e) => Some(e),
        }
    }
}
