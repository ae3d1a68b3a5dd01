//! Defines the token transfer error type
use displaydoc::Display;
use ibc_core_host_types::error::{DecodingError, HostError};
use ibc_primitives::prelude::*;
use uint::FromDecStrErr;

#[derive(Display, Debug, derive_more::From)]
pub enum TokenTransferError {
    /// host error: `{0}`
    Host(HostError),
    /// decoding error: `{0}`
    Decoding(DecodingError),
    /// invalid amount error: `{0}`
    InvalidAmount(FromDecStrErr),
    /// invalid coin string: `{coin}`
    #[from(ignore)]
    InvalidCoin { coin: String },
    /// invalid denomination: `{denom}`
    #[from(ignore)]
    InvalidDenom { denom: String },
    /// duplicate denomination: `{denom}`
    #[from(ignore)]
    DuplicateDenom { denom: String },
    /// coin amount must be positive: `{coin}`
    #[from(ignore)]
    NonPositiveAmount { coin: String },
    /// invalid coins: `{coins}`
    #[from(ignore)]
    InvalidCoins { coins: String },
    /// amount overflow when adding `{coin}`
    #[from(ignore)]
    AmountOverflow { coin: String },
    /// insufficient funds: tried to send `{send_attempt}`, sender only has `{available_funds}`
    #[from(ignore)]
    InsufficientFunds {
        send_attempt: String,
        available_funds: String,
    },
    /// empty address for `{field}`
    #[from(ignore)]
    EmptyAddress { field: String },
    /// unexpected payload `{type_url}` for the transfer application
    #[from(ignore)]
    UnexpectedPayload { type_url: String },
}

#[cfg(feature = "std")]
impl std::error::Error for TokenTransferError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            Self::Host(e) => Some(e),
            Self::Decoding(e) => Some(e),
            _ => None,
        }
    }
}
