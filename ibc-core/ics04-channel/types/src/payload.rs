use ibc_app_transfer_types::proto::{PAYLOAD_COINS_FAIL_TYPE_URL, PAYLOAD_COINS_TYPE_URL};
use ibc_app_transfer_types::{PayloadCoins, PayloadCoinsFail};
use ibc_core_host_types::identifiers::DatagramType;
use ibc_primitives::prelude::*;
use ibc_primitives::proto::{Any, Protobuf};
use ibc_primitives::{Signer, ToProto};

use crate::error::ChannelError;

/// The application content of a datagram.
///
/// The set of payloads is closed: every variant fixes the route of the
/// application handling it and whether it travels as a packet or as a
/// receipt.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, derive_more::From)]
pub enum Payload {
    Coins(PayloadCoins),
    CoinsFail(PayloadCoinsFail),
}

impl Payload {
    /// The route of the application module handling this payload.
    pub fn route(&self) -> &'static str {
        match self {
            Self::Coins(p) => p.route(),
            Self::CoinsFail(p) => p.route(),
        }
    }

    pub fn validate_basic(&self) -> Result<(), ChannelError> {
        let res = match self {
            Self::Coins(p) => p.validate_basic(),
            Self::CoinsFail(p) => p.validate_basic(),
        };
        res.map_err(|e| ChannelError::InvalidPayload {
            description: e.to_string(),
        })
    }

    /// The addresses that must sign a message sending this payload.
    pub fn signers(&self) -> Vec<Signer> {
        match self {
            Self::Coins(p) => p.signers(),
            Self::CoinsFail(p) => p.signers(),
        }
    }

    pub fn datagram_type(&self) -> DatagramType {
        match self {
            Self::Coins(p) => p.datagram_type(),
            Self::CoinsFail(p) => p.datagram_type(),
        }
    }

    pub fn type_url(&self) -> &'static str {
        match self {
            Self::Coins(_) => PAYLOAD_COINS_TYPE_URL,
            Self::CoinsFail(_) => PAYLOAD_COINS_FAIL_TYPE_URL,
        }
    }
}

impl From<Payload> for Any {
    fn from(payload: Payload) -> Self {
        match payload {
            Payload::Coins(p) => p.to_any(),
            Payload::CoinsFail(p) => p.to_any(),
        }
    }
}

impl TryFrom<Any> for Payload {
    type Error = ChannelError;

    fn try_from(any: Any) -> Result<Self, Self::Error> {
        match any.type_url.as_str() {
            PAYLOAD_COINS_TYPE_URL => PayloadCoins::decode_vec(&any.value)
                .map(Self::Coins)
                .map_err(|e| ChannelError::InvalidPayload {
                    description: e.to_string(),
                }),
            PAYLOAD_COINS_FAIL_TYPE_URL => PayloadCoinsFail::decode_vec(&any.value)
                .map(Self::CoinsFail)
                .map_err(|e| ChannelError::InvalidPayload {
                    description: e.to_string(),
                }),
            _ => Err(ChannelError::UnknownPayloadType {
                type_url: any.type_url,
            }),
        }
    }
}
