//! Defines the payloads carried by ledger-transfer datagrams.

use ibc_core_host_types::error::DecodingError;
use ibc_core_host_types::identifiers::DatagramType;
use ibc_primitives::prelude::*;
use ibc_primitives::proto::Protobuf;
use ibc_primitives::{Signer, ToProto};

use crate::error::TokenTransferError;
use crate::proto::{PayloadCoins as RawPayloadCoins, PayloadCoinsFail as RawPayloadCoinsFail};
use crate::{Coins, PAYLOAD_ROUTE};

/// Instructs the destination chain to credit `coins` to `dest_addr` after
/// they were debited from `src_addr` on the source chain.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PayloadCoins {
    pub src_addr: Signer,
    pub dest_addr: Signer,
    pub coins: Coins,
}

impl PayloadCoins {
    pub fn route(&self) -> &'static str {
        PAYLOAD_ROUTE
    }

    /// Checks that both addresses are set and that a non-empty set of
    /// positive coins is transferred.
    pub fn validate_basic(&self) -> Result<(), TokenTransferError> {
        if self.src_addr.is_empty() {
            return Err(TokenTransferError::EmptyAddress {
                field: "src_addr".to_string(),
            });
        }
        if self.dest_addr.is_empty() {
            return Err(TokenTransferError::EmptyAddress {
                field: "dest_addr".to_string(),
            });
        }
        if !self.coins.is_positive() {
            return Err(TokenTransferError::InvalidCoins {
                coins: self.coins.to_string(),
            });
        }
        Ok(())
    }

    /// The sender debited on the source chain signs the transfer.
    pub fn signers(&self) -> Vec<Signer> {
        vec![self.src_addr.clone()]
    }

    pub fn datagram_type(&self) -> DatagramType {
        DatagramType::Packet
    }
}

impl Protobuf<RawPayloadCoins> for PayloadCoins {}

impl ToProto for PayloadCoins {
    type Proto = RawPayloadCoins;
}

impl TryFrom<RawPayloadCoins> for PayloadCoins {
    type Error = TokenTransferError;

    fn try_from(raw: RawPayloadCoins) -> Result<Self, Self::Error> {
        Ok(Self {
            src_addr: raw.src_addr.into(),
            dest_addr: raw.dest_addr.into(),
            coins: raw.coins.try_into()?,
        })
    }
}

impl From<PayloadCoins> for RawPayloadCoins {
    fn from(payload: PayloadCoins) -> Self {
        Self {
            src_addr: payload.src_addr.to_string(),
            dest_addr: payload.dest_addr.to_string(),
            coins: payload.coins.into(),
        }
    }
}

/// Receipt reporting that a [`PayloadCoins`] could not be applied on its
/// destination chain. It travels back to the source chain, where the
/// debited coins are refunded to the sender.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PayloadCoinsFail(pub PayloadCoins);

impl PayloadCoinsFail {
    pub fn route(&self) -> &'static str {
        PAYLOAD_ROUTE
    }

    pub fn validate_basic(&self) -> Result<(), TokenTransferError> {
        self.0.validate_basic()
    }

    pub fn signers(&self) -> Vec<Signer> {
        self.0.signers()
    }

    pub fn datagram_type(&self) -> DatagramType {
        DatagramType::Receipt
    }

    /// The transfer that failed.
    pub fn original(&self) -> &PayloadCoins {
        &self.0
    }
}

impl Protobuf<RawPayloadCoinsFail> for PayloadCoinsFail {}

impl ToProto for PayloadCoinsFail {
    type Proto = RawPayloadCoinsFail;
}

impl TryFrom<RawPayloadCoinsFail> for PayloadCoinsFail {
    type Error = TokenTransferError;

    fn try_from(raw: RawPayloadCoinsFail) -> Result<Self, Self::Error> {
        let payload = raw
            .payload
            .ok_or_else(|| DecodingError::missing_raw_data("failed transfer payload"))?;
        Ok(Self(payload.try_into()?))
    }
}

impl From<PayloadCoinsFail> for RawPayloadCoinsFail {
    fn from(payload: PayloadCoinsFail) -> Self {
        Self {
            payload: Some(payload.0.into()),
        }
    }
}
