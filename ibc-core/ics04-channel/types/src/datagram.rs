use ibc_core_host_types::error::DecodingError;
use ibc_core_host_types::identifiers::{DatagramType, Sequence};
use ibc_primitives::prelude::*;
use ibc_proto::Protobuf;

use crate::error::ChannelError;
use crate::proto::{Datagram as RawDatagram, Proof as RawProof};
use crate::{Header, Payload};

/// A routed, typed unit of cross-chain communication. Datagrams are the
/// entries of the outgoing queues and the evidence submitted to the
/// destination chain.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Datagram {
    pub header: Header,
    pub payload: Payload,
}

impl Datagram {
    pub fn new(header: Header, payload: Payload) -> Self {
        Self { header, payload }
    }

    pub fn datagram_type(&self) -> DatagramType {
        self.payload.datagram_type()
    }
}

impl Protobuf<RawDatagram> for Datagram {}

impl TryFrom<RawDatagram> for Datagram {
    type Error = ChannelError;

    /// The raw datagram carries its type tag explicitly. An unknown tag, or
    /// one disagreeing with the payload, denotes a misbehaving source chain.
    fn try_from(raw: RawDatagram) -> Result<Self, Self::Error> {
        let datagram_type = DatagramType::try_from(raw.datagram_type).map_err(|_| {
            ChannelError::UnknownDatagramType {
                tag: raw.datagram_type.into(),
            }
        })?;

        let header: Header = raw
            .header
            .ok_or_else(|| DecodingError::missing_raw_data("datagram header"))?
            .try_into()?;

        let payload: Payload = raw
            .payload
            .ok_or_else(|| DecodingError::missing_raw_data("datagram payload"))?
            .try_into()?;

        if payload.datagram_type() != datagram_type {
            return Err(ChannelError::MismatchedDatagramType {
                expected: payload.datagram_type(),
                actual: datagram_type,
            });
        }

        Ok(Self { header, payload })
    }
}

impl From<Datagram> for RawDatagram {
    fn from(datagram: Datagram) -> Self {
        Self {
            header: Some(datagram.header.into()),
            datagram_type: datagram.payload.datagram_type().into(),
            payload: Some(datagram.payload.into()),
        }
    }
}

/// Accompanies an incoming datagram: the height of the source chain commit
/// it was included in, and its position in the ordered stream of its type.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Proof {
    pub height: u64,
    pub sequence: Sequence,
}

impl Proof {
    pub fn new(height: u64, sequence: impl Into<Sequence>) -> Self {
        Self {
            height,
            sequence: sequence.into(),
        }
    }
}

impl Protobuf<RawProof> for Proof {}

impl TryFrom<RawProof> for Proof {
    type Error = ChannelError;

    fn try_from(raw: RawProof) -> Result<Self, Self::Error> {
        Ok(Self::new(raw.height, raw.sequence))
    }
}

impl From<Proof> for RawProof {
    fn from(proof: Proof) -> Self {
        Self {
            height: proof.height,
            sequence: proof.sequence.value(),
        }
    }
}
