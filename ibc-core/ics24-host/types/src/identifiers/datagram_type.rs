use core::fmt::{Display, Error as FmtError, Formatter};

use ibc_primitives::prelude::*;

use crate::error::IdentifierError;

/// Classifies a datagram as an initial cross-chain request or as the result
/// of processing one, travelling back to its origin.
///
/// The discriminant is the byte used in the outgoing queue and incoming
/// sequence keys.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DatagramType {
    Packet = 0x00,
    Receipt = 0x01,
}

impl DatagramType {
    /// The key byte of this datagram type.
    pub fn as_byte(&self) -> u8 {
        *self as u8
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Packet => "packet",
            Self::Receipt => "receipt",
        }
    }
}

impl TryFrom<u8> for DatagramType {
    type Error = IdentifierError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0x00 => Ok(Self::Packet),
            0x01 => Ok(Self::Receipt),
            _ => Err(IdentifierError::UnknownDatagramType { tag: tag.into() }),
        }
    }
}

impl TryFrom<u32> for DatagramType {
    type Error = IdentifierError;

    fn try_from(tag: u32) -> Result<Self, Self::Error> {
        u8::try_from(tag)
            .map_err(|_| IdentifierError::UnknownDatagramType { tag: tag.into() })
            .and_then(Self::try_from)
    }
}

impl From<DatagramType> for u32 {
    fn from(ty: DatagramType) -> u32 {
        ty.as_byte().into()
    }
}

impl Display for DatagramType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", self.as_str())
    }
}
