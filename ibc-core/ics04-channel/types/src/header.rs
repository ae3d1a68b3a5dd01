use core::fmt::{Display, Error as FmtError, Formatter};

use ibc_core_host_types::identifiers::ChainId;
use ibc_primitives::prelude::*;

use crate::error::ChannelError;
use crate::proto::Header as RawHeader;

/// Routing metadata of a datagram: the chain it was sent from and the chain
/// it is bound for.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Header {
    pub src_chain: ChainId,
    pub dest_chain: ChainId,
}

impl Header {
    pub fn new(src_chain: ChainId, dest_chain: ChainId) -> Self {
        Self {
            src_chain,
            dest_chain,
        }
    }

    /// The header of a reply travelling back from the destination to the
    /// source.
    pub fn inverse_direction(&self) -> Self {
        Self {
            src_chain: self.dest_chain.clone(),
            dest_chain: self.src_chain.clone(),
        }
    }
}

impl TryFrom<RawHeader> for Header {
    type Error = ChannelError;

    fn try_from(raw: RawHeader) -> Result<Self, Self::Error> {
        Ok(Self {
            src_chain: raw.src_chain.parse()?,
            dest_chain: raw.dest_chain.parse()?,
        })
    }
}

impl From<Header> for RawHeader {
    fn from(header: Header) -> Self {
        Self {
            src_chain: header.src_chain.to_string(),
            dest_chain: header.dest_chain.to_string(),
        }
    }
}

impl Display for Header {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{} -> {}", self.src_chain, self.dest_chain)
    }
}
