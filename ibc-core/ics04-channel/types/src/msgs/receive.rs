use ibc_core_host_types::error::DecodingError;
use ibc_primitives::prelude::*;
use ibc_primitives::{Signer, ToProto};
use ibc_proto::Protobuf;

use crate::error::ChannelError;
use crate::proto::MsgReceive as RawMsgReceive;
use crate::{Datagram, Proof};

pub const RECEIVE_TYPE_URL: &str = "/ibc.core.channel.v1.MsgReceive";

/// Submits a datagram relayed from its source chain, together with the proof
/// of its inclusion there.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsgReceive {
    pub datagram: Datagram,
    pub proof: Proof,
    pub signer: Signer,
}

impl Protobuf<RawMsgReceive> for MsgReceive {}

impl ToProto for MsgReceive {
    type Proto = RawMsgReceive;
}

impl TryFrom<RawMsgReceive> for MsgReceive {
    type Error = ChannelError;

    fn try_from(raw: RawMsgReceive) -> Result<Self, Self::Error> {
        Ok(Self {
            datagram: raw
                .datagram
                .ok_or_else(|| DecodingError::missing_raw_data("received datagram"))?
                .try_into()?,
            proof: raw
                .proof
                .ok_or_else(|| DecodingError::missing_raw_data("datagram proof"))?
                .try_into()?,
            signer: raw.signer.into(),
        })
    }
}

impl From<MsgReceive> for RawMsgReceive {
    fn from(msg: MsgReceive) -> Self {
        Self {
            datagram: Some(msg.datagram.into()),
            proof: Some(msg.proof.into()),
            signer: msg.signer.to_string(),
        }
    }
}
