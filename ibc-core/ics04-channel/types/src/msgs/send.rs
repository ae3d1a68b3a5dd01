use ibc_core_host_types::error::DecodingError;
use ibc_core_host_types::identifiers::ChainId;
use ibc_primitives::prelude::*;
use ibc_primitives::{Signer, ToProto};
use ibc_proto::Protobuf;

use crate::error::ChannelError;
use crate::proto::MsgSend as RawMsgSend;
use crate::Payload;

pub const SEND_TYPE_URL: &str = "/ibc.core.channel.v1.MsgSend";

/// Queues `payload` for delivery to `dest_chain`.
///
/// The message carries no signer of its own: it must be signed by the
/// addresses the payload designates.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsgSend {
    pub dest_chain: ChainId,
    pub payload: Payload,
}

impl MsgSend {
    pub fn signers(&self) -> Vec<Signer> {
        self.payload.signers()
    }
}

impl Protobuf<RawMsgSend> for MsgSend {}

impl ToProto for MsgSend {
    type Proto = RawMsgSend;
}

impl TryFrom<RawMsgSend> for MsgSend {
    type Error = ChannelError;

    fn try_from(raw: RawMsgSend) -> Result<Self, Self::Error> {
        Ok(Self {
            dest_chain: raw.dest_chain.parse()?,
            payload: raw
                .payload
                .ok_or_else(|| DecodingError::missing_raw_data("send payload"))?
                .try_into()?,
        })
    }
}

impl From<MsgSend> for RawMsgSend {
    fn from(msg: MsgSend) -> Self {
        Self {
            dest_chain: msg.dest_chain.to_string(),
            payload: Some(msg.payload.into()),
        }
    }
}
