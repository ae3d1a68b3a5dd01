use ibc_core_host_types::identifiers::ChainId;
use ibc_primitives::prelude::*;
use ibc_primitives::{Signer, ToProto};
use ibc_proto::Protobuf;

use crate::error::ConnectionError;
use crate::proto::MsgUpdateConnection as RawMsgUpdateConnection;
use crate::Commit;

pub const UPDATE_CONNECTION_TYPE_URL: &str = "/ibc.core.connection.v1.MsgUpdateConnection";

/// Extends the trust in `src_chain` to `commit`, which must not be older than
/// the last established commit.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsgUpdateConnection {
    pub src_chain: ChainId,
    pub commit: Commit,
    pub signer: Signer,
}

impl Protobuf<RawMsgUpdateConnection> for MsgUpdateConnection {}

impl ToProto for MsgUpdateConnection {
    type Proto = RawMsgUpdateConnection;
}

impl TryFrom<RawMsgUpdateConnection> for MsgUpdateConnection {
    type Error = ConnectionError;

    fn try_from(msg: RawMsgUpdateConnection) -> Result<Self, Self::Error> {
        Ok(Self {
            src_chain: msg.src_chain.parse()?,
            commit: Commit::from_raw_field(msg.commit, "commit")?,
            signer: msg.signer.into(),
        })
    }
}

impl From<MsgUpdateConnection> for RawMsgUpdateConnection {
    fn from(msg: MsgUpdateConnection) -> Self {
        Self {
            src_chain: msg.src_chain.to_string(),
            commit: Some(msg.commit.into()),
            signer: msg.signer.to_string(),
        }
    }
}
