use ibc_core_host_types::identifiers::ChainId;
use ibc_primitives::prelude::*;
use ibc_primitives::{Signer, ToProto};
use ibc_proto::Protobuf;

use crate::error::ConnectionError;
use crate::proto::MsgOpenConnection as RawMsgOpenConnection;
use crate::Commit;

pub const OPEN_CONNECTION_TYPE_URL: &str = "/ibc.core.connection.v1.MsgOpenConnection";

/// Records `root_of_trust` as the first trusted commit of `src_chain`.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsgOpenConnection {
    pub src_chain: ChainId,
    pub root_of_trust: Commit,
    pub signer: Signer,
}

impl Protobuf<RawMsgOpenConnection> for MsgOpenConnection {}

impl ToProto for MsgOpenConnection {
    type Proto = RawMsgOpenConnection;
}

impl TryFrom<RawMsgOpenConnection> for MsgOpenConnection {
    type Error = ConnectionError;

    fn try_from(msg: RawMsgOpenConnection) -> Result<Self, Self::Error> {
        Ok(Self {
            src_chain: msg.src_chain.parse()?,
            root_of_trust: Commit::from_raw_field(msg.root_of_trust, "root of trust")?,
            signer: msg.signer.into(),
        })
    }
}

impl From<MsgOpenConnection> for RawMsgOpenConnection {
    fn from(msg: MsgOpenConnection) -> Self {
        Self {
            src_chain: msg.src_chain.to_string(),
            root_of_trust: Some(msg.root_of_trust.into()),
            signer: msg.signer.to_string(),
        }
    }
}
