use ibc_core_channel_types::msgs::{
    ChannelMsg, MsgReceive, MsgSend, RECEIVE_TYPE_URL, SEND_TYPE_URL,
};
use ibc_core_connection_types::msgs::{
    ConnectionMsg, MsgOpenConnection, MsgUpdateConnection, OPEN_CONNECTION_TYPE_URL,
    UPDATE_CONNECTION_TYPE_URL,
};
use ibc_core_host_types::error::DecodingError;
use ibc_core_router_types::error::RouterError;
use ibc_primitives::prelude::*;
use ibc_primitives::Signer;
use ibc_proto::google::protobuf::Any;
use ibc_proto::Protobuf;

/// Enumeration of all messages that the IBC core is capable of routing.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[derive(Clone, Debug, PartialEq, Eq, derive_more::From)]
pub enum MsgEnvelope {
    Connection(ConnectionMsg),
    Channel(ChannelMsg),
}

impl MsgEnvelope {
    /// The addresses that must have signed the transaction carrying this
    /// message.
    pub fn signers(&self) -> Vec<Signer> {
        match self {
            MsgEnvelope::Connection(msg) => match msg {
                ConnectionMsg::OpenConnection(msg) => vec![msg.signer.clone()],
                ConnectionMsg::UpdateConnection(msg) => vec![msg.signer.clone()],
            },
            MsgEnvelope::Channel(msg) => match msg {
                ChannelMsg::Send(msg) => msg.signers(),
                ChannelMsg::Receive(msg) => vec![msg.signer.clone()],
            },
        }
    }

    pub fn type_url(&self) -> &'static str {
        match self {
            MsgEnvelope::Connection(msg) => match msg {
                ConnectionMsg::OpenConnection(_) => OPEN_CONNECTION_TYPE_URL,
                ConnectionMsg::UpdateConnection(_) => UPDATE_CONNECTION_TYPE_URL,
            },
            MsgEnvelope::Channel(msg) => match msg {
                ChannelMsg::Send(_) => SEND_TYPE_URL,
                ChannelMsg::Receive(_) => RECEIVE_TYPE_URL,
            },
        }
    }
}

impl TryFrom<Any> for MsgEnvelope {
    type Error = RouterError;

    fn try_from(any_msg: Any) -> Result<Self, Self::Error> {
        match any_msg.type_url.as_str() {
            // ICS03
            OPEN_CONNECTION_TYPE_URL => {
                // Pop out the message and then wrap it in the corresponding type.
                let domain_msg = MsgOpenConnection::decode_vec(&any_msg.value)
                    .map_err(DecodingError::invalid_raw_data)?;
                Ok(MsgEnvelope::Connection(ConnectionMsg::OpenConnection(
                    domain_msg,
                )))
            }
            UPDATE_CONNECTION_TYPE_URL => {
                let domain_msg = MsgUpdateConnection::decode_vec(&any_msg.value)
                    .map_err(DecodingError::invalid_raw_data)?;
                Ok(MsgEnvelope::Connection(ConnectionMsg::UpdateConnection(
                    domain_msg,
                )))
            }

            // ICS04
            SEND_TYPE_URL => {
                let domain_msg = MsgSend::decode_vec(&any_msg.value)
                    .map_err(DecodingError::invalid_raw_data)?;
                Ok(MsgEnvelope::Channel(ChannelMsg::Send(domain_msg)))
            }
            RECEIVE_TYPE_URL => {
                let domain_msg = MsgReceive::decode_vec(&any_msg.value)
                    .map_err(DecodingError::invalid_raw_data)?;
                Ok(MsgEnvelope::Channel(ChannelMsg::Receive(domain_msg)))
            }
            _ => Err(RouterError::UnknownRequest {
                type_url: any_msg.type_url,
            }),
        }
    }
}
