//! Message definitions for the datagram channel.

mod receive;
mod send;

pub use receive::*;
pub use send::*;

/// All the messages handled by the datagram channel.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, derive_more::From)]
pub enum ChannelMsg {
    Send(MsgSend),
    Receive(MsgReceive),
}

/// The route of the application module a channel message is dispatched to.
pub fn channel_msg_to_route(msg: &ChannelMsg) -> &'static str {
    match msg {
        ChannelMsg::Send(msg) => msg.payload.route(),
        ChannelMsg::Receive(msg) => msg.datagram.payload.route(),
    }
}
