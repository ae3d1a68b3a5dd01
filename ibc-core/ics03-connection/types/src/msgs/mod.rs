//! Message definitions of the connection keeper.
//!
//! A chain pins the first commit of a remote chain with
//! [`MsgOpenConnection`] and extends its trust to later heights with
//! [`MsgUpdateConnection`]. Both carry the Cosmos-SDK specific `signer` of
//! the submitting transaction.

mod open_connection;
mod update_connection;

pub use open_connection::*;
pub use update_connection::*;

/// Enumeration of all messages the connection keeper processes.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[derive(Clone, Debug, PartialEq, Eq, derive_more::From)]
pub enum ConnectionMsg {
    OpenConnection(MsgOpenConnection),
    UpdateConnection(MsgUpdateConnection),
}
