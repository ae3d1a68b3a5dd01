//! Defines identifier types

mod chain_id;
mod datagram_type;
mod sequence;

pub use chain_id::ChainId;
pub use datagram_type::DatagramType;
pub use sequence::Sequence;
