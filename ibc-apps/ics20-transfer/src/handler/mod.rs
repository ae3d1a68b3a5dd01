//! Implements the processing logic of the ledger-transfer payloads.
mod on_recv_packet;
mod refund;
mod send_coins;

pub use on_recv_packet::*;
pub use refund::*;
pub use send_coins::*;
