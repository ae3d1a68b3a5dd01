//! ICS-04: the datagram channel. Queues outgoing datagrams per datagram type
//! and destination chain, and accepts incoming datagrams in strict sequence
//! order, applying received packets atomically.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(trivial_numeric_casts, unused_import_braces, rust_2018_idioms)]

#[cfg(feature = "std")]
extern crate std;

pub mod handler;

/// Re-exports ICS-04 data structures from the `ibc-core-channel-types` crate
pub mod types {
    #[doc(inline)]
    pub use ibc_core_channel_types::*;
}
