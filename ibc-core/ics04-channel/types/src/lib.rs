//! Implementation of the datagram channel data structures: the typed, routed
//! units of cross-chain communication and the messages that send and
//! receive them.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(trivial_numeric_casts, unused_import_braces, rust_2018_idioms)]

#[cfg(feature = "std")]
extern crate std;

mod datagram;
mod header;
mod payload;

pub use datagram::*;
pub use header::*;
pub use payload::*;

pub mod error;
pub mod events;
pub mod msgs;
pub mod proto;

/// Re-exports the datagram type, which doubles as a store key component.
pub use ibc_core_host_types::identifiers::DatagramType;
