//! Implementation of the data structures of the IBC ledger-transfer
//! application: coins moved between chains through datagram payloads.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(trivial_numeric_casts, unused_import_braces, rust_2018_idioms)]

#[cfg(any(test, feature = "std"))]
extern crate std;

mod amount;
mod coin;
mod denom;
mod payload;

pub use amount::*;
pub use coin::*;
pub use denom::*;
pub use payload::*;
pub mod error;
pub mod events;
pub mod proto;
/// Re-exports `U256` from `primitive-types` crate for convenience.
pub use primitive_types::U256;

/// Module identifier for the ledger-transfer application.
pub const MODULE_ID_STR: &str = "transfer";

/// The route under which ledger-transfer payloads are dispatched.
pub const PAYLOAD_ROUTE: &str = "ibc/bank";
