//! Provides the top-level traits a host chain implements to run the IBC
//! core. They give the connection keeper and the channel access to the
//! host's storage, scoped write buffers and event log.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(trivial_numeric_casts, unused_import_braces, rust_2018_idioms)]

#[cfg(any(test, feature = "std"))]
extern crate std;

mod context;
mod write_buffer;

pub use context::*;
pub use write_buffer::*;

/// Re-exports ICS-24 data structures from `ibc-core-host-types` crate.
pub mod types {
    #[doc(inline)]
    pub use ibc_core_host_types::*;
}
