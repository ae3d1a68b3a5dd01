//! Exposes IBC handler entry points for the integrated IBC core modules.
//! These entry points are responsible for processing incoming IBC messages,
//! performing validation, and execution logics by invoking the appropriate
//! module handler.
//!
//! When processing a given message `M`, if validation fails no state was
//! modified. Execution only fails after writing for a received packet whose
//! application failed: the sequence advance and the failure receipt it
//! queued are part of the protocol and the host must persist them.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(trivial_numeric_casts, unused_import_braces, rust_2018_idioms)]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod entrypoint;

/// Re-export IBC handler types from `ibc-core-handler-types` crate.
pub mod types {
    #[doc(inline)]
    pub use ibc_core_handler_types::*;
}
