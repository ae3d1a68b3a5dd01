//! Re-exports implementations and data structures of different IBC applications.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(trivial_numeric_casts, unused_import_braces, rust_2018_idioms)]

/// Re-exports the implementation of the IBC ledger-transfer application
/// logic.
pub mod transfer {
    #[doc(inline)]
    pub use ibc_app_transfer::*;
}
