//! Implementation of the IBC ledger-transfer application logic.
//!
//! Coins are debited from the sender when a transfer is sent and credited to
//! the receiver when the packet arrives on the destination chain. A transfer
//! that cannot be credited comes back as a failure receipt, which refunds the
//! sender.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(trivial_numeric_casts, unused_import_braces, rust_2018_idioms)]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod context;
pub mod handler;
pub mod module;

/// Re-exports the data structures of the ledger-transfer application from
/// the `ibc-app-transfer-types` crate.
pub mod types {
    #[doc(inline)]
    pub use ibc_app_transfer_types::*;
}
