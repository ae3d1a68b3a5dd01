#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(trivial_numeric_casts, unused_import_braces, rust_2018_idioms)]
//! This library re-exports a minimal Inter-Blockchain Communication (IBC)
//! protocol built around datagrams.
//!
//! + [Core](core) implements the connection keeper, which records the roots
//!   of trust of remote chains, and the channel, which queues outgoing
//!   datagrams and applies incoming ones in strict sequence order.
//!
//! + [Applications](apps) consists of implementations of IBC applications,
//!   which turn datagram payloads into local state changes.

#[cfg(any(test, feature = "std"))]
extern crate std;

/// Re-exports primitive types and traits from the `ibc-primitives` crate.
pub mod primitives {
    pub use ibc_primitives::*;
}

/// Re-exports implementations of all the IBC core modules.
pub mod core {
    #[doc(inline)]
    pub use ibc_core::*;
}

/// Re-exports implementations of various IBC applications.
pub mod apps {
    #[doc(inline)]
    pub use ibc_apps::*;
}
