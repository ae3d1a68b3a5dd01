//! A mock host chain for exercising the IBC core end to end.
//!
//! [`MockContext`](context::MockContext) bundles a host implementation of the
//! core contexts with a router and a bank ledger, and a
//! [`RelayerContext`](relayer::context::RelayerContext) carries datagrams
//! between two of them.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod context;
pub mod fixtures;
pub mod relayer;
pub mod testapp;
