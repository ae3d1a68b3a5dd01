//! Implementation of the connection keeper data structures: the roots of
//! trust a chain records for every remote chain it accepts datagrams from.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(trivial_numeric_casts, unused_import_braces, rust_2018_idioms)]

#[cfg(feature = "std")]
extern crate std;

mod commit;
pub use commit::*;

pub mod error;
pub mod events;
pub mod msgs;
pub mod proto;
