//! ICS-24: Host Requirements implementation of the IBC protocol. Defines the
//! identifiers used to address remote chains, the datagram sequence type and
//! the key layout of the connection and channel stores.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(trivial_numeric_casts, unused_import_braces, rust_2018_idioms)]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod identifiers;
pub mod path;
pub(crate) mod validate;
