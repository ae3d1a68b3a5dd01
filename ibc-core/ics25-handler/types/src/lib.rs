//! ICS-25: Handler Interface implementation of the IBC protocol. Defines the
//! envelope of the messages routed by the IBC core, the events emitted while
//! handling them and the error reported when handling fails.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(trivial_numeric_casts, unused_import_braces, rust_2018_idioms)]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod events;
pub mod msgs;
