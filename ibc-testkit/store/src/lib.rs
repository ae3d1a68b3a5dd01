//! A key/value store for the mock hosts of the `ibc-testkit`.
//!
//! Keys are binary [`Path`](types::Path)s. A [`RevertibleStore`](impls::RevertibleStore)
//! layers nested write buffers over a backing store, and
//! [`TypedStore`](types::TypedStore) / [`TypedQueue`](types::TypedQueue) give
//! typed views over a shared store through a [`Codec`](utils::Codec).
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(trivial_numeric_casts, unused_import_braces, rust_2018_idioms)]

pub mod context;
pub mod impls;
pub mod types;
pub mod utils;
