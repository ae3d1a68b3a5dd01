//! Contains primitives types and traits common to the IBC core components
//! and the applications built on top of them.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(trivial_numeric_casts, unused_import_braces, rust_2018_idioms)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod prelude;

mod traits;
pub use traits::*;

mod types;
pub use types::*;

/// Re-exports necessary google proto types and `Protobuf` trait from the
/// `ibc-proto-rs` crate.
pub mod proto {
    pub use ibc_proto::google::protobuf::Any;
    pub use ibc_proto::Protobuf;
}
