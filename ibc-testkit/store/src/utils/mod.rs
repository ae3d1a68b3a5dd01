pub(crate) mod codec;
pub(crate) mod sync;

pub use codec::{Codec, JsonCodec, ProtobufCodec, U64Codec};
pub use sync::{Async, SharedRw, SharedRwExt};
