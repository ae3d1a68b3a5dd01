pub mod path;
pub mod store;

pub use path::Path;
pub use store::{JsonStore, MainStore, ProtobufStore, TypedQueue, TypedStore, U64Store};
