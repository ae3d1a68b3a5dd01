mod context;
mod types;

pub use types::*;
