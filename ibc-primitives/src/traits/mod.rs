mod msg;
pub use msg::*;
