use core::fmt::Debug;

use crate::types::Path;
use crate::utils::Async;

/// Store trait
pub trait Store: Async + Debug {
    /// Error type - expected to envelope all possible errors in store
    type Error: Debug;

    /// Set `value` for `path`, returning the value it replaced
    fn set(&mut self, path: Path, value: Vec<u8>) -> Result<Option<Vec<u8>>, Self::Error>;

    /// Get associated `value` for `path`
    fn get(&self, path: &Path) -> Option<Vec<u8>>;

    /// Delete specified `path`, returning the value it held
    fn delete(&mut self, path: &Path) -> Option<Vec<u8>>;

    /// Open a write buffer on top of the current state. Buffers nest.
    fn begin(&mut self) {}

    /// Merge the innermost write buffer into its parent
    fn apply(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Drop the innermost write buffer with all the writes it holds
    fn reset(&mut self) {}

    /// Return all keys that start with specified prefix
    fn get_keys(&self, key_prefix: &Path) -> Vec<Path>;
}
