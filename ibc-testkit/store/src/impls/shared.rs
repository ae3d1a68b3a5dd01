use std::sync::{Arc, RwLock};

use crate::context::Store;
use crate::types::Path;
use crate::utils::{SharedRw, SharedRwExt};

/// Wraps a store so that several typed views can read and write it.
///
/// Every view returned by [`share`](Self::share) sees the writes, and the
/// write buffers, of all the others.
#[derive(Clone, Debug)]
pub struct SharedStore<S>(SharedRw<S>);

impl<S> SharedStore<S> {
    pub fn new(store: S) -> Self {
        Self(Arc::new(RwLock::new(store)))
    }

    pub fn share(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<S> Default for SharedStore<S>
where
    S: Default + Store,
{
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S> Store for SharedStore<S>
where
    S: Store,
{
    type Error = S::Error;

    #[inline]
    fn set(&mut self, path: Path, value: Vec<u8>) -> Result<Option<Vec<u8>>, Self::Error> {
        self.0.write_access().set(path, value)
    }

    #[inline]
    fn get(&self, path: &Path) -> Option<Vec<u8>> {
        self.0.read_access().get(path)
    }

    #[inline]
    fn delete(&mut self, path: &Path) -> Option<Vec<u8>> {
        self.0.write_access().delete(path)
    }

    #[inline]
    fn begin(&mut self) {
        self.0.write_access().begin()
    }

    #[inline]
    fn apply(&mut self) -> Result<(), Self::Error> {
        self.0.write_access().apply()
    }

    #[inline]
    fn reset(&mut self) {
        self.0.write_access().reset()
    }

    #[inline]
    fn get_keys(&self, key_prefix: &Path) -> Vec<Path> {
        self.0.read_access().get_keys(key_prefix)
    }
}
