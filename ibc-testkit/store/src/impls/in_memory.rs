use std::collections::BTreeMap;

use tracing::trace;

use crate::context::Store;
use crate::types::Path;

/// An in-memory store backed by a `BTreeMap`, so keys iterate in byte order.
#[derive(Clone, Debug, Default)]
pub struct InMemoryStore {
    state: BTreeMap<Path, Vec<u8>>,
}

impl Store for InMemoryStore {
    type Error = (); // underlying store ops are infallible

    fn set(&mut self, path: Path, value: Vec<u8>) -> Result<Option<Vec<u8>>, Self::Error> {
        trace!("set at path = {path}");
        Ok(self.state.insert(path, value))
    }

    fn get(&self, path: &Path) -> Option<Vec<u8>> {
        trace!("get at path = {path}");
        self.state.get(path).cloned()
    }

    fn delete(&mut self, path: &Path) -> Option<Vec<u8>> {
        trace!("delete at path = {path}");
        self.state.remove(path)
    }

    fn get_keys(&self, key_prefix: &Path) -> Vec<Path> {
        self.state
            .range(key_prefix.clone()..)
            .map(|(key, _)| key)
            .take_while(|key| key.starts_with(key_prefix))
            .cloned()
            .collect()
    }
}
