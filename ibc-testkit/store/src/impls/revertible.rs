use tracing::trace;

use crate::context::Store;
use crate::types::Path;

/// A wrapper store that implements nested `begin()`/`apply()`/`reset()`
/// write buffers on top of other stores.
///
/// Writes go straight to the backing store while the innermost buffer
/// records how to undo them. Applying a buffer hands its undo log to the
/// parent buffer, resetting it replays the log backwards.
#[derive(Clone, Debug)]
pub struct RevertibleStore<S> {
    /// backing store
    store: S,
    /// one operation log per open buffer, innermost last
    op_logs: Vec<Vec<RevertOp>>,
}

#[derive(Clone, Debug)]
enum RevertOp {
    Delete(Path),
    Set(Path, Vec<u8>),
}

impl<S> RevertibleStore<S>
where
    S: Store,
{
    pub fn new(store: S) -> Self {
        Self {
            store,
            op_logs: vec![],
        }
    }

    /// The number of write buffers currently open.
    pub fn depth(&self) -> usize {
        self.op_logs.len()
    }

    fn record(&mut self, op: RevertOp) {
        if let Some(op_log) = self.op_logs.last_mut() {
            op_log.push(op);
        }
    }
}

impl<S> Default for RevertibleStore<S>
where
    S: Default + Store,
{
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S> Store for RevertibleStore<S>
where
    S: Store,
{
    type Error = S::Error;

    #[inline]
    fn set(&mut self, path: Path, value: Vec<u8>) -> Result<Option<Vec<u8>>, Self::Error> {
        let old_value = self.store.set(path.clone(), value)?;
        match old_value {
            // None implies this was an insert op, so we record the revert op as delete op
            None => self.record(RevertOp::Delete(path)),
            // Some old value implies this was an update op, so we record the revert op as a set op
            // with the old value
            Some(ref old_value) => self.record(RevertOp::Set(path, old_value.clone())),
        }
        Ok(old_value)
    }

    #[inline]
    fn get(&self, path: &Path) -> Option<Vec<u8>> {
        self.store.get(path)
    }

    #[inline]
    fn delete(&mut self, path: &Path) -> Option<Vec<u8>> {
        let old_value = self.store.delete(path);
        if let Some(ref old_value) = old_value {
            self.record(RevertOp::Set(path.clone(), old_value.clone()));
        }
        old_value
    }

    #[inline]
    fn begin(&mut self) {
        self.op_logs.push(vec![]);
        trace!("opened write buffer at depth {}", self.op_logs.len());
    }

    #[inline]
    fn apply(&mut self) -> Result<(), Self::Error> {
        // note that we do NOT call the backing store's apply here - this allows users to create
        // multilayered revertible stores
        if let Some(op_log) = self.op_logs.pop() {
            trace!("applied write buffer at depth {}", self.op_logs.len() + 1);
            if let Some(parent) = self.op_logs.last_mut() {
                parent.extend(op_log);
            }
        }
        Ok(())
    }

    #[inline]
    fn reset(&mut self) {
        let Some(mut op_log) = self.op_logs.pop() else {
            return;
        };
        trace!("rolling back write buffer at depth {}", self.op_logs.len() + 1);
        // the backing store is written directly so that the rollback itself is not recorded
        while let Some(op) = op_log.pop() {
            match op {
                RevertOp::Delete(path) => {
                    self.store.delete(&path);
                }
                RevertOp::Set(path, value) => {
                    if let Err(e) = self.store.set(path, value) {
                        panic!("rollback of the write buffer failed: {e:?}");
                    }
                }
            }
        }
    }

    #[inline]
    fn get_keys(&self, key_prefix: &Path) -> Vec<Path> {
        self.store.get_keys(key_prefix)
    }
}
