use core::ops::{Deref, DerefMut};

use ibc_core_host_types::error::HostError;

use crate::ExecutionContext;

/// A scoped write buffer over an [`ExecutionContext`].
///
/// Writes made through the guard land in an overlay that is merged into the
/// enclosing state by [`commit`](Self::commit) or dropped by
/// [`discard`](Self::discard). A guard that goes out of scope unresolved,
/// whether by an early return or by unwinding, discards.
pub struct WriteBuffer<'a, Ctx: ExecutionContext> {
    ctx: &'a mut Ctx,
    resolved: bool,
}

impl<'a, Ctx: ExecutionContext> WriteBuffer<'a, Ctx> {
    pub fn begin(ctx: &'a mut Ctx) -> Result<Self, HostError> {
        ctx.begin_write_buffer()?;
        Ok(Self {
            ctx,
            resolved: false,
        })
    }

    /// Merges the buffered writes into the enclosing state. If merging fails
    /// the buffer is discarded on drop.
    pub fn commit(mut self) -> Result<(), HostError> {
        self.ctx.commit_write_buffer()?;
        self.resolved = true;
        Ok(())
    }

    pub fn discard(mut self) {
        self.ctx.discard_write_buffer();
        self.resolved = true;
    }
}

impl<Ctx: ExecutionContext> Deref for WriteBuffer<'_, Ctx> {
    type Target = Ctx;

    fn deref(&self) -> &Ctx {
        self.ctx
    }
}

impl<Ctx: ExecutionContext> DerefMut for WriteBuffer<'_, Ctx> {
    fn deref_mut(&mut self) -> &mut Ctx {
        self.ctx
    }
}

impl<Ctx: ExecutionContext> Drop for WriteBuffer<'_, Ctx> {
    fn drop(&mut self) {
        if !self.resolved {
            self.ctx.discard_write_buffer();
        }
    }
}
