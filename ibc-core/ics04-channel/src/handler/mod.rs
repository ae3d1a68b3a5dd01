//! This module implements the processing logic for ICS4 (datagram channel)
//! messages.
mod receive;
mod send;

pub use receive::*;
pub use send::*;

use ibc_core_channel_types::error::ChannelError;
use ibc_core_handler_types::events::IbcEvent;
use ibc_core_host::ExecutionContext;
use ibc_core_router::types::module::ModuleExtras;

/// Forwards the events and logs an application produced to the host.
pub(crate) fn emit_module_extras<Ctx>(
    ctx: &mut Ctx,
    extras: ModuleExtras,
) -> Result<(), ChannelError>
where
    Ctx: ExecutionContext,
{
    for module_event in extras.events {
        ctx.emit_ibc_event(IbcEvent::Module(module_event))?;
    }

    for log_message in extras.log {
        ctx.log_message(log_message)?;
    }

    Ok(())
}
