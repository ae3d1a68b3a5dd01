use ibc_core_channel::handler::{receive_execute, receive_validate, send_execute, send_validate};
use ibc_core_channel::types::msgs::{channel_msg_to_route, ChannelMsg};
use ibc_core_connection::handler::{open_connection, update_connection};
use ibc_core_connection::types::msgs::ConnectionMsg;
use ibc_core_handler_types::error::HandlerError;
use ibc_core_handler_types::msgs::MsgEnvelope;
use ibc_core_host::{ExecutionContext, ValidationContext};
use ibc_core_router::router::Router;
use ibc_core_router::types::error::RouterError;
use ibc_core_router::types::module::ModuleId;
use ibc_primitives::prelude::*;

/// Entrypoint which performs both validation and message execution
pub fn dispatch<Ctx>(
    ctx: &mut Ctx,
    router: &mut impl Router<Ctx>,
    msg: MsgEnvelope,
) -> Result<(), HandlerError>
where
    Ctx: ExecutionContext,
{
    validate(ctx, router, msg.clone())?;
    execute(ctx, router, msg)
}

/// Entrypoint which only performs message validation
///
/// If a transaction contains `n` messages `m_1` ... `m_n`, then
/// they MUST be processed as follows:
///     validate(m_1), execute(m_1), ..., validate(m_n), execute(m_n)
/// That is, the state transition of message `i` must be applied before
/// message `i+1` is validated. This is equivalent to calling
/// `dispatch()` on each successively.
pub fn validate<Ctx>(
    ctx: &Ctx,
    router: &impl Router<Ctx>,
    msg: MsgEnvelope,
) -> Result<(), HandlerError>
where
    Ctx: ValidationContext,
{
    match msg {
        MsgEnvelope::Connection(msg) => match msg {
            ConnectionMsg::OpenConnection(msg) => open_connection::validate(ctx, &msg)?,
            ConnectionMsg::UpdateConnection(msg) => update_connection::validate(ctx, &msg)?,
        },
        MsgEnvelope::Channel(msg) => {
            let module_id = lookup_module(router, &msg)?;
            let module = router
                .get_route(&module_id)
                .ok_or_else(|| RouterError::MissingModule {
                    route: module_id.to_string(),
                })?;

            match msg {
                ChannelMsg::Send(msg) => send_validate(ctx, module, &msg)?,
                ChannelMsg::Receive(msg) => receive_validate(ctx, &msg)?,
            }
        }
    }

    Ok(())
}

/// Entrypoint which only performs message execution
pub fn execute<Ctx>(
    ctx: &mut Ctx,
    router: &mut impl Router<Ctx>,
    msg: MsgEnvelope,
) -> Result<(), HandlerError>
where
    Ctx: ExecutionContext,
{
    match msg {
        MsgEnvelope::Connection(msg) => match msg {
            ConnectionMsg::OpenConnection(msg) => open_connection::execute(ctx, msg)?,
            ConnectionMsg::UpdateConnection(msg) => update_connection::execute(ctx, msg)?,
        },
        MsgEnvelope::Channel(msg) => {
            let module_id = lookup_module(&*router, &msg)?;
            let module = router
                .get_route_mut(&module_id)
                .ok_or_else(|| RouterError::MissingModule {
                    route: module_id.to_string(),
                })?;

            match msg {
                ChannelMsg::Send(msg) => send_execute(ctx, module, msg)?,
                ChannelMsg::Receive(msg) => receive_execute(ctx, module, msg)?,
            }
        }
    }

    Ok(())
}

fn lookup_module<Ctx>(
    router: &impl Router<Ctx>,
    msg: &ChannelMsg,
) -> Result<ModuleId, RouterError> {
    let route = channel_msg_to_route(msg);
    router
        .lookup_module(route)
        .ok_or_else(|| RouterError::MissingModule {
            route: route.to_string(),
        })
}
