//! Protocol logic specific to ICS3 messages of type `MsgOpenConnection`.
use ibc_core_connection_types::error::ConnectionError;
use ibc_core_connection_types::events::OpenConnection;
use ibc_core_connection_types::msgs::MsgOpenConnection;
use ibc_core_handler_types::events::{IbcEvent, MessageEvent};
use ibc_core_host::types::path::{CommitHeightPath, CommitPath};
use ibc_core_host::{ExecutionContext, ValidationContext};
use ibc_primitives::prelude::*;

pub fn validate<Ctx>(ctx: &Ctx, msg: &MsgOpenConnection) -> Result<(), ConnectionError>
where
    Ctx: ValidationContext,
{
    ctx.validate_message_signer(&msg.signer)?;

    // Trust is pinned exactly once per remote chain.
    if ctx
        .commit_height(&CommitHeightPath::new(&msg.src_chain))?
        .is_some()
    {
        return Err(ConnectionError::ConnectionAlreadyEstablished {
            chain_id: msg.src_chain.clone(),
        });
    }

    Ok(())
}

pub fn execute<Ctx>(ctx: &mut Ctx, msg: MsgOpenConnection) -> Result<(), ConnectionError>
where
    Ctx: ExecutionContext,
{
    let MsgOpenConnection {
        src_chain,
        root_of_trust,
        ..
    } = msg;
    let height = root_of_trust.height();

    ctx.store_commit(CommitPath::new(&src_chain, height), root_of_trust)?;
    ctx.store_commit_height(CommitHeightPath::new(&src_chain), height)?;

    ctx.log_message(format!(
        "success: open_connection: pinned root of trust of {src_chain} at height {height}"
    ))?;

    ctx.emit_ibc_event(IbcEvent::Message(MessageEvent::Connection))?;
    ctx.emit_ibc_event(IbcEvent::OpenConnection(OpenConnection::new(
        src_chain, height,
    )))?;

    Ok(())
}
