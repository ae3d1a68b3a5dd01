//! Protocol logic specific to ICS3 messages of type `MsgUpdateConnection`.
use ibc_core_connection_types::error::ConnectionError;
use ibc_core_connection_types::events::UpdateConnection;
use ibc_core_connection_types::msgs::MsgUpdateConnection;
use ibc_core_handler_types::events::{IbcEvent, MessageEvent};
use ibc_core_host::types::path::{CommitHeightPath, CommitPath};
use ibc_core_host::{ExecutionContext, ValidationContext};
use ibc_primitives::prelude::*;

pub fn validate<Ctx>(ctx: &Ctx, msg: &MsgUpdateConnection) -> Result<(), ConnectionError>
where
    Ctx: ValidationContext,
{
    ctx.validate_message_signer(&msg.signer)?;

    let last_height = ctx
        .commit_height(&CommitHeightPath::new(&msg.src_chain))?
        .ok_or_else(|| ConnectionError::ConnectionNotEstablished {
            chain_id: msg.src_chain.clone(),
        })?;

    // Resubmitting a commit at the last established height overwrites it.
    let height = msg.commit.height();
    if height < last_height {
        return Err(ConnectionError::InvalidHeight {
            height,
            last_height,
        });
    }

    let last_commit = ctx
        .commit(&CommitPath::new(&msg.src_chain, last_height))?
        .ok_or_else(|| ConnectionError::MissingCommit {
            chain_id: msg.src_chain.clone(),
            height: last_height,
        })?;

    ctx.verify_commit_update(&msg.src_chain, &last_commit, &msg.commit)
        .map_err(|e| ConnectionError::VerificationFailed {
            description: e.to_string(),
        })?;

    Ok(())
}

pub fn execute<Ctx>(ctx: &mut Ctx, msg: MsgUpdateConnection) -> Result<(), ConnectionError>
where
    Ctx: ExecutionContext,
{
    let MsgUpdateConnection {
        src_chain, commit, ..
    } = msg;
    let height = commit.height();

    ctx.store_commit(CommitPath::new(&src_chain, height), commit)?;
    ctx.store_commit_height(CommitHeightPath::new(&src_chain), height)?;

    ctx.log_message(format!(
        "success: update_connection: advanced {src_chain} to height {height}"
    ))?;

    ctx.emit_ibc_event(IbcEvent::Message(MessageEvent::Connection))?;
    ctx.emit_ibc_event(IbcEvent::UpdateConnection(UpdateConnection::new(
        src_chain, height,
    )))?;

    Ok(())
}
