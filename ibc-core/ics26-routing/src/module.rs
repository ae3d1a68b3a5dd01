use core::fmt::Debug;

use ibc_core_channel_types::error::ChannelError;
use ibc_core_channel_types::Payload;
use ibc_core_router_types::module::ModuleExtras;

/// The outcome of handing a received datagram to its module.
///
/// A module may answer with a reply payload whether or not it succeeded. The
/// channel queues the reply back to the datagram's source chain; a failed
/// packet's reply survives the rollback of the module's writes.
#[derive(Debug)]
pub struct PacketOutcome {
    pub reply: Option<Payload>,
    pub result: Result<ModuleExtras, ChannelError>,
}

impl PacketOutcome {
    pub fn success(extras: ModuleExtras) -> Self {
        Self {
            reply: None,
            result: Ok(extras),
        }
    }

    pub fn failure(err: ChannelError, reply: Option<Payload>) -> Self {
        Self {
            reply,
            result: Err(err),
        }
    }

    pub fn with_reply(mut self, reply: Payload) -> Self {
        self.reply = Some(reply);
        self
    }
}

/// Callbacks of an application bound to a payload route.
///
/// The channel invokes them with the host context. Writes made by
/// [`on_recv_packet_execute`](Self::on_recv_packet_execute) land in a write
/// buffer that is discarded if the callback fails.
pub trait Module<Ctx>: Debug {
    /// Checks that sending `payload` would succeed, without writing.
    fn on_send_validate(&self, _ctx: &Ctx, _payload: &Payload) -> Result<(), ChannelError> {
        Ok(())
    }

    /// Performs the local state change of an outbound send. Nothing is
    /// queued if it fails.
    fn on_send_execute(
        &mut self,
        ctx: &mut Ctx,
        payload: &Payload,
    ) -> Result<ModuleExtras, ChannelError>;

    /// Applies a received packet.
    fn on_recv_packet_execute(&mut self, ctx: &mut Ctx, payload: &Payload) -> PacketOutcome;

    /// Applies a received receipt. Receipts report the outcome of a packet
    /// that already completed on the other chain, so this callback must
    /// succeed and must not reply.
    fn on_recv_receipt_execute(&mut self, ctx: &mut Ctx, payload: &Payload) -> PacketOutcome;
}
