//! Defines events emitted during handling of IBC messages

use ibc_core_channel_types::events as ChannelEvents;
use ibc_core_connection_types::events as ConnectionEvents;
use ibc_core_router_types::event::ModuleEvent;
use ibc_primitives::prelude::*;

const MESSAGE_EVENT: &str = "message";

/// Events created by the IBC component of a chain, destined for a relayer.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IbcEvent {
    OpenConnection(ConnectionEvents::OpenConnection),
    UpdateConnection(ConnectionEvents::UpdateConnection),

    SendDatagram(ChannelEvents::SendDatagram),
    ReceiveDatagram(ChannelEvents::ReceiveDatagram),
    WriteReceipt(ChannelEvents::WriteReceipt),

    Module(ModuleEvent),
    Message(MessageEvent),
}

impl From<IbcEvent> for ModuleEvent {
    fn from(event: IbcEvent) -> Self {
        match event {
            IbcEvent::OpenConnection(event) => event.into(),
            IbcEvent::UpdateConnection(event) => event.into(),
            IbcEvent::SendDatagram(event) => event.into(),
            IbcEvent::ReceiveDatagram(event) => event.into(),
            IbcEvent::WriteReceipt(event) => event.into(),
            IbcEvent::Module(event) => event,
            IbcEvent::Message(event) => ModuleEvent::new(
                MESSAGE_EVENT,
                vec![("module", event.module_attribute()).into()],
            ),
        }
    }
}

impl IbcEvent {
    pub fn event_type(&self) -> &str {
        match self {
            IbcEvent::OpenConnection(event) => event.event_type(),
            IbcEvent::UpdateConnection(event) => event.event_type(),
            IbcEvent::SendDatagram(event) => event.event_type(),
            IbcEvent::ReceiveDatagram(event) => event.event_type(),
            IbcEvent::WriteReceipt(event) => event.event_type(),
            IbcEvent::Module(module_event) => module_event.kind.as_str(),
            IbcEvent::Message(_) => MESSAGE_EVENT,
        }
    }
}

/// Names the IBC component, or application module, that handled a message.
/// Emitted ahead of the events of that component.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageEvent {
    Connection,
    Channel,
    // stores the module name
    Module(String),
}

impl MessageEvent {
    /// The message event has only one attribute, with key `module`.
    /// This method gets the associated value.
    pub fn module_attribute(&self) -> String {
        match self {
            MessageEvent::Connection => "ibc_connection".to_string(),
            MessageEvent::Channel => "ibc_channel".to_string(),
            MessageEvent::Module(module_name) => module_name.clone(),
        }
    }
}

impl From<MessageEvent> for IbcEvent {
    fn from(e: MessageEvent) -> Self {
        IbcEvent::Message(e)
    }
}

impl From<ModuleEvent> for IbcEvent {
    fn from(e: ModuleEvent) -> Self {
        IbcEvent::Module(e)
    }
}
