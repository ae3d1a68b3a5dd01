use ibc::core::channel::types::msgs::{MsgReceive, MsgSend};
use ibc::core::channel::types::{Datagram, Header, Payload, Proof};
use ibc::core::host::types::identifiers::ChainId;
use ibc::core::primitives::Signer;
use typed_builder::TypedBuilder;

use crate::fixtures::core::connection::dummy_chain_id;
use crate::fixtures::core::signer::dummy_account_id;

/// Configuration of the `Datagram` type for building dummy datagrams.
#[derive(TypedBuilder, Debug)]
#[builder(build_method(into = Datagram))]
pub struct DatagramConfig {
    #[builder(default = dummy_chain_id("chainA"))]
    pub src_chain: ChainId,
    #[builder(default = dummy_chain_id("chainB"))]
    pub dest_chain: ChainId,
    pub payload: Payload,
}

impl From<DatagramConfig> for Datagram {
    fn from(config: DatagramConfig) -> Self {
        Datagram::new(Header::new(config.src_chain, config.dest_chain), config.payload)
    }
}

/// Configuration of the `MsgReceive` type for building dummy receive messages.
#[derive(TypedBuilder, Debug)]
#[builder(build_method(into = MsgReceive))]
pub struct MsgReceiveConfig {
    pub datagram: Datagram,
    #[builder(default = 1)]
    pub proof_height: u64,
    #[builder(default)]
    pub sequence: u64,
    #[builder(default = dummy_account_id())]
    pub signer: Signer,
}

impl From<MsgReceiveConfig> for MsgReceive {
    fn from(config: MsgReceiveConfig) -> Self {
        MsgReceive {
            datagram: config.datagram,
            proof: Proof::new(config.proof_height, config.sequence),
            signer: config.signer,
        }
    }
}

/// Returns a dummy `MsgSend` of `payload` to `dest_chain`, for testing purposes only!
pub fn dummy_msg_send(dest_chain: &str, payload: impl Into<Payload>) -> MsgSend {
    MsgSend {
        dest_chain: dummy_chain_id(dest_chain),
        payload: payload.into(),
    }
}
