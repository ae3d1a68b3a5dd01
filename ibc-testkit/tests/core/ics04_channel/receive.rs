use ibc::apps::transfer::context::TokenTransferExecutionContext;
use ibc::apps::transfer::types::{Coin, Coins, PAYLOAD_ROUTE, U256};
use ibc::core::channel::types::error::ChannelError;
use ibc::core::channel::types::msgs::{ChannelMsg, MsgReceive};
use ibc::core::channel::types::{DatagramType, Header, Payload};
use ibc::core::connection::types::msgs::ConnectionMsg;
use ibc::core::entrypoint::{execute, validate};
use ibc::core::handler::types::error::HandlerError;
use ibc::core::handler::types::events::{IbcEvent, MessageEvent};
use ibc::core::handler::types::msgs::MsgEnvelope;
use ibc::core::host::ExecutionContext;
use ibc::core::primitives::prelude::*;
use ibc::core::primitives::Signer;
use ibc::core::router::module::{Module, PacketOutcome};
use ibc::core::router::types::module::{ModuleExtras, ModuleId};
use ibc_testkit::context::MockContext;
use ibc_testkit::fixtures::applications::transfer::{
    dummy_coins, dummy_payload_coins, dummy_payload_coins_fail, PayloadCoinsConfig,
};
use ibc_testkit::fixtures::core::channel::{DatagramConfig, MsgReceiveConfig};
use ibc_testkit::fixtures::core::connection::{dummy_chain_id, dummy_msg_open_connection};
use ibc_testkit::fixtures::core::context::MockContextConfig;
use ibc_testkit::fixtures::{Expect, Fixture};
use ibc_testkit::testapp::ibc::core::router::MockRouter;
use ibc_testkit::testapp::ibc::core::types::MockIbcStore;
use test_log::test;

/// How [`ScriptedModule`] answers the datagrams it receives.
#[derive(Clone, Copy, Debug)]
enum Script {
    /// Credits the receiver, then fails the packet with a failure receipt.
    RejectPacket,
    /// Credits the receiver, then answers the packet with another packet.
    ReplyWithPacket,
    /// Fails every receipt.
    FailReceipt,
    /// Answers every receipt.
    ReplyToReceipt,
}

#[derive(Debug)]
struct ScriptedModule(Script);

impl Module<MockIbcStore> for ScriptedModule {
    fn on_send_execute(
        &mut self,
        _ctx: &mut MockIbcStore,
        _payload: &Payload,
    ) -> Result<ModuleExtras, ChannelError> {
        Ok(ModuleExtras::empty())
    }

    fn on_recv_packet_execute(&mut self, ctx: &mut MockIbcStore, payload: &Payload) -> PacketOutcome {
        let Payload::Coins(coins) = payload else {
            return PacketOutcome::failure(
                ChannelError::AppModule {
                    description: "unexpected payload".to_string(),
                },
                None,
            );
        };

        ctx.add_coins(&coins.dest_addr, &coins.coins)
            .expect("credit succeeds");
        ctx.log_message("scripted: credited".to_string())
            .expect("no host error");

        match self.0 {
            Script::RejectPacket => PacketOutcome::failure(
                ChannelError::AppModule {
                    description: "rejected".to_string(),
                },
                Some(dummy_payload_coins_fail("10foo").into()),
            ),
            Script::ReplyWithPacket => {
                PacketOutcome::success(ModuleExtras::empty()).with_reply(payload.clone())
            }
            _ => PacketOutcome::success(ModuleExtras::empty()),
        }
    }

    fn on_recv_receipt_execute(&mut self, _ctx: &mut MockIbcStore, payload: &Payload) -> PacketOutcome {
        match self.0 {
            Script::FailReceipt => PacketOutcome::failure(
                ChannelError::AppModule {
                    description: "refund failed".to_string(),
                },
                None,
            ),
            Script::ReplyToReceipt => {
                PacketOutcome::success(ModuleExtras::empty()).with_reply(payload.clone())
            }
            _ => PacketOutcome::success(ModuleExtras::empty()),
        }
    }
}

fn scripted_router(script: Script) -> MockRouter {
    let mut router = MockRouter::default();
    router.replace_route(
        PAYLOAD_ROUTE,
        ModuleId::new("scripted".to_string()),
        ScriptedModule(script),
    );
    router
}

enum Ctx {
    Default,
    RequireTrustRoot,
    Scripted(Script),
    FullAccount,
}

enum Msg {
    Packet,
    Receipt,
    Replayed,
    OutOfOrder,
    WrongChain,
    EmptySigner,
    InvalidPayload,
}

fn receive_fixture(ctx_variant: Ctx, msg_variant: Msg) -> Fixture<MsgReceive> {
    let packet = DatagramConfig::builder()
        .payload(dummy_payload_coins("10foo").into())
        .build();
    let msg = match msg_variant {
        Msg::Packet | Msg::Replayed => MsgReceiveConfig::builder().datagram(packet).build(),
        Msg::Receipt => MsgReceiveConfig::builder()
            .datagram(
                DatagramConfig::builder()
                    .payload(dummy_payload_coins_fail("10foo").into())
                    .build(),
            )
            .build(),
        Msg::OutOfOrder => MsgReceiveConfig::builder()
            .datagram(packet)
            .sequence(1)
            .build(),
        Msg::WrongChain => MsgReceiveConfig::builder()
            .datagram(
                DatagramConfig::builder()
                    .dest_chain(dummy_chain_id("chainC"))
                    .payload(dummy_payload_coins("10foo").into())
                    .build(),
            )
            .build(),
        Msg::EmptySigner => MsgReceiveConfig::builder()
            .datagram(packet)
            .signer(Signer::new_empty())
            .build(),
        Msg::InvalidPayload => MsgReceiveConfig::builder()
            .datagram(
                DatagramConfig::builder()
                    .payload(Payload::Coins(
                        PayloadCoinsConfig::builder()
                            .dest_addr(Signer::new_empty())
                            .coins(Coins::empty())
                            .build()
                            .into(),
                    ))
                    .build(),
            )
            .build(),
    };

    let config = MockContextConfig::builder().host_id(dummy_chain_id("chainB"));
    let mut ctx = match ctx_variant {
        Ctx::Default => config.build(),
        Ctx::RequireTrustRoot => config.require_trust_root(true).build(),
        Ctx::Scripted(script) => config.router(scripted_router(script)).build(),
        Ctx::FullAccount => {
            let coin = Coin::new(U256::MAX, "foo".parse().expect("valid denom"));
            let full = Coins::new(vec![coin]).expect("valid coins");
            config.balances(vec![(Signer::from("addrY"), full)]).build()
        }
    };

    if let Msg::Replayed = msg_variant {
        ctx.deliver(MsgEnvelope::from(ChannelMsg::from(msg.clone())))
            .expect("first delivery succeeds");
        ctx.ibc_store_mut().events.clear();
    }

    Fixture { ctx, msg }
}

fn receive_validate(fxt: &Fixture<MsgReceive>, expect: Expect) {
    let msg_envelope = MsgEnvelope::from(ChannelMsg::from(fxt.msg.clone()));
    let res = validate(fxt.ctx.ibc_store(), &fxt.ctx.ibc_router, msg_envelope);
    let err_msg = fxt.generate_error_msg(&expect, "validation", &res);
    match expect {
        Expect::Failure(Some(expected)) => assert_eq!(
            res.as_ref().map_err(ToString::to_string),
            Err(expected.to_string()),
            "{err_msg}"
        ),
        Expect::Failure(None) => {
            assert!(res.is_err(), "{err_msg}")
        }
        Expect::Success => {
            assert!(res.is_ok(), "{err_msg}")
        }
    }
}

fn receive_execute(fxt: &mut Fixture<MsgReceive>, expect: Expect) {
    let msg_envelope = MsgEnvelope::from(ChannelMsg::from(fxt.msg.clone()));
    let MockContext {
        ibc_store,
        ibc_router,
        ..
    } = &mut fxt.ctx;
    let res = execute(ibc_store, ibc_router, msg_envelope);
    let err_msg = fxt.generate_error_msg(&expect, "execution", &res);
    match expect {
        Expect::Failure(_) => {
            assert!(res.is_err(), "{err_msg}")
        }
        Expect::Success => {
            assert!(res.is_ok(), "{err_msg}");

            let header = &fxt.msg.datagram.header;
            let datagram_type = fxt.msg.datagram.datagram_type();
            let ibc_events = fxt.ctx.get_events();
            assert!(matches!(
                ibc_events[0],
                IbcEvent::Message(MessageEvent::Channel)
            ));

            let IbcEvent::ReceiveDatagram(event) = &ibc_events[1] else {
                panic!("unexpected event: {:?}", ibc_events[1]);
            };
            assert_eq!(&event.src_chain, &header.src_chain);
            assert_eq!(&event.dest_chain, &header.dest_chain);
            assert_eq!(event.datagram_type, datagram_type);
            assert_eq!(event.sequence, fxt.msg.proof.sequence);

            assert_eq!(
                fxt.ctx
                    .next_sequence_recv(datagram_type, &header.src_chain),
                fxt.msg.proof.sequence.increment()
            );
        }
    }
}

#[test]
fn receive_packet_healthy() {
    let mut fxt = receive_fixture(Ctx::Default, Msg::Packet);
    receive_validate(&fxt, Expect::Success);
    receive_execute(&mut fxt, Expect::Success);

    let chain_a = dummy_chain_id("chainA");
    assert_eq!(fxt.ctx.balance(&Signer::from("addrY")), dummy_coins("10foo"));
    assert_eq!(fxt.ctx.outgoing_queue_len(DatagramType::Receipt, &chain_a), 0);

    let kinds: Vec<String> = fxt
        .ctx
        .get_events()
        .into_iter()
        .filter_map(|event| match event {
            IbcEvent::Module(event) => Some(event.kind),
            _ => None,
        })
        .collect();
    assert_eq!(kinds, vec!["coins_packet", "ledger"]);
    assert_eq!(
        fxt.ctx.get_logs(),
        vec![
            "success: receive: accepted packet 0 from chainA".to_string(),
            "transfer: credited 10foo to addrY".to_string(),
        ]
    );
}

#[test]
fn receive_packet_replayed() {
    let fxt = receive_fixture(Ctx::Default, Msg::Replayed);
    let expected_err = ChannelError::InvalidSequence {
        expected: 1.into(),
        actual: 0.into(),
    };
    receive_validate(&fxt, Expect::Failure(Some(expected_err.into())));
}

#[test]
fn receive_packet_out_of_order() {
    let mut fxt = receive_fixture(Ctx::Default, Msg::OutOfOrder);
    let expected_err = ChannelError::InvalidSequence {
        expected: 0.into(),
        actual: 1.into(),
    };
    receive_validate(&fxt, Expect::Failure(Some(expected_err.into())));

    let res = fxt
        .ctx
        .deliver(MsgEnvelope::from(ChannelMsg::from(fxt.msg.clone())));
    assert!(res.is_err());
    assert!(fxt
        .ctx
        .next_sequence_recv(DatagramType::Packet, &dummy_chain_id("chainA"))
        .is_zero());
    assert!(fxt.ctx.balance(&Signer::from("addrY")).is_empty());
}

#[test]
fn receive_datagram_for_another_chain() {
    let fxt = receive_fixture(Ctx::Default, Msg::WrongChain);
    let expected_err = ChannelError::ChainMismatch {
        expected: dummy_chain_id("chainB"),
        actual: dummy_chain_id("chainC"),
    };
    receive_validate(&fxt, Expect::Failure(Some(expected_err.into())));
}

#[test]
fn receive_invalid_payload() {
    let mut fxt = receive_fixture(Ctx::Default, Msg::InvalidPayload);
    let expected_err = ChannelError::InvalidPayload {
        description: "empty address for `dest_addr`".to_string(),
    };
    receive_validate(&fxt, Expect::Failure(Some(expected_err.into())));

    let res = fxt
        .ctx
        .deliver(MsgEnvelope::from(ChannelMsg::from(fxt.msg.clone())));
    assert!(res.is_err());
    assert!(fxt
        .ctx
        .next_sequence_recv(DatagramType::Packet, &dummy_chain_id("chainA"))
        .is_zero());
    assert!(fxt.ctx.balance(&Signer::new_empty()).is_empty());
    assert!(fxt.ctx.get_events().is_empty());
}

#[test]
fn receive_without_relayer_signature() {
    let fxt = receive_fixture(Ctx::Default, Msg::EmptySigner);
    let res = validate(
        fxt.ctx.ibc_store(),
        &fxt.ctx.ibc_router,
        MsgEnvelope::from(ChannelMsg::from(fxt.msg.clone())),
    );
    assert!(matches!(
        res,
        Err(HandlerError::Channel(ChannelError::Host(_)))
    ));
}

#[test]
fn receive_without_trust_root() {
    let mut fxt = receive_fixture(Ctx::RequireTrustRoot, Msg::Packet);
    let res = validate(
        fxt.ctx.ibc_store(),
        &fxt.ctx.ibc_router,
        MsgEnvelope::from(ChannelMsg::from(fxt.msg.clone())),
    );
    assert!(matches!(
        res,
        Err(HandlerError::Channel(
            ChannelError::ProofVerificationFailed { .. }
        ))
    ));

    fxt.ctx
        .deliver(MsgEnvelope::from(ConnectionMsg::from(
            dummy_msg_open_connection("chainA", 5, "A5"),
        )))
        .expect("connection opens");
    fxt.ctx.ibc_store_mut().events.clear();
    fxt.msg.proof.height = 5;

    receive_validate(&fxt, Expect::Success);
    receive_execute(&mut fxt, Expect::Success);
}

#[test]
fn receive_counters_are_kept_per_datagram_type() {
    let mut fxt = receive_fixture(Ctx::Default, Msg::Replayed);
    let chain_a = dummy_chain_id("chainA");
    assert_eq!(
        fxt.ctx.next_sequence_recv(DatagramType::Packet, &chain_a),
        1.into()
    );

    // The receipt stream from the same chain still starts at zero.
    let receipt = receive_fixture(Ctx::Default, Msg::Receipt).msg;
    fxt.msg = receipt;
    receive_validate(&fxt, Expect::Success);
    receive_execute(&mut fxt, Expect::Success);

    assert_eq!(
        fxt.ctx.next_sequence_recv(DatagramType::Receipt, &chain_a),
        1.into()
    );
}

#[test]
fn receive_receipt_refunds_the_sender() {
    let mut fxt = receive_fixture(Ctx::Default, Msg::Receipt);
    receive_validate(&fxt, Expect::Success);
    receive_execute(&mut fxt, Expect::Success);

    assert_eq!(fxt.ctx.balance(&Signer::from("addrX")), dummy_coins("10foo"));

    let ibc_events = fxt.ctx.get_events();
    assert_eq!(ibc_events.len(), 4);
    let IbcEvent::Module(refund_event) = &ibc_events[2] else {
        panic!("unexpected event: {:?}", ibc_events[2]);
    };
    assert_eq!(refund_event.kind, "coins_refund");
    assert_eq!(refund_event.attribute("refund_receiver"), Some("addrX"));
}

#[test]
fn failed_packet_is_rolled_back_and_answered() {
    let mut fxt = receive_fixture(Ctx::Scripted(Script::RejectPacket), Msg::Packet);
    receive_validate(&fxt, Expect::Success);

    let res = fxt
        .ctx
        .deliver(MsgEnvelope::from(ChannelMsg::from(fxt.msg.clone())));
    assert!(matches!(
        res,
        Err(HandlerError::Channel(ChannelError::AppModule { .. }))
    ));

    let chain_a = dummy_chain_id("chainA");
    let chain_b = dummy_chain_id("chainB");

    // The credit made before the failure is discarded.
    assert!(fxt.ctx.balance(&Signer::from("addrY")).is_empty());
    assert_eq!(fxt.ctx.ibc_store().write_buffer_depth(), 0);

    // The sequence advance and the receipt survive the failure.
    assert_eq!(
        fxt.ctx.next_sequence_recv(DatagramType::Packet, &chain_a),
        1.into()
    );
    let receipts = fxt.ctx.outgoing_datagrams(DatagramType::Receipt, &chain_a);
    assert_eq!(receipts.len(), 1);
    assert_eq!(receipts[0].header, Header::new(chain_b.clone(), chain_a.clone()));
    assert_eq!(
        receipts[0].payload,
        Payload::from(dummy_payload_coins_fail("10foo"))
    );

    let ibc_events = fxt.ctx.get_events();
    assert_eq!(ibc_events.len(), 4);
    assert!(matches!(ibc_events[1], IbcEvent::ReceiveDatagram(_)));
    assert!(matches!(
        ibc_events[2],
        IbcEvent::Message(MessageEvent::Channel)
    ));
    let IbcEvent::WriteReceipt(event) = &ibc_events[3] else {
        panic!("unexpected event: {:?}", ibc_events[3]);
    };
    assert_eq!(event.src_chain, chain_b);
    assert_eq!(event.dest_chain, chain_a);
    assert!(event.sequence.is_zero());

    let logs = fxt.ctx.get_logs();
    assert_eq!(logs.len(), 3);
    assert_eq!(logs[1], "success: receive: queued receipt 0 for chainA");
    assert!(logs[2].starts_with("failure: receive: packet from chainA rolled back"));
    assert!(!logs.iter().any(|log| log.starts_with("scripted")));
}

#[test]
fn packet_answered_with_a_packet_is_rolled_back() {
    let mut fxt = receive_fixture(Ctx::Scripted(Script::ReplyWithPacket), Msg::Packet);
    receive_validate(&fxt, Expect::Success);

    let res = fxt
        .ctx
        .deliver(MsgEnvelope::from(ChannelMsg::from(fxt.msg.clone())));
    assert!(matches!(
        res,
        Err(HandlerError::Channel(ChannelError::InvalidReply { .. }))
    ));

    let chain_a = dummy_chain_id("chainA");
    assert!(fxt.ctx.balance(&Signer::from("addrY")).is_empty());
    assert_eq!(fxt.ctx.outgoing_queue_len(DatagramType::Receipt, &chain_a), 0);
    assert_eq!(fxt.ctx.outgoing_queue_len(DatagramType::Packet, &chain_a), 0);
    assert_eq!(
        fxt.ctx.next_sequence_recv(DatagramType::Packet, &chain_a),
        1.into()
    );
}

#[test]
fn overflowing_credit_is_answered_with_a_failure_receipt() {
    let mut fxt = receive_fixture(Ctx::FullAccount, Msg::Packet);

    // The overflow is only detected by the application.
    receive_validate(&fxt, Expect::Success);
    let res = fxt
        .ctx
        .deliver(MsgEnvelope::from(ChannelMsg::from(fxt.msg.clone())));
    assert!(matches!(
        res,
        Err(HandlerError::Channel(ChannelError::AppModule { .. }))
    ));

    let receipts = fxt
        .ctx
        .outgoing_datagrams(DatagramType::Receipt, &dummy_chain_id("chainA"));
    assert_eq!(receipts.len(), 1);
    assert_eq!(
        receipts[0].payload,
        Payload::from(dummy_payload_coins_fail("10foo"))
    );
}

#[test]
#[should_panic(expected = "could not be applied")]
fn failed_receipt_aborts() {
    let mut fxt = receive_fixture(Ctx::Scripted(Script::FailReceipt), Msg::Receipt);
    receive_validate(&fxt, Expect::Success);
    let _ = fxt
        .ctx
        .deliver(MsgEnvelope::from(ChannelMsg::from(fxt.msg.clone())));
}

#[test]
#[should_panic(expected = "was answered with")]
fn answered_receipt_aborts() {
    let mut fxt = receive_fixture(Ctx::Scripted(Script::ReplyToReceipt), Msg::Receipt);
    receive_validate(&fxt, Expect::Success);
    let _ = fxt
        .ctx
        .deliver(MsgEnvelope::from(ChannelMsg::from(fxt.msg.clone())));
}
