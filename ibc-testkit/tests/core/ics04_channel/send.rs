use ibc::apps::transfer::types::Coins;
use ibc::core::channel::types::error::ChannelError;
use ibc::core::channel::types::msgs::{ChannelMsg, MsgSend};
use ibc::core::channel::types::{DatagramType, Header, Payload};
use ibc::core::entrypoint::{execute, validate};
use ibc::core::handler::types::error::HandlerError;
use ibc::core::handler::types::events::{IbcEvent, MessageEvent};
use ibc::core::handler::types::msgs::MsgEnvelope;
use ibc::core::primitives::prelude::*;
use ibc::core::primitives::Signer;
use ibc::core::router::types::error::RouterError;
use ibc_testkit::context::MockContext;
use ibc_testkit::fixtures::applications::transfer::{
    dummy_coins, dummy_payload_coins, dummy_payload_coins_fail, PayloadCoinsConfig,
};
use ibc_testkit::fixtures::core::channel::dummy_msg_send;
use ibc_testkit::fixtures::core::connection::dummy_chain_id;
use ibc_testkit::fixtures::core::context::MockContextConfig;
use ibc_testkit::fixtures::{Expect, Fixture};
use ibc_testkit::testapp::ibc::core::router::MockRouter;
use test_log::test;

enum Ctx {
    Default,
    Funded,
    NoRoutes,
}

enum Msg {
    Default,
    Overdrawn,
    Receipt,
    EmptyCoins,
    EmptySender,
}

fn send_fixture(ctx_variant: Ctx, msg_variant: Msg) -> Fixture<MsgSend> {
    let payload: Payload = match msg_variant {
        Msg::Default => dummy_payload_coins("10foo").into(),
        Msg::Overdrawn => dummy_payload_coins("16foo").into(),
        Msg::Receipt => dummy_payload_coins_fail("10foo").into(),
        Msg::EmptyCoins => PayloadCoinsConfig::builder()
            .coins(Coins::empty())
            .build()
            .into(),
        Msg::EmptySender => PayloadCoinsConfig::builder()
            .src_addr(Signer::new_empty())
            .build()
            .into(),
    };
    let msg = dummy_msg_send("chainB", payload);

    let config = MockContextConfig::builder().host_id(dummy_chain_id("chainA"));
    let ctx = match ctx_variant {
        Ctx::Default => config.build(),
        Ctx::Funded => config
            .balances(vec![(Signer::from("addrX"), dummy_coins("15foo"))])
            .build(),
        Ctx::NoRoutes => config
            .balances(vec![(Signer::from("addrX"), dummy_coins("15foo"))])
            .router(MockRouter::default())
            .build(),
    };

    Fixture { ctx, msg }
}

fn send_validate(fxt: &Fixture<MsgSend>, expect: Expect) {
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

fn send_execute(fxt: &mut Fixture<MsgSend>, expect: Expect) {
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

            let ibc_events = fxt.ctx.get_events();
            assert_eq!(ibc_events.len(), 4);
            assert!(matches!(
                ibc_events[0],
                IbcEvent::Message(MessageEvent::Channel)
            ));

            let IbcEvent::SendDatagram(event) = &ibc_events[1] else {
                panic!("unexpected event: {:?}", ibc_events[1]);
            };
            assert_eq!(event.src_chain, dummy_chain_id("chainA"));
            assert_eq!(event.dest_chain, dummy_chain_id("chainB"));
            assert_eq!(event.datagram_type, DatagramType::Packet);
            assert!(event.sequence.is_zero());
            assert_eq!(event.route, "ibc/bank");

            let IbcEvent::Module(send_event) = &ibc_events[2] else {
                panic!("unexpected event: {:?}", ibc_events[2]);
            };
            assert_eq!(send_event.kind, "ibc_transfer");
            assert_eq!(send_event.attribute("amount"), Some("10foo"));

            let IbcEvent::Module(ledger_event) = &ibc_events[3] else {
                panic!("unexpected event: {:?}", ibc_events[3]);
            };
            assert_eq!(ledger_event.kind, "ledger");
            assert_eq!(ledger_event.attribute("sender"), Some("addrX"));
        }
    }
}

#[test]
fn send_healthy() {
    let mut fxt = send_fixture(Ctx::Funded, Msg::Default);
    send_validate(&fxt, Expect::Success);
    send_execute(&mut fxt, Expect::Success);

    assert_eq!(fxt.ctx.balance(&Signer::from("addrX")), dummy_coins("5foo"));

    let queued = fxt
        .ctx
        .outgoing_datagrams(DatagramType::Packet, &dummy_chain_id("chainB"));
    assert_eq!(queued.len(), 1);
    assert_eq!(
        queued[0].header,
        Header::new(dummy_chain_id("chainA"), dummy_chain_id("chainB"))
    );
    assert_eq!(queued[0].payload, fxt.msg.payload);

    assert_eq!(
        fxt.ctx.get_logs(),
        vec![
            "success: send: queued packet 0 for chainB".to_string(),
            "transfer: debited 10foo from addrX".to_string(),
        ]
    );
}

#[test]
fn send_assigns_consecutive_sequences() {
    let mut fxt = send_fixture(Ctx::Funded, Msg::Default);
    let msg = MsgEnvelope::from(ChannelMsg::from(dummy_msg_send(
        "chainB",
        dummy_payload_coins("5foo"),
    )));

    for _ in 0..3 {
        fxt.ctx.deliver(msg.clone()).expect("send succeeds");
    }

    let sequences: Vec<u64> = fxt
        .ctx
        .get_events()
        .into_iter()
        .filter_map(|event| match event {
            IbcEvent::SendDatagram(event) => Some(event.sequence.value()),
            _ => None,
        })
        .collect();
    assert_eq!(sequences, vec![0, 1, 2]);
    assert_eq!(
        fxt.ctx
            .outgoing_queue_len(DatagramType::Packet, &dummy_chain_id("chainB")),
        3
    );
    assert!(fxt.ctx.balance(&Signer::from("addrX")).is_empty());
}

#[test]
fn send_insufficient_funds() {
    let mut fxt = send_fixture(Ctx::Funded, Msg::Overdrawn);
    send_validate(&fxt, Expect::Failure(None));

    let res = fxt
        .ctx
        .deliver(MsgEnvelope::from(ChannelMsg::from(fxt.msg.clone())));
    assert!(matches!(
        res,
        Err(HandlerError::Channel(ChannelError::AppModule { .. }))
    ));

    assert_eq!(fxt.ctx.balance(&Signer::from("addrX")), dummy_coins("15foo"));
    assert_eq!(
        fxt.ctx
            .outgoing_queue_len(DatagramType::Packet, &dummy_chain_id("chainB")),
        0
    );
    assert!(fxt.ctx.get_events().is_empty());
}

#[test]
fn send_from_an_empty_account() {
    let fxt = send_fixture(Ctx::Default, Msg::Default);
    send_validate(&fxt, Expect::Failure(None));
}

#[test]
fn send_receipt_payload() {
    let fxt = send_fixture(Ctx::Funded, Msg::Receipt);
    send_validate(&fxt, Expect::Failure(None));
}

#[test]
fn send_empty_coins() {
    let fxt = send_fixture(Ctx::Funded, Msg::EmptyCoins);
    let res = validate(
        fxt.ctx.ibc_store(),
        &fxt.ctx.ibc_router,
        MsgEnvelope::from(ChannelMsg::from(fxt.msg.clone())),
    );
    assert!(matches!(
        res,
        Err(HandlerError::Channel(ChannelError::InvalidPayload { .. }))
    ));
}

#[test]
fn send_without_sender() {
    let fxt = send_fixture(Ctx::Funded, Msg::EmptySender);
    send_validate(&fxt, Expect::Failure(None));
}

#[test]
fn send_without_route() {
    let fxt = send_fixture(Ctx::NoRoutes, Msg::Default);
    let expected_err = RouterError::MissingModule {
        route: "ibc/bank".to_string(),
    };
    send_validate(&fxt, Expect::Failure(Some(expected_err.into())));
}
