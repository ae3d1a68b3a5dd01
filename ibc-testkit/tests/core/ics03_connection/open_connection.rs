use ibc::core::connection::types::error::ConnectionError;
use ibc::core::connection::types::msgs::{ConnectionMsg, MsgOpenConnection};
use ibc::core::entrypoint::{execute, validate};
use ibc::core::handler::types::error::HandlerError;
use ibc::core::handler::types::events::{IbcEvent, MessageEvent};
use ibc::core::handler::types::msgs::MsgEnvelope;
use ibc::core::host::types::path::CommitPath;
use ibc::core::host::ValidationContext;
use ibc::core::primitives::prelude::*;
use ibc::core::primitives::{Signer, ToProto};
use ibc_testkit::context::MockContext;
use ibc_testkit::fixtures::core::connection::{
    dummy_chain_id, dummy_commit, dummy_msg_open_connection,
};
use ibc_testkit::fixtures::core::context::MockContextConfig;
use ibc_testkit::fixtures::{Expect, Fixture};
use test_log::test;

enum Ctx {
    Default,
    WithConnection,
}

enum Msg {
    Default,
    EmptySigner,
}

fn open_connection_fixture(ctx_variant: Ctx, msg_variant: Msg) -> Fixture<MsgOpenConnection> {
    let msg_default = dummy_msg_open_connection("chainB", 100, "R1");
    let msg = match msg_variant {
        Msg::Default => msg_default,
        Msg::EmptySigner => MsgOpenConnection {
            signer: Signer::new_empty(),
            ..msg_default
        },
    };

    let mut ctx = MockContextConfig::builder()
        .host_id(dummy_chain_id("chainA"))
        .build();
    if let Ctx::WithConnection = ctx_variant {
        ctx.deliver(MsgEnvelope::from(ConnectionMsg::from(
            dummy_msg_open_connection("chainB", 50, "R0"),
        )))
        .expect("connection opens");
        ctx.ibc_store_mut().events.clear();
    }

    Fixture { ctx, msg }
}

fn open_connection_validate(fxt: &Fixture<MsgOpenConnection>, expect: Expect) {
    let msg_envelope = MsgEnvelope::from(ConnectionMsg::from(fxt.msg.clone()));
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

fn open_connection_execute(fxt: &mut Fixture<MsgOpenConnection>, expect: Expect) {
    let msg_envelope = MsgEnvelope::from(ConnectionMsg::from(fxt.msg.clone()));
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
            assert_eq!(ibc_events.len(), 2);
            assert!(matches!(
                ibc_events[0],
                IbcEvent::Message(MessageEvent::Connection)
            ));

            let IbcEvent::OpenConnection(event) = &ibc_events[1] else {
                panic!("unexpected event: {:?}", ibc_events[1]);
            };
            assert_eq!(event.src_chain(), &fxt.msg.src_chain);
            assert_eq!(event.height(), 100);

            assert_eq!(fxt.ctx.commit_height(&fxt.msg.src_chain), Some(100));
            let pinned = fxt
                .ctx
                .ibc_store()
                .commit(&CommitPath::new(&fxt.msg.src_chain, 100))
                .expect("no host error");
            assert_eq!(pinned, Some(fxt.msg.root_of_trust.clone()));
        }
    }
}

#[test]
fn open_connection_healthy() {
    let mut fxt = open_connection_fixture(Ctx::Default, Msg::Default);
    open_connection_validate(&fxt, Expect::Success);
    open_connection_execute(&mut fxt, Expect::Success);
}

#[test]
fn open_connection_already_established() {
    let fxt = open_connection_fixture(Ctx::WithConnection, Msg::Default);
    let expected_err = ConnectionError::ConnectionAlreadyEstablished {
        chain_id: dummy_chain_id("chainB"),
    };
    open_connection_validate(&fxt, Expect::Failure(Some(expected_err.into())));
}

#[test]
fn open_connection_empty_signer() {
    let fxt = open_connection_fixture(Ctx::Default, Msg::EmptySigner);
    open_connection_validate(&fxt, Expect::Failure(None));
}

#[test]
fn open_connection_twice_keeps_the_first_root_of_trust() {
    let mut ctx = MockContextConfig::builder()
        .host_id(dummy_chain_id("chainA"))
        .build();

    let first = dummy_msg_open_connection("chainB", 100, "R1");
    ctx.deliver(MsgEnvelope::from(ConnectionMsg::from(first)))
        .expect("connection opens");

    let second = dummy_msg_open_connection("chainB", 200, "R2");
    let res = ctx.deliver(MsgEnvelope::from(ConnectionMsg::from(second)));
    assert!(matches!(
        res,
        Err(HandlerError::Connection(
            ConnectionError::ConnectionAlreadyEstablished { .. }
        ))
    ));

    let chain_b = dummy_chain_id("chainB");
    assert_eq!(ctx.commit_height(&chain_b), Some(100));
    let pinned = ctx
        .ibc_store()
        .commit(&CommitPath::new(&chain_b, 100))
        .expect("no host error");
    assert_eq!(pinned, Some(dummy_commit(100, "R1")));
    assert_eq!(
        ctx.ibc_store()
            .commit(&CommitPath::new(&chain_b, 200))
            .expect("no host error"),
        None
    );
}

#[test]
fn open_connection_from_any() {
    let mut ctx = MockContext::default();
    let msg = dummy_msg_open_connection("chainB", 7, "R7");

    ctx.submit_tx(vec![msg.to_any()]).expect("transaction succeeds");

    assert_eq!(ctx.commit_height(&dummy_chain_id("chainB")), Some(7));
    assert_eq!(ctx.latest_height, 2);
}
