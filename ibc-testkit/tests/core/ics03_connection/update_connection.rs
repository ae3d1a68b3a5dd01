use ibc::core::connection::types::error::ConnectionError;
use ibc::core::connection::types::msgs::{ConnectionMsg, MsgUpdateConnection};
use ibc::core::entrypoint::{execute, validate};
use ibc::core::handler::types::error::HandlerError;
use ibc::core::handler::types::events::{IbcEvent, MessageEvent};
use ibc::core::handler::types::msgs::MsgEnvelope;
use ibc::core::host::types::path::CommitPath;
use ibc::core::host::ValidationContext;
use ibc::core::primitives::prelude::*;
use ibc_testkit::context::MockContext;
use ibc_testkit::fixtures::core::connection::{
    dummy_chain_id, dummy_commit, dummy_msg_open_connection, dummy_msg_update_connection,
};
use ibc_testkit::fixtures::core::context::MockContextConfig;
use ibc_testkit::fixtures::{Expect, Fixture};
use rstest::*;

enum Ctx {
    Default,
    WithConnection,
}

fn update_connection_fixture(ctx_variant: Ctx, height: u64, root: &str) -> Fixture<MsgUpdateConnection> {
    let msg = dummy_msg_update_connection("chainB", height, root);

    let mut ctx = MockContextConfig::builder()
        .host_id(dummy_chain_id("chainA"))
        .build();
    if let Ctx::WithConnection = ctx_variant {
        ctx.deliver(MsgEnvelope::from(ConnectionMsg::from(
            dummy_msg_open_connection("chainB", 100, "R1"),
        )))
        .expect("connection opens");
        ctx.ibc_store_mut().events.clear();
    }

    Fixture { ctx, msg }
}

fn update_connection_validate(fxt: &Fixture<MsgUpdateConnection>, expect: Expect) {
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

fn update_connection_execute(fxt: &mut Fixture<MsgUpdateConnection>, expect: Expect) {
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

            let height = fxt.msg.commit.height();
            let ibc_events = fxt.ctx.get_events();
            assert_eq!(ibc_events.len(), 2);
            assert!(matches!(
                ibc_events[0],
                IbcEvent::Message(MessageEvent::Connection)
            ));

            let IbcEvent::UpdateConnection(event) = &ibc_events[1] else {
                panic!("unexpected event: {:?}", ibc_events[1]);
            };
            assert_eq!(event.src_chain(), &fxt.msg.src_chain);
            assert_eq!(event.height(), height);

            assert_eq!(fxt.ctx.commit_height(&fxt.msg.src_chain), Some(height));
            let recorded = fxt
                .ctx
                .ibc_store()
                .commit(&CommitPath::new(&fxt.msg.src_chain, height))
                .expect("no host error");
            assert_eq!(recorded, Some(fxt.msg.commit.clone()));
        }
    }
}

#[test_log::test]
fn update_connection_healthy() {
    let mut fxt = update_connection_fixture(Ctx::WithConnection, 150, "R2");
    update_connection_validate(&fxt, Expect::Success);
    update_connection_execute(&mut fxt, Expect::Success);

    // Commits below the new height remain available as trust roots.
    let recorded = fxt
        .ctx
        .ibc_store()
        .commit(&CommitPath::new(&dummy_chain_id("chainB"), 100))
        .expect("no host error");
    assert_eq!(recorded, Some(dummy_commit(100, "R1")));
}

#[test_log::test]
fn update_connection_at_the_same_height_overwrites() {
    let mut fxt = update_connection_fixture(Ctx::WithConnection, 100, "R1bis");
    update_connection_validate(&fxt, Expect::Success);
    update_connection_execute(&mut fxt, Expect::Success);
}

#[test_log::test]
fn update_connection_not_established() {
    let fxt = update_connection_fixture(Ctx::Default, 150, "R2");
    let expected_err = ConnectionError::ConnectionNotEstablished {
        chain_id: dummy_chain_id("chainB"),
    };
    update_connection_validate(&fxt, Expect::Failure(Some(expected_err.into())));
}

#[rstest]
#[case(99)]
#[case(1)]
fn update_connection_lower_height(#[case] height: u64) {
    let fxt = update_connection_fixture(Ctx::WithConnection, height, "R0");
    let expected_err = ConnectionError::InvalidHeight {
        height,
        last_height: 100,
    };
    update_connection_validate(&fxt, Expect::Failure(Some(expected_err.into())));
}

#[test_log::test]
fn rejected_update_leaves_the_connection_untouched() {
    let mut fxt = update_connection_fixture(Ctx::WithConnection, 50, "R0");
    let res = fxt
        .ctx
        .deliver(MsgEnvelope::from(ConnectionMsg::from(fxt.msg.clone())));

    assert!(matches!(
        res,
        Err(HandlerError::Connection(ConnectionError::InvalidHeight {
            height: 50,
            last_height: 100
        }))
    ));
    assert_eq!(fxt.ctx.commit_height(&dummy_chain_id("chainB")), Some(100));
    assert!(fxt.ctx.get_events().is_empty());
}
