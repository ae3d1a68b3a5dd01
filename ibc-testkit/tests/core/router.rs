use ibc::apps::transfer::module::TransferModule;
use ibc::apps::transfer::types::{MODULE_ID_STR, PAYLOAD_ROUTE};
use ibc::core::channel::types::msgs::ChannelMsg;
use ibc::core::channel::types::DatagramType;
use ibc::core::handler::types::error::HandlerError;
use ibc::core::handler::types::msgs::MsgEnvelope;
use ibc::core::primitives::prelude::*;
use ibc::core::primitives::proto::Any;
use ibc::core::primitives::{Signer, ToProto};
use ibc::core::router::router::Router;
use ibc::core::router::types::error::RouterError;
use ibc::core::router::types::module::ModuleId;
use ibc_testkit::context::MockContext;
use ibc_testkit::fixtures::applications::transfer::{dummy_coins, dummy_payload_coins};
use ibc_testkit::fixtures::core::channel::dummy_msg_send;
use ibc_testkit::fixtures::core::connection::{
    dummy_chain_id, dummy_msg_open_connection, dummy_msg_update_connection,
};
use ibc_testkit::fixtures::core::context::MockContextConfig;
use ibc_testkit::testapp::ibc::core::router::MockRouter;
use test_log::test;

#[test]
fn transfer_route_is_bound_at_genesis() {
    let router = MockRouter::new_with_transfer();
    let module_id = ModuleId::new(MODULE_ID_STR.to_string());

    assert_eq!(router.lookup_module(PAYLOAD_ROUTE), Some(module_id.clone()));
    assert!(router.get_route(&module_id).is_some());
    assert_eq!(router.lookup_module("ibc/nft"), None);
}

#[test]
fn duplicate_module_is_rejected() {
    let mut router = MockRouter::new_with_transfer();
    let module_id = ModuleId::new(MODULE_ID_STR.to_string());
    let res = router.add_route(module_id, TransferModule);
    assert!(res.is_err());
}

#[test]
fn unknown_message_type() {
    let mut ctx = MockContext::default();
    let msg = Any {
        type_url: "/ibc.core.client.v1.MsgCreateClient".to_string(),
        value: vec![],
    };

    let res = ctx.submit_tx(vec![msg]);
    assert!(matches!(
        res,
        Err(HandlerError::Router(RouterError::UnknownRequest { ref type_url }))
            if type_url == "/ibc.core.client.v1.MsgCreateClient"
    ));
    assert_eq!(ctx.latest_height, 1);
    assert!(ctx.get_events().is_empty());
}

#[test]
fn malformed_message() {
    let mut ctx = MockContext::default();
    let mut msg = dummy_msg_open_connection("chainB", 100, "R1").to_any();
    msg.value.truncate(3);

    let res = ctx.submit_tx(vec![msg]);
    assert!(matches!(
        res,
        Err(HandlerError::Router(RouterError::Decoding(_)))
    ));
}

#[test]
fn payload_without_module() {
    let mut ctx = MockContextConfig::builder()
        .balances(vec![(Signer::from("addrX"), dummy_coins("10foo"))])
        .router(MockRouter::default())
        .build();
    let msg = dummy_msg_send("chainB", dummy_payload_coins("10foo"));

    let res = ctx.deliver(MsgEnvelope::from(ChannelMsg::from(msg)));
    assert!(matches!(
        res,
        Err(HandlerError::Router(RouterError::MissingModule { ref route })) if route == PAYLOAD_ROUTE
    ));
    assert_eq!(ctx.balance(&Signer::from("addrX")), dummy_coins("10foo"));
}

#[test]
fn transaction_stops_at_the_first_failure() {
    let mut ctx = MockContext::default();
    let chain_b = dummy_chain_id("chainB");

    let res = ctx.submit_tx(vec![
        dummy_msg_open_connection("chainB", 100, "R1").to_any(),
        dummy_msg_open_connection("chainB", 110, "R2").to_any(),
        dummy_msg_update_connection("chainB", 120, "R3").to_any(),
    ]);

    assert!(res.is_err());
    assert_eq!(ctx.commit_height(&chain_b), Some(100));
}

#[test]
fn transaction_of_sends() {
    let mut ctx = MockContextConfig::builder()
        .balances(vec![(Signer::from("addrX"), dummy_coins("10foo"))])
        .build();
    let msg = dummy_msg_send("chainB", dummy_payload_coins("4foo"));

    ctx.submit_tx(vec![msg.clone().to_any(), msg.to_any()])
        .expect("transaction succeeds");

    assert_eq!(ctx.balance(&Signer::from("addrX")), dummy_coins("2foo"));
    assert_eq!(
        ctx.outgoing_queue_len(DatagramType::Packet, &dummy_chain_id("chainB")),
        2
    );
}
