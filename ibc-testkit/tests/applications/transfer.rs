use ibc::apps::transfer::types::{Coin, Coins, U256};
use ibc::core::channel::types::error::ChannelError;
use ibc::core::channel::types::msgs::ChannelMsg;
use ibc::core::channel::types::DatagramType;
use ibc::core::handler::types::error::HandlerError;
use ibc::core::handler::types::msgs::MsgEnvelope;
use ibc::core::primitives::prelude::*;
use ibc::core::primitives::Signer;
use ibc_testkit::context::MockContext;
use ibc_testkit::fixtures::applications::transfer::{
    dummy_coins, dummy_payload_coins, PayloadCoinsConfig,
};
use ibc_testkit::fixtures::core::channel::dummy_msg_send;
use ibc_testkit::fixtures::core::connection::dummy_chain_id;
use ibc_testkit::fixtures::core::context::MockContextConfig;
use ibc_testkit::fixtures::core::signer::dummy_account_id;
use ibc_testkit::relayer::context::RelayerContext;
use rstest::*;

fn addr_x() -> Signer {
    Signer::from("addrX")
}

fn addr_y() -> Signer {
    Signer::from("addrY")
}

fn chain(id: &str, balances: Vec<(Signer, Coins)>) -> MockContext {
    MockContextConfig::builder()
        .host_id(dummy_chain_id(id))
        .balances(balances)
        .require_trust_root(true)
        .build()
}

fn connected(ctx_a: MockContext, ctx_b: MockContext) -> RelayerContext {
    let mut relayer = RelayerContext::new(ctx_a, ctx_b);
    relayer
        .open_connections(dummy_account_id())
        .expect("connections open");
    relayer
}

fn send(ctx: &mut MockContext, dest_chain: &str, coins: &str) -> Result<(), HandlerError> {
    let msg = dummy_msg_send(dest_chain, dummy_payload_coins(coins));
    ctx.deliver(MsgEnvelope::from(ChannelMsg::from(msg)))
}

#[test_log::test]
fn transfer_a_to_b() {
    let mut relayer = connected(
        chain("chainA", vec![(addr_x(), dummy_coins("15foo"))]),
        chain("chainB", vec![]),
    );

    send(relayer.get_ctx_a_mut(), "chainB", "10foo").expect("send succeeds");
    assert_eq!(relayer.get_ctx_a().balance(&addr_x()), dummy_coins("5foo"));

    // Chain B learns a commit of chain A that includes the send.
    relayer
        .update_connection_on_b(dummy_account_id())
        .expect("connection advances");

    let outcomes = relayer.relay_packets_a_to_b(dummy_account_id());
    assert_eq!(outcomes.len(), 1);
    assert!(outcomes.iter().all(Result::is_ok));

    let ctx_b = relayer.get_ctx_b();
    assert_eq!(ctx_b.balance(&addr_y()), dummy_coins("10foo"));
    assert_eq!(
        ctx_b.next_sequence_recv(DatagramType::Packet, &dummy_chain_id("chainA")),
        1.into()
    );
    assert_eq!(
        ctx_b.outgoing_queue_len(DatagramType::Receipt, &dummy_chain_id("chainA")),
        0
    );

    // Everything queued was accepted already.
    assert!(relayer.relay_packets_a_to_b(dummy_account_id()).is_empty());
    assert!(relayer.relay_receipts_b_to_a(dummy_account_id()).is_empty());
}

#[test_log::test]
fn transfer_insufficient_funds() {
    let mut ctx_a = chain("chainA", vec![(addr_x(), dummy_coins("5foo"))]);

    let res = send(&mut ctx_a, "chainB", "10foo");
    assert!(matches!(
        res,
        Err(HandlerError::Channel(ChannelError::AppModule { .. }))
    ));
    assert_eq!(ctx_a.balance(&addr_x()), dummy_coins("5foo"));
    assert_eq!(
        ctx_a.outgoing_queue_len(DatagramType::Packet, &dummy_chain_id("chainB")),
        0
    );
}

#[test_log::test]
fn rejected_transfer_is_refunded() {
    let full = Coins::new(vec![Coin::new(
        U256::MAX,
        "foo".parse().expect("valid denom"),
    )])
    .expect("valid coins");
    let mut relayer = connected(
        chain("chainA", vec![(addr_x(), dummy_coins("15foo"))]),
        chain("chainB", vec![(addr_y(), full.clone())]),
    );

    send(relayer.get_ctx_a_mut(), "chainB", "10foo").expect("send succeeds");
    assert_eq!(relayer.get_ctx_a().balance(&addr_x()), dummy_coins("5foo"));

    let outcomes = relayer.relay_packets_a_to_b(dummy_account_id());
    assert!(matches!(
        outcomes.as_slice(),
        [Err(HandlerError::Channel(ChannelError::AppModule { .. }))]
    ));
    assert_eq!(relayer.get_ctx_b().balance(&addr_y()), full);

    relayer
        .update_connection_on_a(dummy_account_id())
        .expect("connection advances");
    let outcomes = relayer.relay_receipts_b_to_a(dummy_account_id());
    assert_eq!(outcomes.len(), 1);
    assert!(outcomes.iter().all(Result::is_ok));

    let ctx_a = relayer.get_ctx_a();
    assert_eq!(ctx_a.balance(&addr_x()), dummy_coins("15foo"));
    assert_eq!(
        ctx_a.next_sequence_recv(DatagramType::Receipt, &dummy_chain_id("chainB")),
        1.into()
    );
}

#[rstest]
#[case::one(1)]
#[case::several(3)]
fn transfers_are_delivered_in_order(#[case] transfers: u64) {
    let mut relayer = connected(
        chain("chainA", vec![]),
        chain("chainB", vec![(addr_y(), dummy_coins("9bar"))]),
    );

    for _ in 0..transfers {
        let payload = PayloadCoinsConfig::builder()
            .src_addr(addr_y())
            .dest_addr(addr_x())
            .coins(dummy_coins("3bar"))
            .build();
        let msg = dummy_msg_send("chainA", payload);
        relayer
            .get_ctx_b_mut()
            .deliver(MsgEnvelope::from(ChannelMsg::from(msg)))
            .expect("send succeeds");
    }

    relayer
        .update_connection_on_a(dummy_account_id())
        .expect("connection advances");
    let outcomes = relayer.relay_packets_b_to_a(dummy_account_id());
    assert_eq!(outcomes.len() as u64, transfers);
    assert!(outcomes.iter().all(Result::is_ok));

    let received = dummy_coins(&format!("{}bar", 3 * transfers));
    assert_eq!(relayer.get_ctx_a().balance(&addr_x()), received);
    assert_eq!(
        relayer
            .get_ctx_a()
            .next_sequence_recv(DatagramType::Packet, &dummy_chain_id("chainB")),
        transfers.into()
    );
}

#[test_log::test]
fn relay_without_connection_fails() {
    let mut relayer = RelayerContext::new(
        chain("chainA", vec![(addr_x(), dummy_coins("10foo"))]),
        chain("chainB", vec![]),
    );
    send(relayer.get_ctx_a_mut(), "chainB", "10foo").expect("send succeeds");

    let outcomes = relayer.relay_packets_a_to_b(dummy_account_id());
    assert!(matches!(
        outcomes.as_slice(),
        [Err(HandlerError::Channel(
            ChannelError::ProofVerificationFailed { .. }
        ))]
    ));
    assert!(relayer.get_ctx_b().balance(&addr_y()).is_empty());
}
