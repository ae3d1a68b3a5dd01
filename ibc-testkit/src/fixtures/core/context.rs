use ibc::apps::transfer::types::Coins;
use ibc::core::host::types::identifiers::ChainId;
use ibc::core::primitives::prelude::*;
use ibc::core::primitives::Signer;
use typed_builder::TypedBuilder;

use crate::context::MockContext;
use crate::testapp::ibc::core::router::MockRouter;
use crate::testapp::ibc::core::types::{MockIbcStore, DEFAULT_CHAIN_ID};

/// Configuration for a `MockContext` type.
#[derive(Debug, TypedBuilder)]
#[builder(build_method(into = MockContext))]
pub struct MockContextConfig {
    #[builder(default = ChainId::new(DEFAULT_CHAIN_ID).expect("Never fails"))]
    host_id: ChainId,

    #[builder(default = 1)]
    latest_height: u64,

    /// Genesis balances of the bank
    #[builder(default)]
    balances: Vec<(Signer, Coins)>,

    #[builder(default = false)]
    require_trust_root: bool,

    #[builder(default = MockRouter::new_with_transfer())]
    router: MockRouter,
}

impl From<MockContextConfig> for MockContext {
    fn from(params: MockContextConfig) -> Self {
        assert_ne!(
            params.latest_height, 0,
            "The chain must have a non-zero latest_height"
        );

        let mut ibc_store = MockIbcStore::new(params.host_id);
        ibc_store.require_trust_root = params.require_trust_root;

        let ctx = MockContext {
            ibc_store,
            ibc_router: params.router,
            latest_height: params.latest_height,
        };

        params
            .balances
            .into_iter()
            .fold(ctx, |ctx, (account, coins)| ctx.with_balance(&account, coins))
    }
}
