use ibc::apps::transfer::types::Coins;
use ibc::core::primitives::prelude::*;
use ibc::core::primitives::Signer;
use ibc_testkit_store::types::{JsonStore, Path};

use crate::testapp::ibc::core::types::MockStore;

const BALANCE_PREFIX: u8 = 0x00;

/// Key of the balance held by an account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BalancePath(pub Signer);

impl BalancePath {
    pub fn new(account: &Signer) -> Self {
        Self(account.clone())
    }
}

impl From<BalancePath> for Path {
    fn from(path: BalancePath) -> Self {
        let mut key = vec![BALANCE_PREFIX];
        key.extend_from_slice(path.0.as_str().as_bytes());
        key.into()
    }
}

/// The bank ledger of the mock host.
#[derive(Debug)]
pub struct MockBank {
    /// Module-scoped store of the bank
    pub store: MockStore,
    pub balances: JsonStore<MockStore, BalancePath, Coins>,
}

impl MockBank {
    /// The coins held by `account`. Unknown accounts hold nothing.
    pub fn balance(&self, account: &Signer) -> Coins {
        self.balances
            .get(&BalancePath::new(account))
            .unwrap_or_default()
    }
}

impl Default for MockBank {
    fn default() -> Self {
        let store = MockStore::default();
        Self {
            balances: JsonStore::new(store.share()),
            store,
        }
    }
}
