use ibc::apps::transfer::types::{Coins, PayloadCoins, PayloadCoinsFail};
use ibc::core::primitives::Signer;
use typed_builder::TypedBuilder;

/// Configuration of the `PayloadCoins` type for building dummy transfers.
#[derive(TypedBuilder, Debug)]
#[builder(build_method(into = PayloadCoins))]
pub struct PayloadCoinsConfig {
    #[builder(default = Signer::from("addrX"))]
    pub src_addr: Signer,
    #[builder(default = Signer::from("addrY"))]
    pub dest_addr: Signer,
    #[builder(default = dummy_coins("10foo"))]
    pub coins: Coins,
}

impl From<PayloadCoinsConfig> for PayloadCoins {
    fn from(config: PayloadCoinsConfig) -> Self {
        PayloadCoins {
            src_addr: config.src_addr,
            dest_addr: config.dest_addr,
            coins: config.coins,
        }
    }
}

/// Returns dummy `Coins` parsed from `coins`, for testing purposes only!
pub fn dummy_coins(coins: &str) -> Coins {
    coins.parse().expect("Never fails")
}

/// Returns the dummy transfer of `coins` from `addrX` to `addrY`, for testing purposes only!
pub fn dummy_payload_coins(coins: &str) -> PayloadCoins {
    PayloadCoinsConfig::builder().coins(dummy_coins(coins)).build()
}

/// Returns the failure receipt of [`dummy_payload_coins`], for testing purposes only!
pub fn dummy_payload_coins_fail(coins: &str) -> PayloadCoinsFail {
    PayloadCoinsFail(dummy_payload_coins(coins))
}
