//! Raw protobuf types of the ledger-transfer payloads.

use ibc_proto::cosmos::base::v1beta1::Coin;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PayloadCoins {
    #[prost(string, tag = "1")]
    pub src_addr: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub dest_addr: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "3")]
    pub coins: ::prost::alloc::vec::Vec<Coin>,
}

impl ::prost::Name for PayloadCoins {
    const NAME: &'static str = "PayloadCoins";
    const PACKAGE: &'static str = "ibc.applications.transfer.v1";
    fn full_name() -> ::prost::alloc::string::String {
        "ibc.applications.transfer.v1.PayloadCoins".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "/ibc.applications.transfer.v1.PayloadCoins".into()
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PayloadCoinsFail {
    #[prost(message, optional, tag = "1")]
    pub payload: ::core::option::Option<PayloadCoins>,
}

impl ::prost::Name for PayloadCoinsFail {
    const NAME: &'static str = "PayloadCoinsFail";
    const PACKAGE: &'static str = "ibc.applications.transfer.v1";
    fn full_name() -> ::prost::alloc::string::String {
        "ibc.applications.transfer.v1.PayloadCoinsFail".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "/ibc.applications.transfer.v1.PayloadCoinsFail".into()
    }
}

/// Type URL of [`PayloadCoins`].
pub const PAYLOAD_COINS_TYPE_URL: &str = "/ibc.applications.transfer.v1.PayloadCoins";

/// Type URL of [`PayloadCoinsFail`].
pub const PAYLOAD_COINS_FAIL_TYPE_URL: &str = "/ibc.applications.transfer.v1.PayloadCoinsFail";
