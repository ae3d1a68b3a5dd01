//! Raw protobuf types of the connection keeper.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Commit {
    #[prost(uint64, tag = "1")]
    pub height: u64,
    #[prost(bytes = "vec", tag = "2")]
    pub root: ::prost::alloc::vec::Vec<u8>,
}

impl ::prost::Name for Commit {
    const NAME: &'static str = "Commit";
    const PACKAGE: &'static str = "ibc.core.connection.v1";
    fn full_name() -> ::prost::alloc::string::String {
        "ibc.core.connection.v1.Commit".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "/ibc.core.connection.v1.Commit".into()
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgOpenConnection {
    #[prost(string, tag = "1")]
    pub src_chain: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub root_of_trust: ::core::option::Option<Commit>,
    #[prost(string, tag = "3")]
    pub signer: ::prost::alloc::string::String,
}

impl ::prost::Name for MsgOpenConnection {
    const NAME: &'static str = "MsgOpenConnection";
    const PACKAGE: &'static str = "ibc.core.connection.v1";
    fn full_name() -> ::prost::alloc::string::String {
        "ibc.core.connection.v1.MsgOpenConnection".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "/ibc.core.connection.v1.MsgOpenConnection".into()
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgUpdateConnection {
    #[prost(string, tag = "1")]
    pub src_chain: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub commit: ::core::option::Option<Commit>,
    #[prost(string, tag = "3")]
    pub signer: ::prost::alloc::string::String,
}

impl ::prost::Name for MsgUpdateConnection {
    const NAME: &'static str = "MsgUpdateConnection";
    const PACKAGE: &'static str = "ibc.core.connection.v1";
    fn full_name() -> ::prost::alloc::string::String {
        "ibc.core.connection.v1.MsgUpdateConnection".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "/ibc.core.connection.v1.MsgUpdateConnection".into()
    }
}
