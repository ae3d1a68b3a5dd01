//! Raw protobuf types of the datagram channel.

use ibc_proto::google::protobuf::Any;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Header {
    #[prost(string, tag = "1")]
    pub src_chain: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub dest_chain: ::prost::alloc::string::String,
}

impl ::prost::Name for Header {
    const NAME: &'static str = "Header";
    const PACKAGE: &'static str = "ibc.core.channel.v1";
    fn full_name() -> ::prost::alloc::string::String {
        "ibc.core.channel.v1.Header".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "/ibc.core.channel.v1.Header".into()
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Datagram {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<Header>,
    /// 0 for packets, 1 for receipts
    #[prost(uint32, tag = "2")]
    pub datagram_type: u32,
    #[prost(message, optional, tag = "3")]
    pub payload: ::core::option::Option<Any>,
}

impl ::prost::Name for Datagram {
    const NAME: &'static str = "Datagram";
    const PACKAGE: &'static str = "ibc.core.channel.v1";
    fn full_name() -> ::prost::alloc::string::String {
        "ibc.core.channel.v1.Datagram".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "/ibc.core.channel.v1.Datagram".into()
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Proof {
    #[prost(uint64, tag = "1")]
    pub height: u64,
    #[prost(uint64, tag = "2")]
    pub sequence: u64,
}

impl ::prost::Name for Proof {
    const NAME: &'static str = "Proof";
    const PACKAGE: &'static str = "ibc.core.channel.v1";
    fn full_name() -> ::prost::alloc::string::String {
        "ibc.core.channel.v1.Proof".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "/ibc.core.channel.v1.Proof".into()
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgSend {
    #[prost(string, tag = "1")]
    pub dest_chain: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub payload: ::core::option::Option<Any>,
}

impl ::prost::Name for MsgSend {
    const NAME: &'static str = "MsgSend";
    const PACKAGE: &'static str = "ibc.core.channel.v1";
    fn full_name() -> ::prost::alloc::string::String {
        "ibc.core.channel.v1.MsgSend".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "/ibc.core.channel.v1.MsgSend".into()
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgReceive {
    #[prost(message, optional, tag = "1")]
    pub datagram: ::core::option::Option<Datagram>,
    #[prost(message, optional, tag = "2")]
    pub proof: ::core::option::Option<Proof>,
    #[prost(string, tag = "3")]
    pub signer: ::prost::alloc::string::String,
}

impl ::prost::Name for MsgReceive {
    const NAME: &'static str = "MsgReceive";
    const PACKAGE: &'static str = "ibc.core.channel.v1";
    fn full_name() -> ::prost::alloc::string::String {
        "ibc.core.channel.v1.MsgReceive".into()
    }
    fn type_url() -> ::prost::alloc::string::String {
        "/ibc.core.channel.v1.MsgReceive".into()
    }
}
