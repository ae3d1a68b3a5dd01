use core::fmt::Display;

use ibc_proto::google::protobuf::Any;
use ibc_proto::Protobuf;

use crate::prelude::*;

/// Types that implement this trait are able to be converted to
/// a raw Protobuf `Any` type.
pub trait ToProto: Protobuf<Self::Proto>
where
    Self::Proto: From<Self> + prost::Message + prost::Name + Default,
    <Self as TryFrom<Self::Proto>>::Error: Display,
{
    type Proto;

    /// The type URL under which the raw type is packed into an `Any`.
    fn type_url() -> String {
        <Self::Proto as prost::Name>::type_url()
    }

    fn to_any(self) -> Any {
        Any {
            type_url: Self::type_url(),
            value: self.encode_vec(),
        }
    }
}
