use ibc_primitives::prelude::*;

/// The position of a datagram within the ordered stream of one datagram type
/// sent from one chain to another.
///
/// The sender assigns it as the index the datagram was queued at, and the
/// receiver accepts datagrams only in increasing sequence order.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::From)]
pub struct Sequence(u64);

impl Sequence {
    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// The sequence expected after this one.
    pub fn increment(&self) -> Sequence {
        Sequence(self.0 + 1)
    }
}

impl From<Sequence> for u64 {
    fn from(seq: Sequence) -> u64 {
        seq.0
    }
}

impl core::fmt::Display for Sequence {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
