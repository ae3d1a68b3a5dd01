//! Defines the coin denomination type.
use core::fmt::{Display, Error as FmtError, Formatter};
use core::str::FromStr;

use ibc_primitives::prelude::*;

use crate::error::TokenTransferError;

const DENOM_MIN_LENGTH: usize = 3;
const DENOM_MAX_LENGTH: usize = 16;

/// The name of a coin, e.g. `atom`.
///
/// A denomination is 3 to 16 characters long, starts with a lowercase letter
/// and continues with lowercase letters or digits.
#[cfg_attr(feature = "borsh", derive(borsh::BorshSerialize))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Denom(String);

#[cfg(feature = "borsh")]
impl borsh::BorshDeserialize for Denom {
    fn deserialize_reader<R: borsh::io::Read>(reader: &mut R) -> borsh::io::Result<Self> {
        let raw = <String as borsh::BorshDeserialize>::deserialize_reader(reader)?;
        raw.parse()
            .map_err(|e: TokenTransferError| {
                borsh::io::Error::new(borsh::io::ErrorKind::InvalidData, e.to_string())
            })
    }
}

impl Denom {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Denom {
    type Err = TokenTransferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let well_formed = (DENOM_MIN_LENGTH..=DENOM_MAX_LENGTH).contains(&s.len())
            && chars.next().is_some_and(|c| c.is_ascii_lowercase())
            && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit());

        if !well_formed {
            return Err(TokenTransferError::InvalidDenom {
                denom: s.to_string(),
            });
        }

        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for Denom {
    type Error = TokenTransferError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Denom> for String {
    fn from(denom: Denom) -> Self {
        denom.0
    }
}

impl Display for Denom {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", self.0)
    }
}
