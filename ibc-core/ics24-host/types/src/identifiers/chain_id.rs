use core::fmt::{Display, Error as FmtError, Formatter};
use core::str::FromStr;

use ibc_primitives::prelude::*;

use crate::error::IdentifierError;
use crate::validate::{validate_identifier_chars, validate_identifier_length};

/// Maximum length of a chain identifier.
pub const CHAIN_ID_MAX_LENGTH: u64 = 64;

/// Defines the domain type for chain identifiers.
///
/// The identifier is used both to address a remote chain in the connection
/// and channel stores and, as raw bytes, as part of their keys.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChainId(String);

impl ChainId {
    /// Creates a new `ChainId` after checking it contains only the characters
    /// allowed by ICS-24 and is between 1 and 64 characters long.
    ///
    /// ```
    /// use ibc_core_host_types::identifiers::ChainId;
    ///
    /// let id = ChainId::new("chainA").unwrap();
    /// assert_eq!(id.as_str(), "chainA");
    /// assert!(ChainId::new("chain/A").is_err());
    /// ```
    pub fn new(chain_id: &str) -> Result<Self, IdentifierError> {
        Self::from_str(chain_id)
    }

    /// Get a reference to the underlying string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The identifier bytes used inside store keys.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl FromStr for ChainId {
    type Err = IdentifierError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        validate_identifier_length(id, 1, CHAIN_ID_MAX_LENGTH)?;
        validate_identifier_chars(id)?;
        Ok(Self(id.to_string()))
    }
}

impl TryFrom<String> for ChainId {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(value.as_str())
    }
}

impl From<ChainId> for String {
    fn from(chain_id: ChainId) -> String {
        chain_id.0
    }
}

impl AsRef<str> for ChainId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Display for ChainId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", self.0)
    }
}
