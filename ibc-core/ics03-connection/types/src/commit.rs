use core::fmt::{Display, Error as FmtError, Formatter};

use ibc_core_host_types::error::DecodingError;
use ibc_primitives::prelude::*;
use ibc_proto::Protobuf;

use crate::error::ConnectionError;
use crate::proto::Commit as RawCommit;

/// The state root of a remote chain, as committed by its consensus.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CommitmentRoot(Vec<u8>);

impl CommitmentRoot {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for CommitmentRoot {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl Display for CommitmentRoot {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// A checkpoint of a remote chain: its commitment root at a given height.
///
/// The first commit recorded for a chain is its root of trust; later
/// commits extend that trust to greater heights.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Commit {
    height: u64,
    root: CommitmentRoot,
}

impl Commit {
    /// Creates a commit, rejecting the zero height and an empty root.
    pub fn new(height: u64, root: CommitmentRoot) -> Result<Self, ConnectionError> {
        if height == 0 {
            return Err(ConnectionError::InvalidCommit {
                description: "commit height must be positive".to_string(),
            });
        }
        if root.is_empty() {
            return Err(ConnectionError::InvalidCommit {
                description: "commitment root must not be empty".to_string(),
            });
        }
        Ok(Self { height, root })
    }

    pub fn height(&self) -> u64 {
        self.height
    }

    pub fn root(&self) -> &CommitmentRoot {
        &self.root
    }

    /// Decodes a commit from its optional raw form inside a message.
    pub(crate) fn from_raw_field(
        raw: Option<RawCommit>,
        field: &str,
    ) -> Result<Self, ConnectionError> {
        raw.ok_or_else(|| DecodingError::missing_raw_data(format!("connection {field}")))?
            .try_into()
    }
}

impl Protobuf<RawCommit> for Commit {}

impl TryFrom<RawCommit> for Commit {
    type Error = ConnectionError;

    fn try_from(raw: RawCommit) -> Result<Self, Self::Error> {
        Self::new(raw.height, raw.root.into())
    }
}

impl From<Commit> for RawCommit {
    fn from(commit: Commit) -> Self {
        Self {
            height: commit.height,
            root: commit.root.into_vec(),
        }
    }
}
