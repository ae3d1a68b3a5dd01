//! Defines the binary keys under which the connection keeper and the channel
//! persist their state.
//!
//! The channel and the connection keeper each own a module-scoped store, so
//! their keys only have to be unique within that store:
//!
//! | store      | key                                    | value             |
//! |------------|----------------------------------------|-------------------|
//! | channel    | `{0x00, ty} ++ dest_chain`             | outgoing queue    |
//! | channel    | `{0x01, ty} ++ src_chain`              | next sequence     |
//! | connection | `{0x00} ++ src_chain`                  | last commit height|
//! | connection | `{0x01} ++ src_chain ++ height (BE)`   | commit            |

use core::fmt::{Display, Error as FmtError, Formatter};

use derive_more::From;
use ibc_primitives::prelude::*;

use crate::identifiers::{ChainId, DatagramType};

pub const OUTGOING_QUEUE_PREFIX: u8 = 0x00;
pub const NEXT_SEQ_RECV_PREFIX: u8 = 0x01;
pub const COMMIT_HEIGHT_PREFIX: u8 = 0x00;
pub const COMMIT_PREFIX: u8 = 0x01;

/// The store a [`Path`] belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Channel,
    Connection,
}

/// Any of the keys persisted by the IBC core.
#[derive(Clone, Debug, PartialEq, Eq, Hash, From)]
pub enum Path {
    OutgoingQueue(OutgoingQueuePath),
    SeqRecv(SeqRecvPath),
    CommitHeight(CommitHeightPath),
    Commit(CommitPath),
}

impl Path {
    pub fn store_key(&self) -> StoreKey {
        match self {
            Self::OutgoingQueue(_) | Self::SeqRecv(_) => StoreKey::Channel,
            Self::CommitHeight(_) | Self::Commit(_) => StoreKey::Connection,
        }
    }

    pub fn to_vec(&self) -> Vec<u8> {
        match self {
            Self::OutgoingQueue(path) => path.to_vec(),
            Self::SeqRecv(path) => path.to_vec(),
            Self::CommitHeight(path) => path.to_vec(),
            Self::Commit(path) => path.to_vec(),
        }
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        match self {
            Self::OutgoingQueue(path) => write!(f, "{path}"),
            Self::SeqRecv(path) => write!(f, "{path}"),
            Self::CommitHeight(path) => write!(f, "{path}"),
            Self::Commit(path) => write!(f, "{path}"),
        }
    }
}

/// Prefix of the outgoing queue holding datagrams of one type bound for
/// `dest_chain`. Queue entries are addressed below this prefix.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OutgoingQueuePath {
    pub datagram_type: DatagramType,
    pub dest_chain: ChainId,
}

impl OutgoingQueuePath {
    pub fn new(datagram_type: DatagramType, dest_chain: &ChainId) -> Self {
        Self {
            datagram_type,
            dest_chain: dest_chain.clone(),
        }
    }

    pub fn to_vec(&self) -> Vec<u8> {
        let mut key = vec![OUTGOING_QUEUE_PREFIX, self.datagram_type.as_byte()];
        key.extend_from_slice(self.dest_chain.as_bytes());
        key
    }
}

impl Display for OutgoingQueuePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "outgoing/{}/{}", self.datagram_type, self.dest_chain)
    }
}

/// Counter of the datagrams of one type already accepted from `src_chain`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SeqRecvPath {
    pub datagram_type: DatagramType,
    pub src_chain: ChainId,
}

impl SeqRecvPath {
    pub fn new(datagram_type: DatagramType, src_chain: &ChainId) -> Self {
        Self {
            datagram_type,
            src_chain: src_chain.clone(),
        }
    }

    pub fn to_vec(&self) -> Vec<u8> {
        let mut key = vec![NEXT_SEQ_RECV_PREFIX, self.datagram_type.as_byte()];
        key.extend_from_slice(self.src_chain.as_bytes());
        key
    }
}

impl Display for SeqRecvPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "nextSequenceRecv/{}/{}", self.datagram_type, self.src_chain)
    }
}

/// Last established commit height of the connection to a remote chain.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CommitHeightPath(pub ChainId);

impl CommitHeightPath {
    pub fn new(src_chain: &ChainId) -> Self {
        Self(src_chain.clone())
    }

    pub fn to_vec(&self) -> Vec<u8> {
        let mut key = vec![COMMIT_HEIGHT_PREFIX];
        key.extend_from_slice(self.0.as_bytes());
        key
    }
}

impl Display for CommitHeightPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "commitHeight/{}", self.0)
    }
}

/// A root of trust of a remote chain recorded at `height`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CommitPath {
    pub src_chain: ChainId,
    pub height: u64,
}

impl CommitPath {
    pub fn new(src_chain: &ChainId, height: u64) -> Self {
        Self {
            src_chain: src_chain.clone(),
            height,
        }
    }

    /// The key prefix shared by every commit of `src_chain`.
    pub fn prefix(src_chain: &ChainId) -> Vec<u8> {
        let mut key = vec![COMMIT_PREFIX];
        key.extend_from_slice(src_chain.as_bytes());
        key
    }

    pub fn to_vec(&self) -> Vec<u8> {
        let mut key = Self::prefix(&self.src_chain);
        key.extend_from_slice(&self.height.to_be_bytes());
        key
    }
}

impl Display for CommitPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "commits/{}/{}", self.src_chain, self.height)
    }
}
