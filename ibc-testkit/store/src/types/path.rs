use std::fmt::{Display, Formatter};

use ibc::core::host::types::path::{
    CommitHeightPath, CommitPath, OutgoingQueuePath, Path as IbcPath, SeqRecvPath,
};

/// A binary store key.
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Hash)]
pub struct Path(Vec<u8>);

impl Path {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn starts_with(&self, prefix: &Path) -> bool {
        self.0.starts_with(&prefix.0)
    }

    /// Returns this path extended with `suffix`.
    pub fn join(&self, suffix: &[u8]) -> Self {
        let mut key = self.0.clone();
        key.extend_from_slice(suffix);
        Self(key)
    }
}

impl From<Vec<u8>> for Path {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Path {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

/// Printable bytes are written as they are, the others as `\xNN` escapes.
impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for byte in &self.0 {
            if byte.is_ascii_graphic() {
                write!(f, "{}", char::from(*byte))?;
            } else {
                write!(f, "\\x{byte:02x}")?;
            }
        }
        Ok(())
    }
}

impl From<IbcPath> for Path {
    fn from(ibc_path: IbcPath) -> Self {
        Self(ibc_path.to_vec())
    }
}

macro_rules! impl_into_path_for {
    ($($path:ty),+) => {
        $(impl From<$path> for Path {
            fn from(ibc_path: $path) -> Self {
                Self(ibc_path.to_vec())
            }
        })+
    };
}

impl_into_path_for!(OutgoingQueuePath, SeqRecvPath, CommitHeightPath, CommitPath);
