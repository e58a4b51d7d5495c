//! Error types shared by the whole crate.

use thiserror::Error;

/// Everything that can go wrong while mapping a Parquet file.
///
/// Magic-number mismatches and top-level I/O failures are fatal; per-page
/// decode failures are downgraded to warnings by the walker and the
/// affected bytes end up in `unknown` segments instead.
#[derive(Debug, Error)]
pub enum ParquetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing PAR1 header")]
    BadHeader,
    #[error("missing PAR1 footer")]
    BadFooter,
    #[error("decode error at offset {offset}: {reason}")]
    Decode { offset: u64, reason: String },
    #[error("bad argument: {0}")]
    BadArgument(String),
}

impl ParquetError {
    /// Build a decode error at the given offset.
    pub fn decode(offset: u64, reason: impl Into<String>) -> Self {
        ParquetError::Decode {
            offset,
            reason: reason.into(),
        }
    }

    /// Rebase a decode error whose offset is relative to some structure
    /// start onto an absolute file offset. Other variants pass through.
    pub fn rebase(self, base: u64) -> Self {
        match self {
            ParquetError::Decode { offset, reason } => ParquetError::Decode {
                offset: base + offset,
                reason,
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, ParquetError>;
