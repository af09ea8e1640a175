//! Error types returned by trie decoding, searching and loading.

/// Result type used throughout the crate, defaulting to [`TrieError`].
pub type Result<T, E = TrieError> = std::result::Result<T, E>;

/// Errors that can occur while reading or querying a serialized trie.
///
/// Every structural error aborts the query that hit it. A query that returns
/// `Ok` with an empty result found nothing; a query that returns `Err` did not
/// finish.
#[derive(Debug, thiserror::Error)]
pub enum TrieError {
    /// A node offset, node header, or edge array lies (partly) outside the buffer.
    ///
    /// Usually means the trie file is truncated or corrupt.
    #[error("trie record at offset {offset} needs {needed} bytes but the buffer is {len} bytes long")]
    OutOfBounds {
        /// Offset of the record that could not be read.
        offset: i64,
        /// Number of bytes the record needs starting at `offset`.
        needed: usize,
        /// Length of the buffer.
        len: usize,
    },

    /// A node header stores a negative or implausibly large edge count.
    #[error("node at offset {offset} has a malformed edge count of {count}")]
    MalformedEdgeCount {
        /// Offset of the node.
        offset: usize,
        /// The edge count as stored.
        count: i64,
    },

    /// A word, or the path accumulated during a search, is longer than allowed.
    #[error("word of length {len} exceeds the maximum supported length of {max}")]
    InputTooLong {
        /// Length that was reached or supplied.
        len: usize,
        /// Configured maximum.
        max: usize,
    },

    /// The caller raised the cancellation flag while a search was running.
    #[error("search was cancelled")]
    Cancelled,

    /// Reading the trie file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TrieError {
    pub(crate) fn out_of_bounds(offset: i64, needed: usize, len: usize) -> Self {
        TrieError::OutOfBounds {
            offset,
            needed,
            len,
        }
    }

    /// True for errors caused by a corrupt or truncated buffer.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            TrieError::OutOfBounds { .. } | TrieError::MalformedEdgeCount { .. }
        )
    }
}
