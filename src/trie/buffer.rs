use crate::errors::Result;

use super::format::TrieFormat;
use super::node::TrieNode;

/// A read-only view of a serialized trie.
///
/// `Trie` only borrows the buffer, so it is `Copy` and can be shared freely
/// between threads. The root node is always at offset 0.
#[derive(Clone, Copy, Debug)]
pub struct Trie<'a> {
    bytes: &'a [u8],
    format: TrieFormat,
}

impl<'a> Trie<'a> {
    /// Wraps a buffer in the default (packed, little-endian) format.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self::with_format(bytes, TrieFormat::default())
    }

    /// Wraps a buffer encoded in `format`.
    pub fn with_format(bytes: &'a [u8], format: TrieFormat) -> Self {
        Trie { bytes, format }
    }

    /// The underlying buffer.
    #[inline]
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// The encoding this view decodes with.
    #[inline]
    pub fn format(&self) -> TrieFormat {
        self.format
    }

    /// Decodes the root node.
    #[inline]
    pub fn root(&self) -> Result<TrieNode<'a>> {
        self.node(0)
    }

    /// Decodes the node at `offset`.
    ///
    /// Offsets are signed because that is how edges store them; a negative
    /// offset is reported as out of bounds.
    #[inline]
    pub fn node(&self, offset: i64) -> Result<TrieNode<'a>> {
        TrieNode::decode(*self, offset)
    }
}

/// Decodes the node at `offset` of a default-format buffer.
pub fn decode_node(buffer: &[u8], offset: i64) -> Result<TrieNode<'_>> {
    Trie::new(buffer).node(offset)
}
