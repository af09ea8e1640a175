use crate::errors::{Result, TrieError};

use super::buffer::Trie;

/// Upper bound on the edge count of a node.
///
/// Letters are single bytes, so a well-formed node never has more than one
/// outgoing edge per byte value.
pub const MAX_EDGES: usize = 256;

/// One outgoing edge of a node, as stored in the buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TrieEdge {
    /// The letter labelling this edge.
    pub letter: u8,
    /// Absolute byte offset of the child node, exactly as stored.
    ///
    /// Not validated until the child is decoded.
    pub child_offset: i64,
}

/// An iterator over the edges of a [`TrieNode`], in stored order.
#[derive(Clone)]
pub struct EdgeIter<'a> {
    node: TrieNode<'a>,
    index: usize,
}

impl Iterator for EdgeIter<'_> {
    type Item = TrieEdge;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let edge = self.node.edge(self.index)?;
        self.index += 1;
        Some(edge)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.node.edge_count().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for EdgeIter<'_> {}

/// A decoded view of the node stored at some offset of a [`Trie`].
///
/// Decoding validates the header and checks that the whole edge array lies
/// inside the buffer, so reading edges afterwards cannot fail. Child offsets
/// are only checked when the child itself is decoded.
#[derive(Clone, Copy, Debug)]
pub struct TrieNode<'a> {
    trie: Trie<'a>,
    offset: usize,
    word: bool,
    edges: &'a [u8],
}

impl<'a> TrieNode<'a> {
    /// Decodes the node at `offset`.
    ///
    /// # Errors
    ///
    /// * [`TrieError::OutOfBounds`] if `offset` is negative or the header or
    ///   edge array extends past the end of the buffer.
    /// * [`TrieError::MalformedEdgeCount`] if the stored count is negative or
    ///   greater than [`MAX_EDGES`].
    pub(crate) fn decode(trie: Trie<'a>, offset: i64) -> Result<Self> {
        let bytes = trie.bytes();
        let format = trie.format();
        let header_size = format.layout.header_size();

        let out_of_bounds = |needed| TrieError::out_of_bounds(offset, needed, bytes.len());
        let start = usize::try_from(offset).map_err(|_| out_of_bounds(header_size))?;
        let header = start
            .checked_add(header_size)
            .and_then(|end| bytes.get(start..end))
            .ok_or_else(|| out_of_bounds(header_size))?;

        let count = format
            .byte_order
            .read_i32(read_array(header, format.layout.count_pos()));
        let edge_count = usize::try_from(count)
            .ok()
            .filter(|&n| n <= MAX_EDGES)
            .ok_or(TrieError::MalformedEdgeCount {
                offset: start,
                count: i64::from(count),
            })?;

        let needed = header_size + edge_count * format.layout.edge_size();
        let edges = start
            .checked_add(needed)
            .and_then(|end| bytes.get(start + header_size..end))
            .ok_or_else(|| out_of_bounds(needed))?;

        Ok(TrieNode {
            trie,
            offset: start,
            word: header[0] != 0,
            edges,
        })
    }

    /// Byte offset of this node in the buffer.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// True if the path leading to this node spells a complete word.
    #[inline]
    pub fn is_word(&self) -> bool {
        self.word
    }

    /// Returns the number of outgoing edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len() / self.trie.format().layout.edge_size()
    }

    /// Gets the edge at the specified index.
    ///
    /// Returns `None` if the index is out of bounds.
    #[inline]
    pub fn edge(&self, index: usize) -> Option<TrieEdge> {
        let format = self.trie.format();
        let size = format.layout.edge_size();
        let record = self.edges.get(index * size..(index + 1) * size)?;
        Some(TrieEdge {
            letter: record[0],
            child_offset: format
                .byte_order
                .read_i64(read_array(record, format.layout.child_pos())),
        })
    }

    /// Returns an iterator over all edges of this node.
    #[inline]
    pub fn edges(&self) -> EdgeIter<'a> {
        EdgeIter {
            node: *self,
            index: 0,
        }
    }

    /// Returns the child offset stored for `letter`, or `None` if no such edge exists.
    ///
    /// Edges are not sorted, so this is a linear scan. If a corrupt node lists a
    /// letter twice, the first edge wins.
    #[inline]
    pub fn get(&self, letter: u8) -> Option<i64> {
        let size = self.trie.format().layout.edge_size();
        let index = self
            .edges
            .chunks_exact(size)
            .position(|record| record[0] == letter)?;
        self.edge(index).map(|edge| edge.child_offset)
    }

    /// Decodes the child reached through `letter`.
    ///
    /// Returns `Ok(None)` when the node has no edge for `letter`.
    pub fn child(&self, letter: u8) -> Result<Option<TrieNode<'a>>> {
        self.get(letter)
            .map(|offset| self.trie.node(offset))
            .transpose()
    }

    /// Decodes the node an edge points to.
    #[inline]
    pub fn follow(&self, edge: TrieEdge) -> Result<TrieNode<'a>> {
        self.trie.node(edge.child_offset)
    }
}

/// Copies `N` bytes starting at `at`. Callers have already checked the length.
#[inline]
fn read_array<const N: usize>(bytes: &[u8], at: usize) -> [u8; N] {
    let mut out = [0; N];
    out.copy_from_slice(&bytes[at..at + N]);
    out
}
