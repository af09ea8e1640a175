//! Binary layout of serialized trie nodes.
//!
//! A node is a header (`completes_word` flag + edge count) followed directly by
//! its edges, each a letter byte plus the absolute offset of the child node.
//! There is no file header: the root node starts at offset 0.

/// Field placement of node headers and edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NodeLayout {
    /// Densely packed records.
    ///
    /// Header: `u8` flag, `i32` edge count (5 bytes).
    /// Edge: `u8` letter, `i64` child offset (9 bytes).
    #[default]
    Packed,
    /// Naturally aligned records, as written by a producer that dumps C structs
    /// (or Python `struct` in native mode) on an LP64 platform.
    ///
    /// Header: `u8` flag, 3 padding bytes, `i32` edge count (8 bytes).
    /// Edge: `u8` letter, 7 padding bytes, `i64` child offset (16 bytes).
    Aligned,
}

impl NodeLayout {
    /// Size of a node header in bytes.
    #[inline]
    pub const fn header_size(self) -> usize {
        match self {
            NodeLayout::Packed => 5,
            NodeLayout::Aligned => 8,
        }
    }

    /// Size of one edge record in bytes.
    #[inline]
    pub const fn edge_size(self) -> usize {
        match self {
            NodeLayout::Packed => 9,
            NodeLayout::Aligned => 16,
        }
    }

    /// Position of the edge count inside the header.
    #[inline]
    pub(crate) const fn count_pos(self) -> usize {
        match self {
            NodeLayout::Packed => 1,
            NodeLayout::Aligned => 4,
        }
    }

    /// Position of the child offset inside an edge record.
    #[inline]
    pub(crate) const fn child_pos(self) -> usize {
        match self {
            NodeLayout::Packed => 1,
            NodeLayout::Aligned => 8,
        }
    }
}

/// Byte order of the multi-byte integers in the buffer.
///
/// The format carries no endianness marker; little-endian is assumed unless
/// the caller says otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Least significant byte first.
    #[default]
    Little,
    /// Most significant byte first.
    Big,
}

impl ByteOrder {
    #[inline]
    pub(crate) fn read_i32(self, bytes: [u8; 4]) -> i32 {
        match self {
            ByteOrder::Little => i32::from_le_bytes(bytes),
            ByteOrder::Big => i32::from_be_bytes(bytes),
        }
    }

    #[inline]
    pub(crate) fn read_i64(self, bytes: [u8; 8]) -> i64 {
        match self {
            ByteOrder::Little => i64::from_le_bytes(bytes),
            ByteOrder::Big => i64::from_be_bytes(bytes),
        }
    }
}

/// Complete description of how a trie buffer is encoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TrieFormat {
    /// Record layout.
    pub layout: NodeLayout,
    /// Integer byte order.
    pub byte_order: ByteOrder,
}

impl TrieFormat {
    /// Packed little-endian records.
    pub const PACKED: TrieFormat = TrieFormat {
        layout: NodeLayout::Packed,
        byte_order: ByteOrder::Little,
    };

    /// Aligned little-endian records, the output of the reference producer on x86-64.
    pub const ALIGNED: TrieFormat = TrieFormat {
        layout: NodeLayout::Aligned,
        byte_order: ByteOrder::Little,
    };

    /// Creates a format from a layout and a byte order.
    pub const fn new(layout: NodeLayout, byte_order: ByteOrder) -> Self {
        TrieFormat { layout, byte_order }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn record_sizes() {
        assert_eq!(NodeLayout::Packed.header_size(), 5);
        assert_eq!(NodeLayout::Packed.edge_size(), 9);
        assert_eq!(NodeLayout::Aligned.header_size(), 8);
        assert_eq!(NodeLayout::Aligned.edge_size(), 16);
    }

    #[test]
    fn byte_orders() {
        let bytes = [0x01, 0x00, 0x00, 0x00];
        assert_eq!(ByteOrder::Little.read_i32(bytes), 1);
        assert_eq!(ByteOrder::Big.read_i32(bytes), 0x0100_0000);
        assert_eq!(ByteOrder::Big.read_i64([0, 0, 0, 0, 0, 0, 1, 0]), 256);
        assert_eq!(ByteOrder::Little.read_i64([0xff; 8]), -1);
    }

    #[test]
    fn default_is_packed_little_endian() {
        assert_eq!(TrieFormat::default(), TrieFormat::PACKED);
    }
}
