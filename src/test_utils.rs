//! Builds trie buffers for tests.
//!
//! Nodes are written depth first: a node's header and a zeroed edge array are
//! written, then each child, then the edge array is patched with the child
//! offsets. Edges keep insertion order.

use crate::trie::TrieFormat;

#[derive(Debug, Default)]
pub(crate) struct TestNode {
    pub(crate) word: bool,
    pub(crate) children: Vec<(u8, TestNode)>,
}

impl TestNode {
    pub(crate) fn word() -> Self {
        TestNode {
            word: true,
            children: Vec::new(),
        }
    }

    pub(crate) fn from_words<'s>(words: impl IntoIterator<Item = &'s str>) -> Self {
        let mut root = TestNode::default();
        for word in words {
            root.add_word(word);
        }
        root
    }

    pub(crate) fn from_byte_words<'s>(words: impl IntoIterator<Item = &'s [u8]>) -> Self {
        let mut root = TestNode::default();
        for word in words {
            root.add_bytes(word);
        }
        root
    }

    pub(crate) fn add_word(&mut self, word: &str) {
        self.add_bytes(word.as_bytes());
    }

    pub(crate) fn add_bytes(&mut self, word: &[u8]) {
        let mut node = self;
        for &letter in word {
            let index = match node.children.iter().position(|(c, _)| *c == letter) {
                Some(index) => index,
                None => {
                    node.children.push((letter, TestNode::default()));
                    node.children.len() - 1
                }
            };
            node = &mut node.children[index].1;
        }
        node.word = true;
    }
}

pub(crate) fn encode(root: &TestNode, format: TrieFormat) -> Vec<u8> {
    let mut out = Vec::new();
    write_node(root, format, &mut out);
    out
}

fn write_node(node: &TestNode, format: TrieFormat, out: &mut Vec<u8>) -> usize {
    let offset = out.len();
    let edge_size = format.layout.edge_size();
    out.extend(header_bytes(format, node.word, node.children.len() as i32));
    let edges_at = out.len();
    out.resize(edges_at + node.children.len() * edge_size, 0);
    for (i, (letter, child)) in node.children.iter().enumerate() {
        let child_offset = write_node(child, format, out) as i64;
        let at = edges_at + i * edge_size;
        out[at..at + edge_size].copy_from_slice(&edge_bytes(format, *letter, child_offset));
    }
    offset
}

pub(crate) fn header_bytes(format: TrieFormat, word: bool, count: i32) -> Vec<u8> {
    let mut bytes = vec![0; format.layout.header_size()];
    bytes[0] = u8::from(word);
    let at = format.layout.count_pos();
    bytes[at..at + 4].copy_from_slice(&match format.byte_order {
        crate::trie::ByteOrder::Little => count.to_le_bytes(),
        crate::trie::ByteOrder::Big => count.to_be_bytes(),
    });
    bytes
}

pub(crate) fn edge_bytes(format: TrieFormat, letter: u8, child_offset: i64) -> Vec<u8> {
    let mut bytes = vec![0; format.layout.edge_size()];
    bytes[0] = letter;
    let at = format.layout.child_pos();
    bytes[at..at + 8].copy_from_slice(&match format.byte_order {
        crate::trie::ByteOrder::Little => child_offset.to_le_bytes(),
        crate::trie::ByteOrder::Big => child_offset.to_be_bytes(),
    });
    bytes
}
