//! # libtrie
//!
//! Read-only word lookups over a serialized prefix tree (trie), built for
//! word-game solvers: "which words can I spell with these letters?" and "is
//! this a word?".
//!
//! The trie lives in a single immutable byte buffer produced by some external
//! tool. Nodes are decoded in place, straight from the buffer, with every
//! offset bounds-checked, so a corrupt or truncated file produces an error
//! instead of garbage.
//!
//! ## Features
//!
//! - **Zero-copy**: [`Trie`](trie::Trie) is a `Copy` view over `&[u8]` and can
//!   be shared between threads
//! - **Letter-gated search**: enumerate words using only eligible letters
//!   ([`EligibleSet`](trie::EligibleSet)) or a rack of tiles used at most once
//!   each ([`Rack`](trie::Rack))
//! - **Membership tests**: complete-word or prefix semantics
//! - **Both layouts**: packed records or naturally aligned C-struct records,
//!   little- or big-endian
//!
//! ## Quick Start
//!
//! ```
//! use libtrie::trie::{contains_word, search_words, EligibleSet, SearchOptions, Trie};
//!
//! // root -c-> . -a-> . -t-> (word), packed little-endian records.
//! let mut bytes = Vec::new();
//! for (i, letter) in b"cat".iter().enumerate() {
//!     bytes.push(0);
//!     bytes.extend(1i32.to_le_bytes());
//!     bytes.push(*letter);
//!     bytes.extend((14 * (i as i64 + 1)).to_le_bytes());
//! }
//! bytes.push(1);
//! bytes.extend(0i32.to_le_bytes());
//!
//! let trie = Trie::new(&bytes);
//! assert!(contains_word(&trie, "cat").unwrap());
//! assert!(!contains_word(&trie, "ca").unwrap());
//!
//! // Only words longer than three letters are reported by default.
//! assert!(search_words(&trie, &EligibleSet::from("act")).unwrap().is_empty());
//! let options = SearchOptions::new().with_length_floor(2);
//! assert_eq!(trie.search_with(EligibleSet::from("act"), &options).unwrap(), ["cat"]);
//! ```
//!
//! To load a trie from disk, see [`TrieFile`](loader::TrieFile).

#![warn(missing_docs)]

/// Error type and result alias.
pub mod errors;
/// Reading or memory-mapping trie files.
pub mod loader;
/// Trie decoding, letter gates and searches.
pub mod trie;

#[cfg(test)]
pub(crate) mod test_utils;

pub use errors::{Result, TrieError};
pub use loader::TrieFile;
pub use trie::{contains_word, search_words, EligibleSet, Rack, SearchOptions, Trie, Word};

#[cfg(test)]
mod test {
    use super::test_utils::{encode, TestNode};
    use super::trie::{search_words, EligibleSet, Trie, TrieFormat};

    const BEE: [&str; 12] = [
        "bake", "baked", "baker", "cake", "caked", "fake", "lake", "able", "table", "bleak",
        "beak", "kab",
    ];

    #[test]
    fn walk_nodes() {
        let bytes = encode(&TestNode::from_words(["test", "tester", "wtest"]), TrieFormat::PACKED);
        let trie = Trie::new(&bytes);
        let root = trie.root().unwrap();

        let n = root.child(b't').unwrap().unwrap();
        assert!(!n.is_word());

        let n = n.child(b'e').unwrap().unwrap();
        assert!(!n.is_word());

        let n = n.child(b's').unwrap().unwrap();
        assert!(!n.is_word());

        let n = n.child(b't').unwrap().unwrap();
        assert!(n.is_word());

        let n = n.child(b'e').unwrap().unwrap();
        assert!(!n.is_word());

        let n = n.child(b'r').unwrap().unwrap();
        assert!(n.is_word());

        assert!(n.child(b't').unwrap().is_none());
    }

    #[test]
    fn spelling_bee() {
        let bytes = encode(&TestNode::from_words(BEE), TrieFormat::ALIGNED);
        let trie = Trie::with_format(&bytes, TrieFormat::ALIGNED);
        let words = search_words(&trie, &EligibleSet::from("abdekrl")).unwrap();
        assert_eq!(words, ["bake", "baked", "baker", "bleak", "beak", "lake", "able"]);
        for word in BEE {
            assert!(trie.contains_word(word).unwrap(), "{word}");
        }
        assert!(!trie.contains_word("bak").unwrap());
        assert!(!trie.contains_word("tables").unwrap());
    }
}
