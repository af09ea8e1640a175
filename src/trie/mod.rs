/// The [`Trie`] view over a serialized buffer.
pub mod buffer;
/// Binary layout and byte order of serialized nodes.
pub mod format;
/// Letter gates: eligible-letter sets and tile racks.
pub mod gate;
/// Decoded node and edge views.
pub mod node;
/// Search thresholds and membership policy.
pub mod options;
/// Letter-gated enumeration and membership tests.
pub mod search;
/// Words returned by searches.
pub mod word;

pub use buffer::{decode_node, Trie};
pub use format::{ByteOrder, NodeLayout, TrieFormat};
pub use gate::{EligibleSet, LetterGate, Rack};
pub use node::{EdgeIter, TrieEdge, TrieNode, MAX_EDGES};
pub use options::{MembershipPolicy, SearchOptions, DEFAULT_LENGTH_FLOOR, DEFAULT_MAX_WORD_LEN};
pub use search::{contains_word, search_words, search_words_with_rack};
pub use word::Word;
