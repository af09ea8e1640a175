use std::sync::atomic::{AtomicBool, Ordering};

use hashbrown::HashSet;
use smallvec::SmallVec;

use crate::errors::{Result, TrieError};

use super::buffer::Trie;
use super::gate::{EligibleSet, LetterGate, Rack};
use super::node::TrieNode;
use super::options::{MembershipPolicy, SearchOptions};
use super::word::Word;

/// Letters along the current search path.
type WordPath = SmallVec<[u8; 32]>;

struct Frame<'a> {
    node: TrieNode<'a>,
    next_edge: usize,
}

/// Depth-first walk state for one search query.
struct Walk<'a, 'o, G: LetterGate> {
    trie: Trie<'a>,
    gate: G,
    options: &'o SearchOptions,
    cancel: Option<&'o AtomicBool>,
    path: WordPath,
    stack: Vec<Frame<'a>>,
    seen: Option<HashSet<WordPath>>,
    words: Vec<Word>,
}

impl<'a, 'o, G: LetterGate> Walk<'a, 'o, G> {
    fn new(
        trie: Trie<'a>,
        gate: G,
        options: &'o SearchOptions,
        cancel: Option<&'o AtomicBool>,
    ) -> Self {
        Walk {
            trie,
            gate,
            options,
            cancel,
            path: WordPath::new(),
            stack: Vec::with_capacity(options.max_word_len.saturating_add(1).min(64)),
            seen: options.dedup.then(HashSet::new),
            words: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Vec<Word>> {
        match self.walk() {
            Ok(()) => Ok(self.words),
            Err(err) => {
                // Hand every consumed letter back so a borrowed gate is left as it was.
                while let Some(letter) = self.path.pop() {
                    self.gate.leave(letter);
                }
                Err(err)
            }
        }
    }

    fn walk(&mut self) -> Result<()> {
        let root = self.trie.root()?;
        self.visit(root)?;

        while let Some(frame) = self.stack.last_mut() {
            let node = frame.node;
            let Some(edge) = node.edge(frame.next_edge) else {
                self.stack.pop();
                if let Some(letter) = self.path.pop() {
                    self.gate.leave(letter);
                }
                continue;
            };
            frame.next_edge += 1;

            if !self.gate.enter(edge.letter) {
                continue;
            }
            if self.path.len() >= self.options.max_word_len {
                self.gate.leave(edge.letter);
                return Err(TrieError::InputTooLong {
                    len: self.path.len() + 1,
                    max: self.options.max_word_len,
                });
            }
            self.path.push(edge.letter);
            let child = node.follow(edge)?;
            self.visit(child)?;
        }
        Ok(())
    }

    fn visit(&mut self, node: TrieNode<'a>) -> Result<()> {
        if self.cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            return Err(TrieError::Cancelled);
        }
        if node.is_word() && self.path.len() > self.options.length_floor {
            self.collect();
        }
        self.stack.push(Frame { node, next_edge: 0 });
        Ok(())
    }

    fn collect(&mut self) {
        if let Some(seen) = &mut self.seen {
            if !seen.insert(self.path.clone()) {
                return;
            }
        }
        self.words.push(Word::from_path(&self.path));
    }
}

impl<'a> Trie<'a> {
    /// Collects every word reachable through edges accepted by `gate`.
    ///
    /// Words are returned in depth-first pre-order, following edges in stored
    /// order. Only words longer than [`SearchOptions::length_floor`] are
    /// reported, although shorter paths are still walked through.
    ///
    /// # Errors
    ///
    /// Any decoding error aborts the whole search, as does a path growing
    /// beyond [`SearchOptions::max_word_len`]. The gate has seen a matching
    /// [`leave`](LetterGate::leave) for every successful
    /// [`enter`](LetterGate::enter) by the time this returns, error or not.
    pub fn search_with<G: LetterGate>(
        &self,
        gate: G,
        options: &SearchOptions,
    ) -> Result<Vec<Word>> {
        self.search_inner(gate, options, None)
    }

    /// Like [`search_with`](Trie::search_with), but fails with
    /// [`TrieError::Cancelled`] once `cancel` is set. The flag is checked
    /// before every node is visited.
    pub fn search_cancellable<G: LetterGate>(
        &self,
        gate: G,
        options: &SearchOptions,
        cancel: &AtomicBool,
    ) -> Result<Vec<Word>> {
        self.search_inner(gate, options, Some(cancel))
    }

    fn search_inner<G: LetterGate>(
        &self,
        gate: G,
        options: &SearchOptions,
        cancel: Option<&AtomicBool>,
    ) -> Result<Vec<Word>> {
        Walk::new(*self, gate, options, cancel).run()
    }

    /// Tests whether `word` is in the trie under the configured membership policy.
    ///
    /// # Errors
    ///
    /// [`TrieError::InputTooLong`] if `word` is longer than
    /// [`SearchOptions::max_word_len`], or any decoding error met on the path.
    pub fn contains_word_with(
        &self,
        word: impl AsRef<[u8]>,
        options: &SearchOptions,
    ) -> Result<bool> {
        let word = word.as_ref();
        if word.len() > options.max_word_len {
            return Err(TrieError::InputTooLong {
                len: word.len(),
                max: options.max_word_len,
            });
        }
        Ok(match self.walk_path(word)? {
            None => false,
            Some(node) => match options.membership {
                MembershipPolicy::CompleteWord => node.is_word(),
                MembershipPolicy::Prefix => true,
            },
        })
    }

    /// True if `word` is a complete word in the trie.
    pub fn contains_word(&self, word: impl AsRef<[u8]>) -> Result<bool> {
        self.contains_word_with(word, &SearchOptions::default())
    }

    /// True if some word in the trie starts with `prefix`.
    pub fn has_prefix(&self, prefix: impl AsRef<[u8]>) -> Result<bool> {
        let options = SearchOptions::default().with_membership(MembershipPolicy::Prefix);
        self.contains_word_with(prefix, &options)
    }

    /// Follows `path` from the root, returning the node it ends at, or `None`
    /// if some letter has no edge.
    pub fn walk_path(&self, path: &[u8]) -> Result<Option<TrieNode<'a>>> {
        let mut node = self.root()?;
        for &letter in path {
            match node.child(letter)? {
                Some(child) => node = child,
                None => return Ok(None),
            }
        }
        Ok(Some(node))
    }
}

/// Finds every word longer than three letters spelled only with `eligible` letters.
///
/// Letters may repeat freely. See [`Trie::search_with`] for other thresholds and gates.
pub fn search_words(trie: &Trie<'_>, eligible: &EligibleSet) -> Result<Vec<Word>> {
    trie.search_with(*eligible, &SearchOptions::default())
}

/// Finds every word longer than three letters that can be laid from `rack`,
/// using each tile at most once.
pub fn search_words_with_rack(trie: &Trie<'_>, rack: &Rack) -> Result<Vec<Word>> {
    trie.search_with(rack.clone(), &SearchOptions::default())
}

/// True if `word` is a complete word in the trie.
pub fn contains_word(trie: &Trie<'_>, word: impl AsRef<[u8]>) -> Result<bool> {
    trie.contains_word(word)
}
