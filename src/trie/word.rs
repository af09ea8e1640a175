use std::fmt;

use smallvec::SmallVec;

/// A word found by a search, one byte per letter exactly as stored in the trie.
///
/// Letters are bytes, not UTF-8 text, so a word is only a `str` when every
/// letter is ASCII. [`to_text`](Word::to_text) maps each byte to the `char`
/// with the same code point, which never fails and never merges two words.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(SmallVec<[u8; 32]>);

impl Word {
    pub(crate) fn from_path(path: &[u8]) -> Self {
        Word(SmallVec::from_slice(path))
    }

    /// The letters of the word.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Iterates over the letters of the word.
    #[inline]
    pub fn bytes(&self) -> std::iter::Copied<std::slice::Iter<'_, u8>> {
        self.0.iter().copied()
    }

    /// Number of letters.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the empty word.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The word as text, one `char` per letter byte (Latin-1).
    pub fn to_text(&self) -> String {
        self.bytes().map(char::from).collect()
    }

    /// Consumes the word, returning its letters.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0.into_vec()
    }
}

impl AsRef<[u8]> for Word {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<&[u8]> for Word {
    fn from(letters: &[u8]) -> Self {
        Word::from_path(letters)
    }
}

impl From<&str> for Word {
    fn from(letters: &str) -> Self {
        Word::from_path(letters.as_bytes())
    }
}

impl PartialEq<[u8]> for Word {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<str> for Word {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.to_text(), f)
    }
}
