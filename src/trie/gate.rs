//! Letter gates decide which edges a search may descend through.
//!
//! [`EligibleSet`] is pure membership: an eligible letter can be reused any
//! number of times along one path. [`Rack`] is a multiset of tiles: every
//! descent consumes one tile and backtracking puts it back.

use std::fmt;

use hashbrown::HashMap;

/// Decides, edge by edge, whether a search may descend.
///
/// A search calls [`enter`](LetterGate::enter) before following an edge and,
/// only if that returned `true`, calls [`leave`](LetterGate::leave) with the
/// same letter once the subtree below the edge is exhausted. Calls nest like
/// the path itself.
pub trait LetterGate {
    /// Returns `true` if the search may descend through `letter`.
    fn enter(&mut self, letter: u8) -> bool;

    /// Undoes the effect of a successful [`enter`](LetterGate::enter).
    fn leave(&mut self, letter: u8);
}

impl<G: LetterGate + ?Sized> LetterGate for &mut G {
    #[inline]
    fn enter(&mut self, letter: u8) -> bool {
        (**self).enter(letter)
    }

    #[inline]
    fn leave(&mut self, letter: u8) {
        (**self).leave(letter)
    }
}

/// A set of letters, one bit per byte value.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EligibleSet {
    bits: [u64; 4],
}

impl EligibleSet {
    /// Creates an empty set.
    pub const fn new() -> Self {
        EligibleSet { bits: [0; 4] }
    }

    /// A set containing every byte value. Searching with it enumerates the
    /// whole trie.
    pub const fn all() -> Self {
        EligibleSet {
            bits: [u64::MAX; 4],
        }
    }

    /// Adds a letter. Returns `false` if it was already present.
    #[inline]
    pub fn insert(&mut self, letter: u8) -> bool {
        let (word, bit) = Self::slot(letter);
        let present = self.bits[word] & bit != 0;
        self.bits[word] |= bit;
        !present
    }

    /// True if `letter` is in the set.
    #[inline]
    pub fn contains(&self, letter: u8) -> bool {
        let (word, bit) = Self::slot(letter);
        self.bits[word] & bit != 0
    }

    /// Number of distinct letters in the set.
    pub fn len(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// True if no letter is eligible.
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&w| w == 0)
    }

    /// Iterates over the letters in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(move |&letter| self.contains(letter))
    }

    #[inline]
    fn slot(letter: u8) -> (usize, u64) {
        (usize::from(letter >> 6), 1u64 << (letter & 63))
    }
}

impl FromIterator<u8> for EligibleSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = EligibleSet::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl From<&str> for EligibleSet {
    fn from(letters: &str) -> Self {
        letters.bytes().collect()
    }
}

impl From<&[u8]> for EligibleSet {
    fn from(letters: &[u8]) -> Self {
        letters.iter().copied().collect()
    }
}

impl fmt::Debug for EligibleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.iter().map(char::from))
            .finish()
    }
}

impl LetterGate for EligibleSet {
    #[inline]
    fn enter(&mut self, letter: u8) -> bool {
        self.contains(letter)
    }

    #[inline]
    fn leave(&mut self, _letter: u8) {}
}

/// A multiset of letter tiles.
///
/// Used as a gate, each tile can be placed at most once per word. Only
/// letters with at least one tile have an entry, so two racks holding the same
/// tiles compare equal however they got there.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rack {
    counts: HashMap<u8, u32>,
}

impl Rack {
    /// Creates an empty rack.
    pub fn new() -> Self {
        Rack::default()
    }

    /// Adds one tile.
    pub fn add(&mut self, letter: u8) {
        *self.counts.entry(letter).or_insert(0) += 1;
    }

    /// Number of tiles of `letter` currently on the rack.
    pub fn count(&self, letter: u8) -> u32 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of tiles on the rack.
    pub fn len(&self) -> usize {
        self.counts.values().map(|&n| n as usize).sum()
    }

    /// True if the rack holds no tiles.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl FromIterator<u8> for Rack {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut rack = Rack::new();
        for letter in iter {
            rack.add(letter);
        }
        rack
    }
}

impl From<&str> for Rack {
    fn from(tiles: &str) -> Self {
        tiles.bytes().collect()
    }
}

impl From<&[u8]> for Rack {
    fn from(tiles: &[u8]) -> Self {
        tiles.iter().copied().collect()
    }
}

impl LetterGate for Rack {
    #[inline]
    fn enter(&mut self, letter: u8) -> bool {
        match self.counts.get(&letter).copied() {
            Some(1) => {
                self.counts.remove(&letter);
                true
            }
            Some(n) => {
                self.counts.insert(letter, n - 1);
                true
            }
            None => false,
        }
    }

    #[inline]
    fn leave(&mut self, letter: u8) {
        self.add(letter);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn eligible_set_membership() {
        let mut set = EligibleSet::from("cat");
        assert_eq!(set.len(), 3);
        assert!(set.contains(b'c'));
        assert!(!set.contains(b'd'));
        assert!(!set.insert(b'a'));
        assert!(set.insert(0xff));
        assert!(set.contains(0xff));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![b'a', b'c', b't', 0xff]);
    }

    #[test]
    fn duplicate_letters_collapse() {
        assert_eq!(EligibleSet::from("aab"), EligibleSet::from("ba"));
    }

    #[test]
    fn empty_and_full_sets() {
        assert!(EligibleSet::new().is_empty());
        assert_eq!(EligibleSet::all().len(), 256);
        assert_eq!(format!("{:?}", EligibleSet::from("ba")), "{'a', 'b'}");
    }

    #[test]
    fn eligible_set_is_reusable() {
        let mut set = EligibleSet::from("a");
        assert!(set.enter(b'a'));
        assert!(set.enter(b'a'));
        set.leave(b'a');
        assert!(set.contains(b'a'));
    }

    #[test]
    fn rack_consumes_and_restores() {
        let mut rack = Rack::from("aab");
        assert_eq!(rack.len(), 3);
        assert!(rack.enter(b'a'));
        assert!(rack.enter(b'a'));
        assert!(!rack.enter(b'a'));
        assert!(!rack.enter(b'z'));
        assert_eq!(rack.count(b'a'), 0);
        rack.leave(b'a');
        assert_eq!(rack.count(b'a'), 1);
        rack.leave(b'a');
        assert_eq!(rack, Rack::from("aba"));
    }

    #[test]
    fn empty_rack() {
        let mut rack = Rack::from("a");
        assert!(!rack.is_empty());
        assert!(rack.enter(b'a'));
        assert!(rack.is_empty());
        assert_eq!(rack, Rack::new());
        assert_eq!(rack.count(b'a'), 0);
    }

    #[test]
    fn racks_compare_by_tiles() {
        let mut rack = Rack::from("abb");
        assert!(rack.enter(b'a'));
        assert!(rack.enter(b'b'));
        assert_eq!(rack, Rack::from("b"));
        rack.leave(b'a');
        assert_eq!(rack, Rack::from("ab"));
    }
}
