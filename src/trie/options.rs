/// Longest word (and search path) accepted by default.
pub const DEFAULT_MAX_WORD_LEN: usize = 31;

/// Words must be longer than this many letters to be reported by default.
pub const DEFAULT_LENGTH_FLOOR: usize = 3;

/// What `contains_word` accepts as a match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MembershipPolicy {
    /// The path must exist and end at a node that completes a word.
    #[default]
    CompleteWord,
    /// Any existing path matches, including proper prefixes of longer words.
    Prefix,
}

/// Tunables shared by searches and membership tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    /// Only words strictly longer than this are reported by a search.
    pub length_floor: usize,
    /// Longest path a search may build, and longest word a membership test accepts.
    pub max_word_len: usize,
    /// Acceptance rule for membership tests.
    pub membership: MembershipPolicy,
    /// Drop repeated spellings from search results, keeping the first occurrence.
    pub dedup: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            length_floor: DEFAULT_LENGTH_FLOOR,
            max_word_len: DEFAULT_MAX_WORD_LEN,
            membership: MembershipPolicy::default(),
            dedup: false,
        }
    }
}

impl SearchOptions {
    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets [`length_floor`](SearchOptions::length_floor).
    pub fn with_length_floor(mut self, length_floor: usize) -> Self {
        self.length_floor = length_floor;
        self
    }

    /// Sets [`max_word_len`](SearchOptions::max_word_len).
    pub fn with_max_word_len(mut self, max_word_len: usize) -> Self {
        self.max_word_len = max_word_len;
        self
    }

    /// Sets [`membership`](SearchOptions::membership).
    pub fn with_membership(mut self, membership: MembershipPolicy) -> Self {
        self.membership = membership;
        self
    }

    /// Sets [`dedup`](SearchOptions::dedup).
    pub fn with_dedup(mut self, dedup: bool) -> Self {
        self.dedup = dedup;
        self
    }
}
