//! Loading trie files into memory.
//!
//! A [`TrieFile`] owns the bytes of a serialized trie, either read into a heap
//! buffer or memory-mapped, and hands out [`Trie`] views over them.

use std::fs;
use std::path::Path;

#[cfg(feature = "mmap")]
use memmap2::Mmap;

use crate::errors::Result;
use crate::trie::{Trie, TrieFormat};

enum Storage {
    Owned(Vec<u8>),
    #[cfg(feature = "mmap")]
    Mapped(Mmap),
}

/// The bytes of a trie file, kept alive for as long as queries need them.
pub struct TrieFile {
    storage: Storage,
}

impl TrieFile {
    /// Reads the whole file at `path` into memory.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        tracing::debug!(path = %path.display(), len = bytes.len(), "read trie file");
        Ok(Self::from_bytes(bytes))
    }

    /// Memory-maps the file at `path`.
    ///
    /// The file must not be modified while the returned value is alive.
    #[cfg(feature = "mmap")]
    pub fn open_mmap<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = fs::File::open(path)?;
        // SAFETY: the mapping is only ever read, and the caller promises not to
        // truncate or rewrite the file while it is mapped.
        let mmap = unsafe { Mmap::map(&file)? };
        tracing::debug!(path = %path.display(), len = mmap.len(), "mapped trie file");
        Ok(TrieFile {
            storage: Storage::Mapped(mmap),
        })
    }

    /// Wraps bytes that are already in memory.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        TrieFile {
            storage: Storage::Owned(bytes),
        }
    }

    /// The raw bytes of the file.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.storage {
            Storage::Owned(bytes) => bytes.as_slice(),
            #[cfg(feature = "mmap")]
            Storage::Mapped(mmap) => &mmap[..],
        }
    }

    /// Length of the file in bytes.
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// True if the file is empty. An empty file has no root node.
    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    /// A view over the file decoded with `format`.
    pub fn trie(&self, format: TrieFormat) -> Trie<'_> {
        Trie::with_format(self.as_bytes(), format)
    }
}

impl std::fmt::Debug for TrieFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.storage {
            Storage::Owned(_) => "owned",
            #[cfg(feature = "mmap")]
            Storage::Mapped(_) => "mapped",
        };
        f.debug_struct("TrieFile")
            .field("storage", &kind)
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use super::*;
    use crate::errors::TrieError;
    use crate::test_utils::{encode, TestNode};
    use crate::trie::{search_words, EligibleSet};

    fn write_fixture(format: TrieFormat) -> tempfile::NamedTempFile {
        let bytes = encode(&TestNode::from_words(["bake", "baked", "cake", "lake"]), format);
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&bytes).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn read_file() {
        let file = write_fixture(TrieFormat::PACKED);
        let trie_file = TrieFile::read(file.path()).unwrap();
        assert!(!trie_file.is_empty());
        let trie = trie_file.trie(TrieFormat::PACKED);
        assert_eq!(
            search_words(&trie, &EligibleSet::from("abdek")).unwrap(),
            ["bake", "baked"]
        );
    }

    #[cfg(feature = "mmap")]
    #[test]
    fn mmap_file() {
        let file = write_fixture(TrieFormat::ALIGNED);
        let trie_file = TrieFile::open_mmap(file.path()).unwrap();
        let trie = trie_file.trie(TrieFormat::ALIGNED);
        assert!(trie.contains_word("lake").unwrap());
        assert!(!trie.contains_word("lak").unwrap());
        assert_eq!(
            trie_file.as_bytes(),
            TrieFile::read(file.path()).unwrap().as_bytes()
        );
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = TrieFile::read(dir.path().join("missing.bin")).unwrap_err();
        assert!(matches!(err, TrieError::Io(_)));
    }

    #[test]
    fn empty_file_has_no_root() {
        let trie_file = TrieFile::from_bytes(Vec::new());
        assert!(trie_file.is_empty());
        assert!(trie_file.trie(TrieFormat::PACKED).root().is_err());
    }
}
