//! Searches a trie file for words made from a set of letters.
//!
//! Prints the words found by a letter search on one line, separated by
//! spaces, followed by a `word: yes|no` line for every word given to check.

use std::error::Error;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use libtrie::trie::{
    ByteOrder, EligibleSet, MembershipPolicy, NodeLayout, Rack, SearchOptions, TrieFormat, Word,
};
use libtrie::TrieFile;

/// Record layout of the trie file.
#[derive(Clone, Copy, Debug)]
struct Layout(NodeLayout);

impl FromStr for Layout {
    type Err = &'static str;

    fn from_str(layout: &str) -> Result<Self, Self::Err> {
        match layout {
            "packed" => Ok(Layout(NodeLayout::Packed)),
            "aligned" => Ok(Layout(NodeLayout::Aligned)),
            _ => Err("Could not parse a layout"),
        }
    }
}

#[derive(Parser, Debug)]
#[clap(name = "trie-search", about = "Finds words in a serialized trie")]
struct Args {
    /// Serialized trie file.
    #[clap(short = 't', long, env = "TRIE_FILE")]
    trie: PathBuf,

    /// Letters a word may be spelled with.
    #[clap(short = 'l', long)]
    letters: Option<String>,

    /// Treat the letters as tiles, each usable once per word.
    #[clap(short = 'r', long)]
    rack: bool,

    /// Only report words longer than this.
    #[clap(short = 'm', long, default_value_t = libtrie::trie::DEFAULT_LENGTH_FLOOR)]
    min_len: usize,

    /// Longest word or search path accepted.
    #[clap(short = 'M', long, default_value_t = libtrie::trie::DEFAULT_MAX_WORD_LEN)]
    max_len: usize,

    /// Record layout. Choices are packed and aligned.
    #[clap(short = 'L', long, default_value = "packed")]
    layout: Layout,

    /// Read integers as big-endian.
    #[clap(long)]
    big_endian: bool,

    /// Accept prefixes of words when checking words.
    #[clap(short = 'p', long)]
    prefix: bool,

    /// Drop repeated spellings from search results.
    #[clap(long)]
    dedup: bool,

    /// Memory-map the trie file instead of reading it.
    #[clap(long)]
    mmap: bool,

    /// Words to check for membership.
    words: Vec<String>,
}

#[cfg(feature = "mmap")]
fn open(args: &Args) -> libtrie::Result<TrieFile> {
    if args.mmap {
        TrieFile::open_mmap(&args.trie)
    } else {
        TrieFile::read(&args.trie)
    }
}

#[cfg(not(feature = "mmap"))]
fn open(args: &Args) -> libtrie::Result<TrieFile> {
    if args.mmap {
        tracing::warn!("built without mmap support; reading the file instead");
    }
    TrieFile::read(&args.trie)
}

/// Words separated by single spaces, letters written as raw bytes.
fn result_line(words: &[Word]) -> Vec<u8> {
    let mut line = Vec::new();
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            line.push(b' ');
        }
        line.extend_from_slice(word.as_bytes());
    }
    line.push(b'\n');
    line
}

fn check_line(word: &str, found: bool) -> String {
    format!("{word}: {}", if found { "yes" } else { "no" })
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let format = TrieFormat::new(
        args.layout.0,
        if args.big_endian {
            ByteOrder::Big
        } else {
            ByteOrder::Little
        },
    );
    let options = SearchOptions::new()
        .with_length_floor(args.min_len)
        .with_max_word_len(args.max_len)
        .with_membership(if args.prefix {
            MembershipPolicy::Prefix
        } else {
            MembershipPolicy::CompleteWord
        })
        .with_dedup(args.dedup);

    let file = open(&args)?;
    let trie = file.trie(format);

    let out = std::io::stdout();
    let mut out = BufWriter::new(out.lock());

    if let Some(letters) = &args.letters {
        let words = if args.rack {
            trie.search_with(Rack::from(letters.as_str()), &options)?
        } else {
            trie.search_with(EligibleSet::from(letters.as_str()), &options)?
        };
        tracing::info!(letters = %letters, found = words.len(), "search finished");
        out.write_all(&result_line(&words))?;
    }

    for word in &args.words {
        let found = trie.contains_word_with(word, &options)?;
        writeln!(out, "{}", check_line(word, found))?;
    }

    out.flush()?;
    Ok(())
}
