//! Aho-Corasick multi-pattern matching over a double-array trie.
//!
//! Given a set of keyword strings, this crate builds a compact finite-state
//! automaton that scans text once and reports every keyword occurrence (or a
//! plain yes/no hit) in time linear in the text length, independent of how
//! many keywords there are or how long they are. Matching operates on Unicode
//! scalar values, so offsets are character positions, never byte offsets.
//!
//! # Architecture
//!
//! - [`darts`] -- The packed `base`/`check` transition table
//! - [`keywords`] -- Keyword decoding, ordering, and line-oriented sources
//! - `builder` -- Breadth-first construction: trie packing, failure links,
//!   longest-suffix outputs
//! - [`automaton`] -- The finished automaton and its query operations
//!
//! # Example
//!
//! ```
//! use aho_darts::AhoCorasick;
//!
//! let ac = AhoCorasick::build(["he", "she", "hers"])?;
//! let hits = ac.search_all("ushers");
//! assert_eq!(hits[0].value, "she");
//! assert_eq!((hits[0].begin, hits[0].end), (1, 3));
//! # Ok::<(), aho_darts::BuildError>(())
//! ```

pub mod automaton;
mod builder;
pub mod darts;
pub mod keywords;

pub use automaton::{AhoCorasick, Hit};
pub use keywords::MAX_LINE_LEN;

/// Error type for automaton construction.
///
/// Matching never fails: a built automaton accepts any input, including the
/// empty string, and reports an empty result rather than an error.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The keyword set was empty, or a line source yielded no usable keyword.
    #[error("empty keyword set: nothing to build")]
    EmptyInput,
    /// The keyword source could not be read.
    #[error("failed to read keyword source: {0}")]
    Io(#[from] std::io::Error),
}
