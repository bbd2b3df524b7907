// The finished automaton and its query operations.

use std::io::BufRead;

use crate::BuildError;
use crate::builder::Builder;
use crate::darts::{DoubleArray, ROOT_STATE};
use crate::keywords;

/// A single keyword occurrence reported by [`AhoCorasick::search_all`].
///
/// Offsets are 0-based, inclusive positions in Unicode scalar values, never
/// byte offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    /// Position of the first matched scalar value.
    pub begin: usize,
    /// Position of the last matched scalar value.
    pub end: usize,
    /// The matched keyword.
    pub value: String,
}

/// An immutable Aho-Corasick automaton over a double-array trie.
///
/// Built once from a keyword set, then queried any number of times. Queries
/// take `&self` and keep all traversal state local, so a shared automaton
/// serves concurrent callers without locking.
///
/// When several keywords end at the same text position, only the longest one
/// is reported; see [`search_all`](Self::search_all).
#[derive(Debug)]
pub struct AhoCorasick {
    darts: DoubleArray,
    fail: Vec<i32>,
    output: Vec<i32>,
}

impl AhoCorasick {
    pub(crate) fn from_parts(darts: DoubleArray, fail: Vec<i32>, output: Vec<i32>) -> Self {
        AhoCorasick { darts, fail, output }
    }

    /// Build an automaton from a keyword set.
    ///
    /// Keywords may arrive in any order and may repeat; sorting happens
    /// internally, so input order never affects match behavior. Fails with
    /// [`BuildError::EmptyInput`] when the set is empty.
    pub fn build<I, S>(keywords: I) -> Result<AhoCorasick, BuildError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keys = keywords::prepare(keywords)?;
        Ok(Builder::new(keys).build())
    }

    /// Build an automaton from a line-oriented source, one keyword per line.
    ///
    /// Lines are trimmed of surrounding whitespace, blank lines are skipped,
    /// and lines longer than [`MAX_LINE_LEN`](crate::MAX_LINE_LEN) bytes are
    /// dropped whole. Fails with [`BuildError::EmptyInput`] when no usable
    /// keyword remains, or with [`BuildError::Io`] when the source cannot
    /// be read.
    pub fn build_from_lines<R: BufRead>(source: R) -> Result<AhoCorasick, BuildError> {
        let keywords = keywords::read_keywords(source)?;
        AhoCorasick::build(keywords)
    }

    /// One automaton step: consume `code` from `state`.
    ///
    /// Failure links are followed until a transition lands; the root
    /// self-loop guarantees termination.
    #[inline]
    fn step(&self, mut state: i32, code: i32) -> i32 {
        loop {
            match self.darts.transition(state, code) {
                Some(next) => return next,
                None => state = self.fail[state as usize],
            }
        }
    }

    /// Report every keyword occurrence in `text`, in scan order.
    ///
    /// Offsets count scalar values. When several keywords end at the same
    /// position, only the longest is reported; a shorter keyword that is a
    /// suffix of a longer match at the same end position never appears
    /// separately.
    pub fn search_all(&self, text: &str) -> Vec<Hit> {
        let chars: Vec<char> = text.chars().collect();
        let mut hits = Vec::new();
        let mut state = ROOT_STATE;
        for (k, &c) in chars.iter().enumerate() {
            state = self.step(state, c as i32);
            let len = self.output[state as usize];
            if len != 0 {
                let begin = k + 1 - len as usize;
                hits.push(Hit {
                    begin,
                    end: k,
                    value: chars[begin..=k].iter().collect(),
                });
            }
        }
        hits
    }

    /// Report only the begin offset of every occurrence, in scan order.
    ///
    /// Equal to the `begin` projection of [`search_all`](Self::search_all).
    pub fn indexes_all(&self, text: &str) -> Vec<usize> {
        let mut hits = Vec::new();
        let mut state = ROOT_STATE;
        for (k, c) in text.chars().enumerate() {
            state = self.step(state, c as i32);
            let len = self.output[state as usize];
            if len != 0 {
                hits.push(k + 1 - len as usize);
            }
        }
        hits
    }

    /// Whether `text` contains any keyword at all.
    ///
    /// Returns at the first hit without scanning the rest of the input, and
    /// never allocates.
    pub fn contains_any(&self, text: &str) -> bool {
        let mut state = ROOT_STATE;
        for c in text.chars() {
            state = self.step(state, c as i32);
            if self.output[state as usize] != 0 {
                return true;
            }
        }
        false
    }

    #[cfg(test)]
    pub(crate) fn darts(&self) -> &DoubleArray {
        &self.darts
    }

    #[cfg(test)]
    pub(crate) fn fail(&self) -> &[i32] {
        &self.fail
    }

    #[cfg(test)]
    pub(crate) fn output(&self) -> &[i32] {
        &self.output
    }
}
