// Keyword decoding, ordering, and line-oriented sources.
//
// The automaton's input symbols are Unicode scalar values, so keywords are
// decoded to `Vec<char>` up front. Construction requires the keyword list
// sorted lexicographically by scalar value, with a strict prefix ordering
// before its extensions; `[char]` slice ordering is exactly that order, so
// sorting is a plain `sort_unstable`.

use std::io::BufRead;

use crate::BuildError;

/// Longest raw line (in bytes, terminator excluded) accepted from a keyword
/// source. Longer lines contribute no keyword at all.
pub const MAX_LINE_LEN: usize = 4096;

/// A keyword as the automaton sees it: a sequence of scalar values.
pub(crate) type Keyword = Vec<char>;

/// Decode and sort a keyword set for construction.
///
/// Input order never matters (sorting happens here) and duplicates are
/// tolerated; they collapse into a single range during trie construction.
/// Fails with [`BuildError::EmptyInput`] before any further work when the
/// set is empty.
pub(crate) fn prepare<I, S>(keywords: I) -> Result<Vec<Keyword>, BuildError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut keys: Vec<Keyword> = keywords
        .into_iter()
        .map(|k| k.as_ref().chars().collect())
        .collect();
    if keys.is_empty() {
        return Err(BuildError::EmptyInput);
    }
    keys.sort_unstable();
    Ok(keys)
}

/// Read one keyword per line from `source`.
///
/// Surrounding whitespace is trimmed and blank lines are skipped. A line
/// whose raw length exceeds [`MAX_LINE_LEN`] bytes is dropped whole (the
/// limit applies to the line as read, before trimming). I/O errors are
/// propagated unchanged.
pub(crate) fn read_keywords<R: BufRead>(mut source: R) -> Result<Vec<String>, BuildError> {
    let mut keywords = Vec::new();
    let mut line = String::new();
    loop {
        line.clear();
        if source.read_line(&mut line)? == 0 {
            break;
        }
        let raw = line.trim_end_matches(['\r', '\n']);
        if raw.len() > MAX_LINE_LEN {
            continue;
        }
        let keyword = raw.trim();
        if keyword.is_empty() {
            continue;
        }
        keywords.push(keyword.to_string());
    }
    Ok(keywords)
}
