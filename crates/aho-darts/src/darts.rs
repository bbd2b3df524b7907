// Double-array trie transition table.
//
// Two parallel i32 arrays encode a sparse trie in packed form: `base[s]`
// holds the offset at which state `s`'s children are laid out, and `check[p]`
// names the parent state that owns slot `p`. A transition is one addition and
// two array reads. The sign of `base[s]` marks terminal states; the magnitude
// is always the live child offset.

/// Index of the root state. Fixed at construction.
pub const ROOT_STATE: i32 = 0;

/// Offset reserved for the root's own children. The root never searches for
/// a base; its child for symbol `code` always sits at `ROOT_BASE + code`.
pub const ROOT_BASE: i32 = 1;

/// Growth granularity for the packed arrays.
pub const INITIAL_CAPACITY: usize = 64;

/// The packed transition table.
///
/// Grown monotonically during construction, immutable afterwards. Slot 0 is
/// the root; every other allocated slot `p` satisfies
/// `check[p] == parent && base[p] != 0`.
#[derive(Debug, Default)]
pub struct DoubleArray {
    pub(crate) base: Vec<i32>,
    pub(crate) check: Vec<i32>,
}

impl DoubleArray {
    /// Number of allocated slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.base.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    /// Grow both arrays to `new_len` slots, appending zeroed entries.
    /// The table never shrinks.
    pub(crate) fn grow(&mut self, new_len: usize) {
        if new_len > self.base.len() {
            self.base.resize(new_len, 0);
            self.check.resize(new_len, 0);
        }
    }

    /// Follow the edge labeled `code` out of `state`.
    ///
    /// Returns the child state when `state` has an edge for `code`. The root
    /// absorbs unmatched symbols by looping back to itself, which is what
    /// guarantees that every failure chase terminates; any other state
    /// reports `None` and the caller falls back along its failure link.
    ///
    /// Shared by construction (failure-link lookups) and matching.
    #[inline]
    pub fn transition(&self, state: i32, code: i32) -> Option<i32> {
        let b = self.base[state as usize].abs();
        let p = b + code;
        if p as usize >= self.base.len() {
            return if state == ROOT_STATE { Some(ROOT_STATE) } else { None };
        }
        if self.base[p as usize] != 0 && self.check[p as usize] == state {
            return Some(p);
        }
        if state == ROOT_STATE { Some(ROOT_STATE) } else { None }
    }
}
