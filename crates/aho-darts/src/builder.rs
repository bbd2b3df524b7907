// Breadth-first automaton construction.
//
// A single pass drives everything: dequeue a build node, derive its children
// by grouping its keyword range, pack the children into the double array,
// record the terminal output length, then resolve the node's failure link and
// fold in the longest suffix match. Because the pass is breadth-first, a
// node's failure target (always at strictly smaller depth) is already fully
// finalized when the node needs it.
//
// Build nodes live in an index-addressed arena and are dropped in bulk when
// the builder consumes itself; only the four parallel arrays survive.

use std::collections::VecDeque;

use crate::automaton::AhoCorasick;
use crate::darts::{DoubleArray, INITIAL_CAPACITY, ROOT_BASE, ROOT_STATE};
use crate::keywords::Keyword;

/// Transient build node.
struct Node {
    /// Trie depth; 0 is the synthetic root.
    depth: usize,
    /// Scalar value labeling the edge from the parent. Meaningless for the
    /// root. Sorted order keeps the virtual "keyword ends here" value 0 out
    /// of this field (see `derive_children`).
    code: i32,
    /// Offset inherited from the parent until this node is dequeued; once the
    /// node's own children are packed, the offset allocated for them.
    base: i32,
    /// This node's slot in the transition table.
    state: i32,
    /// Keywords passing through this node: `keys[left..right)`.
    left: usize,
    right: usize,
    /// True when some keyword ends exactly here.
    terminal: bool,
    /// Arena indices of the children, in ascending code order.
    children: Vec<usize>,
}

/// Owns the growing arrays during construction. Consumed by [`Builder::build`],
/// which returns the immutable automaton; a partially built automaton is
/// never observable.
pub(crate) struct Builder {
    darts: DoubleArray,
    fail: Vec<i32>,
    output: Vec<i32>,
    keys: Vec<Keyword>,
    arena: Vec<Node>,
    /// Low-water mark for the slot scan. Only ever advances, which bounds the
    /// amortized scan cost across the whole construction.
    next_check_pos: i32,
}

impl Builder {
    /// `keys` must be sorted; see `keywords::prepare`.
    pub(crate) fn new(keys: Vec<Keyword>) -> Self {
        let mut builder = Builder {
            darts: DoubleArray::default(),
            fail: Vec::new(),
            output: Vec::new(),
            keys,
            arena: Vec::new(),
            next_check_pos: 0,
        };
        builder.resize(INITIAL_CAPACITY);
        builder
    }

    /// Run the breadth-first pass and hand back the finished automaton.
    pub(crate) fn build(mut self) -> AhoCorasick {
        self.arena.push(Node {
            depth: 0,
            code: 0,
            base: ROOT_BASE,
            state: ROOT_STATE,
            left: 0,
            right: self.keys.len(),
            terminal: false,
            children: Vec::new(),
        });

        let mut queue = VecDeque::new();
        queue.push_back(0usize);

        while let Some(idx) = queue.pop_front() {
            self.derive_children(idx);
            queue.extend(self.arena[idx].children.iter().copied());
            self.commit(idx);
            if self.arena[idx].terminal {
                let node = &self.arena[idx];
                self.output[node.state as usize] = self.keys[node.left].len() as i32;
            }
            self.link_failure(idx);
        }

        AhoCorasick::from_parts(self.darts, self.fail, self.output)
    }

    /// Grow all four parallel arrays to `new_len`, appending zeroed slots.
    fn resize(&mut self, new_len: usize) {
        self.darts.grow(new_len);
        if new_len > self.fail.len() {
            self.fail.resize(new_len, 0);
            self.output.resize(new_len, 0);
        }
    }

    /// Make slot `pos` addressable.
    fn ensure(&mut self, pos: usize) {
        if self.darts.len() <= pos {
            self.resize(pos + INITIAL_CAPACITY);
        }
    }

    /// Derive a node's children by grouping `keys[left..right)` on the scalar
    /// at `depth`.
    ///
    /// A keyword ending exactly at `depth` contributes a virtual value 0,
    /// which marks the node terminal instead of creating a child edge. Sorted
    /// order puts those rows first in the range, and U+0000 is not a valid
    /// keyword scalar, so 0 never collides with a real edge label.
    fn derive_children(&mut self, parent_idx: usize) {
        let (left, right, depth, inherited_base) = {
            let p = &self.arena[parent_idx];
            (p.left, p.right, p.depth, p.base)
        };

        let mut prev: i32 = 0;
        for i in left..right {
            let cur: i32 = if self.keys[i].len() == depth {
                self.arena[parent_idx].terminal = true;
                0
            } else {
                self.keys[i][depth] as i32
            };

            if cur != prev {
                // A new run starts here; close the previous child's range.
                if let Some(&last) = self.arena[parent_idx].children.last() {
                    self.arena[last].right = i;
                }
                self.arena.push(Node {
                    depth: depth + 1,
                    code: cur,
                    base: inherited_base,
                    state: 0,
                    left: i,
                    right,
                    terminal: false,
                    children: Vec::new(),
                });
                let child_idx = self.arena.len() - 1;
                self.arena[parent_idx].children.push(child_idx);
            }
            prev = cur;
        }

        if let Some(&last) = self.arena[parent_idx].children.last() {
            self.arena[last].right = right;
        }
    }

    /// Commit a node into the table: pick an offset for its children, then
    /// claim `offset + code` for each of them.
    ///
    /// A childless node keeps its inherited offset and stores it negated
    /// (terminal with no further edges); it allocates nothing. The root's
    /// offset is fixed at [`ROOT_BASE`], reserved at initialization, so only
    /// interior nodes search.
    fn commit(&mut self, idx: usize) {
        if self.arena[idx].children.is_empty() {
            let node = &self.arena[idx];
            self.darts.base[node.state as usize] = -node.base;
            return;
        }

        let begin = if self.arena[idx].depth == 0 {
            self.arena[idx].base
        } else {
            let begin = self.find_base(idx);
            self.arena[idx].base = begin;
            begin
        };

        let (state, terminal) = (self.arena[idx].state, self.arena[idx].terminal);
        self.darts.base[state as usize] = if terminal { -begin } else { begin };

        for c in 0..self.arena[idx].children.len() {
            let child_idx = self.arena[idx].children[c];
            let pos = begin + self.arena[child_idx].code;
            self.ensure(pos as usize);
            self.arena[child_idx].state = pos;
            self.arena[child_idx].base = begin;
            self.darts.base[pos as usize] = begin;
            self.darts.check[pos as usize] = state;
        }
    }

    /// Scan forward for an offset at which every child slot is free at once.
    ///
    /// Candidates start one past `max(first child's code, next_check_pos)`
    /// and advance a slot at a time; occupancy is `base[slot] != 0`. The
    /// low-water mark advances exactly once per call, to the first free slot
    /// seen, and never moves backward. The table grows whenever a candidate
    /// would index past its end.
    fn find_base(&mut self, idx: usize) -> i32 {
        let children_len = self.arena[idx].children.len();
        let first_code = self.arena[self.arena[idx].children[0]].code;
        let last_code = self.arena[self.arena[idx].children[children_len - 1]].code;

        let mut pos = first_code.max(self.next_check_pos);
        let mut first_free_seen = false;
        'scan: loop {
            pos += 1;
            self.ensure(pos as usize);
            if self.darts.base[pos as usize] != 0 {
                continue;
            }
            if !first_free_seen {
                self.next_check_pos = pos;
                first_free_seen = true;
            }

            let begin = pos - first_code;
            self.ensure((begin + last_code) as usize);
            for c in 0..children_len {
                let code = self.arena[self.arena[idx].children[c]].code;
                if self.darts.base[(begin + code) as usize] != 0 {
                    continue 'scan;
                }
            }
            return begin;
        }
    }

    /// Resolve the node's failure link and propagate the longest output.
    ///
    /// Depth 0 and 1 fall back to the root: a single symbol has no shorter
    /// non-empty suffix. Deeper nodes chase the parent's failure chain until
    /// a transition on this node's code lands; the root self-loop guarantees
    /// the chase terminates. Of all keywords ending at this state (its own
    /// terminal length or the failure target's output), only the longest
    /// survives.
    fn link_failure(&mut self, idx: usize) {
        let node = &self.arena[idx];
        let (state, depth, code) = (node.state, node.depth, node.code);
        if depth <= 1 {
            self.fail[state as usize] = ROOT_STATE;
            return;
        }

        let parent = self.darts.check[state as usize];
        let mut in_state = self.fail[parent as usize];
        let out_state = loop {
            match self.darts.transition(in_state, code) {
                Some(found) => break found,
                None => in_state = self.fail[in_state as usize],
            }
        };

        let suffix_len = self.output[out_state as usize];
        if suffix_len != 0 && suffix_len > self.output[state as usize] {
            self.output[state as usize] = suffix_len;
        }
        self.fail[state as usize] = out_state;
    }
}
