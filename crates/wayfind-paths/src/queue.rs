//! Binary heap with a key index, supporting in-place priority changes.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

/// Ordering strategy for an [`IndexedPriorityQueue`].
///
/// `precedes(a, b)` must return `true` iff a value `a` has to be popped
/// strictly before `b`. It must be a strict weak ordering: irreflexive and
/// consistent between calls.
pub trait Order<V> {
    fn precedes(a: &V, b: &V) -> bool;
}

/// Pop the smallest value first.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinFirst;

impl<V: PartialOrd> Order<V> for MinFirst {
    #[inline]
    fn precedes(a: &V, b: &V) -> bool {
        a < b
    }
}

/// Pop the largest value first.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxFirst;

impl<V: PartialOrd> Order<V> for MaxFirst {
    #[inline]
    fn precedes(a: &V, b: &V) -> bool {
        a > b
    }
}

/// Current value of a key and its position in the heap.
#[derive(Debug, Clone)]
struct Slot<V> {
    value: V,
    pos: usize,
}

/// Priority queue over unique keys with O(log n) priority updates.
///
/// Keys live in a dense binary heap; a side index maps every key to its
/// current value and heap position, so a queued key can be found and
/// re-prioritised without a linear scan.
///
/// Ties between values the [`Order`] considers equal are popped in an
/// unspecified order.
pub struct IndexedPriorityQueue<K, V, O = MinFirst> {
    heap: Vec<K>,
    index: HashMap<K, Slot<V>>,
    order: PhantomData<O>,
}

impl<K, V, O> IndexedPriorityQueue<K, V, O>
where
    K: Clone + Eq + Hash,
    O: Order<V>,
{
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            heap: Vec::new(),
            index: HashMap::new(),
            order: PhantomData,
        }
    }

    /// Create an empty queue with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            order: PhantomData,
        }
    }

    /// Number of queued keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Whether `key` is queued.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Current value of `key`, if queued.
    pub fn value(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|slot| &slot.value)
    }

    /// The stored key equal to `key`, if queued.
    ///
    /// Useful when equality only covers part of the key and the caller
    /// needs the rest of the stored instance.
    pub fn lookup(&self, key: &K) -> Option<&K> {
        self.index.get_key_value(key).map(|(k, _)| k)
    }

    /// Remove every key.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.index.clear();
    }

    /// Queue `key` with priority `value`.
    ///
    /// # Panics
    ///
    /// Panics if `key` is already queued.
    pub fn insert(&mut self, key: K, value: V) {
        assert!(
            !self.index.contains_key(&key),
            "IndexedPriorityQueue::insert: key already queued"
        );
        let pos = self.heap.len();
        self.heap.push(key.clone());
        self.index.insert(key, Slot { value, pos });
        self.sift_up(pos);
    }

    /// The key that [`pop`](Self::pop) would return next.
    #[inline]
    pub fn peek(&self) -> Option<&K> {
        self.heap.first()
    }

    /// Remove and return the key with the best priority.
    pub fn pop(&mut self) -> Option<K> {
        let last = self.heap.len().checked_sub(1)?;
        self.swap_slots(0, last);
        let key = self.heap.pop()?;
        self.index.remove(&key);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(key)
    }

    /// Change the priority of `key`. Does nothing if `key` is not queued.
    ///
    /// Works in both directions: the key moves up or down as needed.
    pub fn update(&mut self, key: &K, value: V) {
        let Some(slot) = self.index.get_mut(key) else {
            return;
        };
        slot.value = value;
        let pos = slot.pos;
        let pos = self.sift_up(pos);
        self.sift_down(pos);
    }

    // -----------------------------------------------------------------------
    // Heap maintenance
    // -----------------------------------------------------------------------

    #[inline]
    fn value_at(&self, pos: usize) -> &V {
        &self.index[&self.heap[pos]].value
    }

    #[inline]
    fn precedes(&self, a: usize, b: usize) -> bool {
        O::precedes(self.value_at(a), self.value_at(b))
    }

    /// Swap two heap positions and record the new positions in the index.
    /// Every structural change to the heap goes through here.
    fn swap_slots(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        if let Some(slot) = self.index.get_mut(&self.heap[a]) {
            slot.pos = a;
        }
        if let Some(slot) = self.index.get_mut(&self.heap[b]) {
            slot.pos = b;
        }
    }

    /// Move the key at `pos` towards the root. Returns its final position.
    fn sift_up(&mut self, mut pos: usize) -> usize {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.precedes(pos, parent) {
                break;
            }
            self.swap_slots(pos, parent);
            pos = parent;
        }
        pos
    }

    /// Move the key at `pos` towards the leaves.
    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut best = pos;
            if left < len && self.precedes(left, best) {
                best = left;
            }
            if right < len && self.precedes(right, best) {
                best = right;
            }
            if best == pos {
                break;
            }
            self.swap_slots(pos, best);
            pos = best;
        }
    }
}

impl<K, V, O> Default for IndexedPriorityQueue<K, V, O>
where
    K: Clone + Eq + Hash,
    O: Order<V>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, O> fmt::Debug for IndexedPriorityQueue<K, V, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedPriorityQueue")
            .field("heap", &self.heap)
            .field("len", &self.heap.len())
            .finish()
    }
}
