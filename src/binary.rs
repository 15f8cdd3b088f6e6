//! Array-backed binary heap
//!
//! A binary heap stored in a single `Vec`, ordered by a pluggable
//! [`Priority`] policy. The same code yields a min-heap, a max-heap or any
//! custom ordering, depending on the selector it was built with.
//!
//! The tree is implicit in the vector: the element at index `i` has its
//! parent at `(i - 1) / 2` and its children at `2i + 1` and `2i + 2`. Every
//! parent is at least as high priority as each of its children.
//!
//! # Time Complexity
//!
//! | Operation         | Complexity |
//! |-------------------|------------|
//! | build (`from_vec`)| O(n)       |
//! | `insert`/`push`   | O(log n)   |
//! | `pop`             | O(log n)   |
//! | `peek`            | O(1)       |
//! | `len`             | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use selector_heap::Heap;
//! use selector_heap::binary::BinaryHeap;
//! use selector_heap::priority::MaxFirst;
//!
//! let mut min_heap = BinaryHeap::from_vec(vec![2, 7, 4, 1, 8, 1]);
//! assert_eq!(min_heap.pop(), Ok(1));
//! assert_eq!(min_heap.pop(), Ok(1));
//! assert_eq!(min_heap.pop(), Ok(2));
//!
//! let mut max_heap = BinaryHeap::with_policy(vec![2, 7, 4, 1, 8, 1], MaxFirst);
//! assert_eq!(max_heap.pop(), Ok(8));
//! max_heap.insert(10);
//! assert_eq!(max_heap.pop(), Ok(10));
//! ```

use std::ptr;

use log::{trace, warn};

use crate::priority::{MinFirst, Priority};
use crate::traits::{Heap, HeapError};

#[inline]
fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline]
fn left_child(index: usize) -> usize {
    2 * index + 1
}

/// Which operand a selector handed back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    First,
    Second,
}

/// Runs the selector and works out which operand it returned
///
/// Operands are told apart by address, so `T` needs no `PartialEq`.
fn choose<T, S: Priority<T>>(policy: &S, a: &T, b: &T) -> Result<Choice, HeapError> {
    let chosen = policy.select(a, b);
    if ptr::eq(chosen, a) {
        Ok(Choice::First)
    } else if ptr::eq(chosen, b) {
        Ok(Choice::Second)
    } else {
        Err(HeapError::InvalidPriorityFunction)
    }
}

/// A binary heap ordered by a priority selector
///
/// `S` defaults to [`MinFirst`], so `BinaryHeap<T>` is a min-heap.
///
/// Each heap owns its storage outright; constructing from a `Vec` takes
/// ownership of it and never shares it with another heap.
#[derive(Debug, Clone)]
pub struct BinaryHeap<T, S = MinFirst> {
    /// Elements in heap order
    data: Vec<T>,
    priority: S,
}

impl<T: Ord> BinaryHeap<T, MinFirst> {
    /// Creates an empty min-heap
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty min-heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            priority: MinFirst,
        }
    }

    /// Builds a min-heap from `items` in O(n)
    pub fn from_vec(items: Vec<T>) -> Self {
        Self::with_policy(items, MinFirst)
    }
}

impl<T, F> BinaryHeap<T, F>
where
    F: for<'a> Fn(&'a T, &'a T) -> &'a T,
{
    /// Builds a heap from `items` ordered by a selector closure
    ///
    /// `select(a, b)` must return `a` or `b`, whichever should leave the heap
    /// first.
    ///
    /// ```rust
    /// use selector_heap::Heap;
    /// use selector_heap::binary::BinaryHeap;
    ///
    /// let mut heap = BinaryHeap::with_priority(vec![2, 7, 4], |a, b| if a >= b { a } else { b });
    /// assert_eq!(heap.pop(), Ok(7));
    /// ```
    pub fn with_priority(items: Vec<T>, select: F) -> Self {
        Self::with_policy(items, select)
    }
}

impl<T, S: Priority<T>> BinaryHeap<T, S> {
    /// Builds a heap from `items` ordered by `policy`, in O(n)
    ///
    /// Sifts down every internal node, deepest first, so each subtree is a
    /// heap before its root is placed.
    pub fn with_policy(items: Vec<T>, policy: S) -> Self {
        let mut heap = Self {
            data: items,
            priority: policy,
        };
        heap.rebuild();
        heap
    }

    /// Inserts `item` and sifts it up to its place
    pub fn insert(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Returns the policy this heap is ordered by
    pub fn priority(&self) -> &S {
        &self.priority
    }

    /// Returns the elements in heap order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the heap, returning the elements in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning the elements in the order `pop` would
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    /// Checks the heap property over every parent/child pair
    ///
    /// # Errors
    /// - [`HeapError::InvalidPriorityFunction`] if the selector returned
    ///   neither operand
    /// - [`HeapError::HeapPropertyViolated`] for the first child that the
    ///   selector prefers over its parent in both operand orders
    pub fn verify(&self) -> Result<(), HeapError> {
        for index in 1..self.data.len() {
            let up = &self.data[parent(index)];
            let child = &self.data[index];
            let child_first = choose(&self.priority, child, up)?;
            let parent_first = choose(&self.priority, up, child)?;
            if child_first == Choice::First && parent_first == Choice::Second {
                return Err(HeapError::HeapPropertyViolated { index });
            }
        }
        Ok(())
    }

    fn rebuild(&mut self) {
        let len = self.data.len();
        for index in (0..len / 2).rev() {
            self.sift_down(index);
        }
        trace!("built heap of {} elements", len);
    }

    /// Which of the elements at `first` and `second` the selector picks
    ///
    /// `None` when the selector returned neither operand.
    fn selection(&self, first: usize, second: usize) -> Option<Choice> {
        match choose(&self.priority, &self.data[first], &self.data[second]) {
            Ok(choice) => Some(choice),
            Err(err) => {
                warn!("{err} (comparing indices {first} and {second})");
                None
            }
        }
    }

    /// Whether the element at `incumbent` keeps its place against `challenger`
    fn keeps(&self, incumbent: usize, challenger: usize) -> bool {
        self.selection(incumbent, challenger) != Some(Choice::Second)
    }

    /// Move element at index up while it is preferred over its parent
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let up = parent(index);
            if self.selection(index, up) != Some(Choice::First) {
                break;
            }
            self.data.swap(up, index);
            index = up;
        }
    }

    /// Move element at index down while a child is preferred over it
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        while left_child(index) < len {
            let child = self.priority_child(index);
            if self.keeps(index, child) {
                break;
            }
            self.data.swap(index, child);
            index = child;
        }
    }

    /// Index of the higher-priority child of `index`, which must have a left child
    ///
    /// Equal children resolve to the left one under a first-biased selector.
    fn priority_child(&self, index: usize) -> usize {
        let left = left_child(index);
        let right = left + 1;
        if right < self.data.len() && !self.keeps(left, right) {
            right
        } else {
            left
        }
    }
}

impl<T, S: Priority<T>> Heap<T> for BinaryHeap<T, S> {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, item: T) {
        self.insert(item);
    }

    fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    fn pop(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::EmptyStructure);
        }

        let root = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        trace!("popped root, {} elements remain", self.data.len());

        Ok(root)
    }
}

impl<T, S: Priority<T>> Extend<T> for BinaryHeap<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinaryHeap<T, MinFirst> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Ord> From<Vec<T>> for BinaryHeap<T, MinFirst> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T: Ord> Default for BinaryHeap<T, MinFirst> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::priority::MaxFirst;
    use std::cell::Cell;

    fn drain<T, S: Priority<T>>(heap: &mut BinaryHeap<T, S>) -> Vec<T> {
        let mut out = Vec::new();
        while let Ok(item) = heap.pop() {
            out.push(item);
        }
        out
    }

    #[test]
    fn test_index_arithmetic() {
        assert_eq!(parent(1), 0);
        assert_eq!(parent(2), 0);
        assert_eq!(parent(5), 2);
        assert_eq!(parent(6), 2);
        assert_eq!(left_child(0), 1);
        assert_eq!(left_child(2), 5);
    }

    #[test]
    fn test_basic_operations() {
        let mut heap = BinaryHeap::new();

        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);

        heap.push(3);
        heap.push(1);
        heap.push(2);

        assert!(!heap.is_empty());
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.peek(), Some(&1));

        assert_eq!(heap.pop(), Ok(1));
        assert_eq!(heap.pop(), Ok(2));
        assert_eq!(heap.pop(), Ok(3));
        assert_eq!(heap.pop(), Err(HeapError::EmptyStructure));
    }

    #[test]
    fn test_min_heap_drain() {
        let mut heap = BinaryHeap::from_vec(vec![2, 7, 4, 1, 8, 1]);
        assert_eq!(drain(&mut heap), vec![1, 1, 2, 4, 7, 8]);
    }

    #[test]
    fn test_max_heap_drain() {
        let mut heap = BinaryHeap::with_policy(vec![2, 7, 4, 1, 8, 1], MaxFirst);
        assert_eq!(drain(&mut heap), vec![8, 7, 4, 2, 1, 1]);
    }

    #[test]
    fn test_duplicate_values() {
        let mut heap = BinaryHeap::from_vec(vec![2, 2, 8, 8, 4, 4]);
        assert_eq!(drain(&mut heap), vec![2, 2, 4, 4, 8, 8]);
    }

    #[test]
    fn test_insert_after_build() {
        let mut heap = BinaryHeap::from_vec(vec![7, 6, 7, 6, 9]);
        heap.insert(1);
        assert_eq!(heap.len(), 6);
        assert_eq!(heap.pop(), Ok(1));
    }

    #[test]
    fn test_build_layout() {
        let heap = BinaryHeap::from_vec(vec![5, 3, 8, 1, 9, 2]);
        assert_eq!(heap.as_slice(), &[1, 3, 2, 5, 9, 8]);
    }

    #[test]
    fn test_build_keeps_existing_heap_order() {
        let ordered = vec![1, 3, 2, 5, 9, 8, 4];
        let heap = BinaryHeap::from_vec(ordered.clone());
        assert_eq!(heap.as_slice(), ordered.as_slice());
        assert!(heap.verify().is_ok());
    }

    #[test]
    fn test_equal_children_prefer_left() {
        let heap = BinaryHeap::from_vec(vec![9, 4, 4]);
        assert_eq!(heap.as_slice(), &[4, 9, 4]);
    }

    #[test]
    fn test_tied_insert_moves_up_under_first_biased_selector() {
        let mut heap = BinaryHeap::with_priority(vec![(1, 'a')], |a, b| {
            if a.0 <= b.0 {
                a
            } else {
                b
            }
        });
        heap.insert((1, 'b'));
        assert_eq!(heap.as_slice(), &[(1, 'b'), (1, 'a')]);
        assert_eq!(heap.pop(), Ok((1, 'b')));
        assert_eq!(heap.pop(), Ok((1, 'a')));
    }

    #[test]
    fn test_tied_insert_stays_under_second_biased_selector() {
        let mut heap = BinaryHeap::with_priority(vec![(1, 'a')], |a, b| {
            if a.0 < b.0 {
                a
            } else {
                b
            }
        });
        heap.insert((1, 'b'));
        assert_eq!(heap.as_slice(), &[(1, 'a'), (1, 'b')]);
        assert_eq!(heap.pop(), Ok((1, 'a')));
    }

    #[test]
    fn test_tied_parent_stays_on_sift_down() {
        let heap = BinaryHeap::with_priority(vec![(1, 'a'), (1, 'b'), (1, 'c')], |a, b| {
            if a.0 <= b.0 {
                a
            } else {
                b
            }
        });
        assert_eq!(heap.as_slice(), &[(1, 'a'), (1, 'b'), (1, 'c')]);
    }

    #[test]
    fn test_single_element() {
        let mut heap = BinaryHeap::from_vec(vec![42]);
        assert_eq!(heap.peek(), Some(&42));
        assert_eq!(heap.pop(), Ok(42));
        assert!(heap.is_empty());
        heap.insert(7);
        assert_eq!(heap.pop(), Ok(7));
    }

    #[test]
    fn test_empty_build_and_pop() {
        let mut heap: BinaryHeap<i32> = BinaryHeap::from_vec(Vec::new());
        assert!(heap.is_empty());
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.pop(), Err(HeapError::EmptyStructure));
        assert!(heap.is_empty());
    }

    #[test]
    fn test_extend_and_collect() {
        let mut heap: BinaryHeap<i32> = [5, 9, 1].into_iter().collect();
        heap.extend([0, 7]);
        assert_eq!(heap.len(), 5);
        assert!(heap.verify().is_ok());
        assert_eq!(heap.into_sorted_vec(), vec![0, 1, 5, 7, 9]);
    }

    #[test]
    fn test_ascending_insertion() {
        let mut heap = BinaryHeap::new();

        for i in 0..100 {
            heap.push(i);
        }

        for i in 0..100 {
            assert_eq!(heap.pop(), Ok(i));
        }
    }

    #[test]
    fn test_descending_insertion() {
        let mut heap = BinaryHeap::new();

        for i in (0..100).rev() {
            heap.push(i);
        }

        for i in 0..100 {
            assert_eq!(heap.pop(), Ok(i));
        }
    }

    #[test]
    fn test_verify_reports_foreign_selection() {
        static ZERO: i32 = 0;
        let heap = BinaryHeap::with_priority(vec![3, 1, 2], |_a, _b| &ZERO);

        // Nothing moves when the selector is unusable
        assert_eq!(heap.as_slice(), &[3, 1, 2]);
        assert_eq!(heap.verify(), Err(HeapError::InvalidPriorityFunction));
    }

    #[test]
    fn test_verify_reports_violation() {
        let reversed = Cell::new(false);
        let heap = BinaryHeap::with_priority(vec![3, 1, 2], |a, b| {
            if (a <= b) != reversed.get() {
                a
            } else {
                b
            }
        });
        assert!(heap.verify().is_ok());

        reversed.set(true);
        assert_eq!(
            heap.verify(),
            Err(HeapError::HeapPropertyViolated { index: 1 })
        );
    }
}
