//! Common traits for heap data structures
//!
//! This module provides the [`Heap`] trait, the operation surface shared by
//! every heap flavour in this crate, and [`HeapError`], the error type those
//! operations report.
//!
//! The trait is ordering-agnostic: whether a heap yields its minimum, its
//! maximum or something else entirely is decided by the
//! [`Priority`](crate::priority::Priority) policy it was built with.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The heap holds no elements
    EmptyStructure,
    /// The priority selector returned a value that was neither of its operands
    InvalidPriorityFunction,
    /// The element at `index` is preferred over its parent
    HeapPropertyViolated {
        /// Index (0-based, heap order) of the offending child
        index: usize,
    },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyStructure => write!(f, "heap is empty"),
            HeapError::InvalidPriorityFunction => {
                write!(f, "priority function returned neither of its operands")
            }
            HeapError::HeapPropertyViolated { index } => {
                write!(f, "element at index {index} has higher priority than its parent")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for heap/priority queue data structures
///
/// The API mirrors Rust's `BinaryHeap` with two differences: the element
/// popped first is whichever one the heap's priority policy selects, and
/// popping an empty heap is an error rather than `None`.
///
/// # Example
///
/// ```rust
/// use selector_heap::Heap;
/// use selector_heap::binary::BinaryHeap;
///
/// let mut heap = BinaryHeap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.pop(), Ok(1));
/// ```
pub trait Heap<T> {
    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, item: T);

    /// Returns the highest-priority element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the highest-priority element
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyStructure`] if the heap is empty. The heap is
    /// not modified in that case.
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Result<T, HeapError>;
}
