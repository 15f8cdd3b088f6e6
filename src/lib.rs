//! Binary heap with a pluggable priority selector
//!
//! This crate provides an array-backed binary heap whose ordering is defined
//! by a single function: given two elements, return the one that should leave
//! the heap first. A smallest-first selector gives a min-heap, a
//! largest-first selector gives a max-heap, and any other selector gives the
//! corresponding custom ordering, all from the same sift-up and sift-down
//! code.
//!
//! # Features
//!
//! - **Linear-time build**: bottom-up heapify from an existing `Vec`
//! - **O(log n) insert and pop** with O(1) `peek` and `len`
//! - **Pluggable ordering**: [`MinFirst`](priority::MinFirst),
//!   [`MaxFirst`](priority::MaxFirst), or any selector closure
//! - **Self-check**: [`verify`](binary::BinaryHeap::verify) walks the tree and
//!   reports the first heap-property violation
//!
//! # Example
//!
//! ```rust
//! use selector_heap::binary::BinaryHeap;
//! use selector_heap::{Heap, HeapError};
//!
//! let mut heap = BinaryHeap::from_vec(vec![2, 7, 4, 1, 8, 1]);
//! heap.insert(0);
//! assert_eq!(heap.pop(), Ok(0));
//! assert_eq!(heap.pop(), Ok(1));
//! assert_eq!(heap.len(), 5);
//!
//! let mut empty: BinaryHeap<i32> = BinaryHeap::new();
//! assert_eq!(empty.pop(), Err(HeapError::EmptyStructure));
//! ```
//!
//! # Concurrency
//!
//! Heaps are plain owned values with no internal synchronization. Share one
//! across threads behind a mutex that guards each whole operation.

pub mod binary;
pub mod priority;
pub mod traits;

// Re-export the main trait for convenience
pub use traits::{Heap, HeapError};
