//! Priority policies
//!
//! A heap in this crate is ordered by a *selector*: a function that is handed
//! two elements and returns whichever of the two should come out of the heap
//! first. It must hand back one of its own arguments, never a derived value,
//! because the heap decides whether to swap by checking which operand came
//! back.
//!
//! Two policies are built in:
//!
//! - [`MinFirst`]: smallest element first (the default, a min-heap)
//! - [`MaxFirst`]: largest element first (a max-heap)
//!
//! Any closure of the right shape is also a policy:
//!
//! ```rust
//! use selector_heap::binary::BinaryHeap;
//! use selector_heap::Heap;
//!
//! // Longest string first
//! let mut heap = BinaryHeap::with_priority(vec!["bb", "a", "ccc"], |a, b| {
//!     if a.len() >= b.len() { a } else { b }
//! });
//! assert_eq!(heap.pop(), Ok("ccc"));
//! ```
//!
//! # Ties
//!
//! Sift-up asks `select(element, parent)` and swaps when the element comes
//! back. Sift-down asks `select(current, child)` and swaps when the child
//! comes back. Choosing between siblings asks `select(left, right)`. With a
//! selector that returns the first operand on ties (both built-in policies
//! do), a newly inserted element climbs past equal parents, while sift-down
//! leaves an equal parent in place and equal siblings resolve to the left.

/// Selects the higher-priority of two elements
pub trait Priority<T> {
    /// Returns whichever of `a` and `b` has the higher priority
    ///
    /// Must return one of its two arguments and must be consistent: the same
    /// inputs always select the same operand.
    fn select<'a>(&self, a: &'a T, b: &'a T) -> &'a T;
}

/// Lowest value first, producing a min-heap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinFirst;

impl<T: Ord> Priority<T> for MinFirst {
    #[inline]
    fn select<'a>(&self, a: &'a T, b: &'a T) -> &'a T {
        if a <= b {
            a
        } else {
            b
        }
    }
}

/// Highest value first, producing a max-heap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxFirst;

impl<T: Ord> Priority<T> for MaxFirst {
    #[inline]
    fn select<'a>(&self, a: &'a T, b: &'a T) -> &'a T {
        if a >= b {
            a
        } else {
            b
        }
    }
}

impl<T, F> Priority<T> for F
where
    F: for<'a> Fn(&'a T, &'a T) -> &'a T,
{
    #[inline]
    fn select<'a>(&self, a: &'a T, b: &'a T) -> &'a T {
        self(a, b)
    }
}
