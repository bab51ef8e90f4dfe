//! An array-backed binary heap whose ordering is supplied at runtime.
//!
//! A single heap engine, [`Heap`], is parameterised by a [`Direction`] value
//! ([`Min`] or [`Max`]) and a [`TotalOrder`] over its elements.  The two
//! directions share every algorithm (sift-up, sift-down, bottom-up heapify and
//! the derived operations) and differ only in how the comparator's verdict is
//! oriented.
//!
//! ```
//! use heapwise::{MaxHeap, MinHeap};
//!
//! let mut heap = MinHeap::new();
//! for x in [5, 3, 7, 1, 9] {
//!     heap.insert(x).unwrap();
//! }
//!
//! // the two largest values of a min-heap, most extreme first
//! assert_eq!(heap.top_k(2), [9, 7]);
//! assert_eq!(heap.len(), 5);
//!
//! assert_eq!(heap.extract_min(), Some(1));
//! assert_eq!(heap.sort(), [3, 5, 7, 9]);
//!
//! // longest word first
//! let mut words = MaxHeap::with_order(|a: &&str, b: &&str| a.len().cmp(&b.len()));
//! words.batch_insert(["heap", "sift", "heapify", "up"]);
//! assert_eq!(words.extract_max(), Some("heapify"));
//! ```
//!
//! Values that are *absent* according to [`Presence`] (`None`, a NaN float) are
//! refused with [`HeapError::InvalidValue`]; every other anomaly, such as a
//! duplicate under a no-duplicates policy, is reported through the return value
//! and a `tracing` event instead of an error.
#![cfg_attr(not(any(feature = "std", test)), no_std)]
// documentation controls
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![deny(missing_docs)]

extern crate alloc;

use core::cmp::Ordering;

mod default;
mod diagnostics;
mod direction;
mod error;
pub mod heap;
mod presence;
mod report;

pub use default::OrdTotalOrder;
pub use direction::{Direction, Max, Min};
pub use error::HeapError;
pub use heap::{Heap, HeapOptions, MaxHeap, MinHeap};
pub use presence::Presence;
pub use report::{BatchReport, Insertion, SkipReason, Skipped};

/// A total order over values of type `T`, supplied to a [`Heap`] at runtime.
///
/// `cmp(a, b)` returning [`Ordering::Less`] means that `a` sorts before `b`;
/// the heap's [`Direction`] then decides whether "sorts before" means "leaves
/// the heap first".
///
/// Any closure or function of type `Fn(&T, &T) -> Ordering` is a total order.
///
/// It is a logic error for the order to be inconsistent, for example to report
/// `a < b` and `b < a` at once, or to change its verdict while elements are
/// held by a heap.  The behaviour resulting from such a logic error is not
/// specified but is encapsulated to the heap that observed it.
pub trait TotalOrder<T: ?Sized> {
    /// Compares `this` with `that`.
    fn cmp(&self, this: &T, that: &T) -> Ordering;

    /// Whether `this` and `that` compare equal.
    fn eq(&self, this: &T, that: &T) -> bool {
        self.cmp(this, that).is_eq()
    }
    /// Whether `this` and `that` do not compare equal.
    fn ne(&self, this: &T, that: &T) -> bool {
        self.cmp(this, that).is_ne()
    }

    /// Whether `this` sorts after or alongside `that`.
    fn ge(&self, this: &T, that: &T) -> bool {
        self.cmp(this, that).is_ge()
    }
    /// Whether `this` sorts after `that`.
    fn gt(&self, this: &T, that: &T) -> bool {
        self.cmp(this, that).is_gt()
    }
    /// Whether `this` sorts before or alongside `that`.
    fn le(&self, this: &T, that: &T) -> bool {
        self.cmp(this, that).is_le()
    }
    /// Whether `this` sorts before `that`.
    fn lt(&self, this: &T, that: &T) -> bool {
        self.cmp(this, that).is_lt()
    }
}

impl<T: ?Sized, F> TotalOrder<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn cmp(&self, this: &T, that: &T) -> Ordering {
        self(this, that)
    }
}
