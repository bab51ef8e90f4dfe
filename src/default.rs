//! The default total order, which makes a heap compare its elements as per their
//! [`Ord`] implementation.

use crate::TotalOrder;
use core::cmp::Ordering;

/// A zero-sized total order that delegates to the [`Ord`] implementation of the
/// elements being compared.
///
/// This is the order used by heaps that are not given one explicitly: a
/// [`MinHeap`](crate::MinHeap) then yields its smallest element first and a
/// [`MaxHeap`](crate::MaxHeap) its greatest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct OrdTotalOrder;

impl<T: ?Sized + Ord> TotalOrder<T> for OrdTotalOrder {
    // Delegate to `T`'s implementation of [`Ord`].
    fn cmp(&self, this: &T, that: &T) -> Ordering {
        this.cmp(that)
    }

    // The default implementations of the following methods are overridden so that
    // they delegate to `T`'s implementations of [`PartialEq`] and [`PartialOrd`]
    // rather than merely using its implementation of [`Ord`].
    //
    // If, as required by those traits, `T`'s implementations are consistent with
    // one another, then these overrides will have no effect.

    fn eq(&self, this: &T, that: &T) -> bool {
        this == that
    }
    fn ne(&self, this: &T, that: &T) -> bool {
        this != that
    }

    fn ge(&self, this: &T, that: &T) -> bool {
        this >= that
    }
    fn gt(&self, this: &T, that: &T) -> bool {
        this > that
    }
    fn le(&self, this: &T, that: &T) -> bool {
        this <= that
    }
    fn lt(&self, this: &T, that: &T) -> bool {
        this < that
    }
}
