use core::fmt;
use core::iter::FusedIterator;

use alloc::slice;
use alloc::vec;

use super::Heap;
use crate::{Direction, TotalOrder};

/// An iterator over the elements of a `Heap`, in heap order.
///
/// This `struct` is created by [`Heap::iter()`]. See its
/// documentation for more.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    iter: slice::Iter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(iter: slice::Iter<'a, T>) -> Self {
        Iter { iter }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.iter.as_slice()).finish()
    }
}

// `#[derive(Clone)]` would needlessly require `T: Clone`
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { iter: self.iter.clone() }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    #[inline]
    fn last(self) -> Option<&'a T> {
        self.iter.last()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator that extracts the elements of a `Heap` in priority
/// order.
///
/// This `struct` is created by [`Heap::into_iter_sorted()`] and
/// [`Heap::iter_sorted()`], and by the [`IntoIterator`] implementations of
/// `Heap` and `&Heap`. Dropping it part way through needs no cleanup: the heap
/// it drains is its own.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct IntoIterSorted<T, D, O> {
    inner: Heap<T, D, O>,
}

impl<T: fmt::Debug, D, O> fmt::Debug for IntoIterSorted<T, D, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIterSorted").field(&self.inner).finish()
    }
}

impl<T, D, O> IntoIterSorted<T, D, O> {
    pub(super) fn new(inner: Heap<T, D, O>) -> Self {
        IntoIterSorted { inner }
    }
}

impl<T, D: Direction, O: TotalOrder<T>> Iterator for IntoIterSorted<T, D, O> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.extract()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.inner.len();
        (exact, Some(exact))
    }
}

impl<T, D: Direction, O: TotalOrder<T>> ExactSizeIterator for IntoIterSorted<T, D, O> {}

impl<T, D: Direction, O: TotalOrder<T>> FusedIterator for IntoIterSorted<T, D, O> {}

/// A draining iterator over the elements of a `Heap`, in heap order.
///
/// This `struct` is created by [`Heap::drain()`]. See its
/// documentation for more.
#[derive(Debug)]
pub struct Drain<'a, T: 'a> {
    iter: vec::Drain<'a, T>,
}

impl<'a, T> Drain<'a, T> {
    pub(super) fn new(iter: vec::Drain<'a, T>) -> Self {
        Drain { iter }
    }
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for Drain<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}

impl<T> FusedIterator for Drain<'_, T> {}
