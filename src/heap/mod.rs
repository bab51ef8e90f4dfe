//! A priority queue implemented with a binary heap.
//!
//! Insertion and extraction of the root have *O*(log(*n*)) time complexity.
//! Peeking at the root is *O*(1). A batch of values is appended in one pass
//! and the whole heap is then rebuilt bottom-up, which is *O*(*n*) rather than
//! the *O*(*n* log(*n*)) of inserting the values one at a time.
//!
//! # Examples
//!
//! A min-heap ordered by a runtime comparator:
//!
//! ```
//! use heapwise::{MinHeap, Presence};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Job {
//!     name: &'static str,
//!     cost: u32,
//! }
//!
//! impl Presence for Job {}
//!
//! let mut queue = MinHeap::with_order(|a: &Job, b: &Job| a.cost.cmp(&b.cost));
//! queue.insert(Job { name: "index", cost: 7 }).unwrap();
//! queue.insert(Job { name: "fetch", cost: 2 }).unwrap();
//! queue.insert(Job { name: "render", cost: 4 }).unwrap();
//!
//! let order: Vec<_> = queue.iter_sorted().map(|job| job.name).collect();
//! assert_eq!(order, ["fetch", "render", "index"]);
//!
//! // iterating did not consume the queue
//! assert_eq!(queue.len(), 3);
//! assert_eq!(queue.extract_min().map(|job| job.name), Some("fetch"));
//! ```

use core::fmt;
use core::mem::{swap, ManuallyDrop};
use core::ptr;

use alloc::vec::Vec;

use crate::diagnostics;
use crate::{
    BatchReport, Direction, HeapError, Insertion, Max, Min, OrdTotalOrder, Presence, SkipReason,
    TotalOrder,
};

mod iter;

pub use iter::{Drain, IntoIterSorted, Iter};

#[cfg(test)]
mod tests;

/// A priority queue implemented with a binary heap.
///
/// The element that leaves the heap first is the one favoured by the direction
/// `D` under the total order `O`: the least element for [`Min`], the greatest
/// for [`Max`]. Use the [`MinHeap`] and [`MaxHeap`] aliases to name the two.
///
/// It is a logic error for an item to be modified in such a way that its
/// ordering relative to any other item, as determined by the heap's total
/// order, changes while it is in the heap. This is normally only possible
/// through interior mutability, global state, I/O, or unsafe code. The
/// behavior resulting from such a logic error is not specified, but will be
/// encapsulated to the `Heap` that observed the logic error and not result in
/// undefined behavior.
///
/// # Examples
///
/// ```
/// use heapwise::MinHeap;
///
/// let mut heap = MinHeap::new();
///
/// // There's no items in there yet so we get None.
/// assert_eq!(heap.peek(), None);
///
/// heap.insert(5).unwrap();
/// heap.insert(1).unwrap();
/// heap.insert(2).unwrap();
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.len(), 3);
///
/// // Extraction is in priority order.
/// assert_eq!(heap.extract(), Some(1));
/// assert_eq!(heap.extract(), Some(2));
/// assert_eq!(heap.extract(), Some(5));
/// assert_eq!(heap.extract(), None);
/// ```
///
/// # Time complexity
///
/// | [insert]      | [batch_insert] | [extract]     | [peek] | [top_k]                  |
/// |---------------|----------------|---------------|--------|--------------------------|
/// | *O*(log(*n*)) | *O*(*n* + *m*) | *O*(log(*n*)) | *O*(1) | *O*(*n* + *k* log(*n*))  |
///
/// A heap that refuses duplicates additionally scans its elements on every
/// insertion.
///
/// [insert]: Heap::insert
/// [batch_insert]: Heap::batch_insert
/// [extract]: Heap::extract
/// [peek]: Heap::peek
/// [top_k]: Heap::top_k
pub struct Heap<T, D = Min, O = OrdTotalOrder> {
    data: Vec<T>,
    order: O,
    direction: D,
    allow_duplicates: bool,
}

/// A heap that yields its least element first.
pub type MinHeap<T, O = OrdTotalOrder> = Heap<T, Min, O>;

/// A heap that yields its greatest element first.
pub type MaxHeap<T, O = OrdTotalOrder> = Heap<T, Max, O>;

/// Construction-time configuration of a [`Heap`].
///
/// ```
/// use heapwise::{HeapOptions, MaxHeap};
///
/// let options = HeapOptions::new()
///     .order(|a: &i32, b: &i32| a.abs().cmp(&b.abs()))
///     .initial_data([3, -8, 5, 8])
///     .allow_duplicates(false);
///
/// // -8 and 8 are equal by magnitude, so the second is dropped
/// let heap = MaxHeap::with_options(options);
/// assert_eq!(heap.len(), 3);
/// assert_eq!(heap.peek(), Some(&-8));
/// ```
#[derive(Clone, Debug)]
pub struct HeapOptions<T, O = OrdTotalOrder> {
    order: O,
    initial_data: Vec<T>,
    allow_duplicates: bool,
}

impl<T> HeapOptions<T> {
    /// Options for an empty heap that orders by [`Ord`] and allows duplicates.
    #[must_use]
    pub fn new() -> Self {
        HeapOptions { order: OrdTotalOrder, initial_data: Vec::new(), allow_duplicates: true }
    }
}

impl<T, O: Default> Default for HeapOptions<T, O> {
    fn default() -> Self {
        HeapOptions { order: O::default(), initial_data: Vec::new(), allow_duplicates: true }
    }
}

impl<T, O> HeapOptions<T, O> {
    /// Replaces the total order.
    #[must_use]
    pub fn order<P>(self, order: P) -> HeapOptions<T, P> {
        HeapOptions {
            order,
            initial_data: self.initial_data,
            allow_duplicates: self.allow_duplicates,
        }
    }

    /// Values to heapify in bulk when the heap is built.
    #[must_use]
    pub fn initial_data<I: IntoIterator<Item = T>>(mut self, data: I) -> Self {
        self.initial_data = data.into_iter().collect();
        self
    }

    /// Whether values equal to one already held may be stored.
    #[must_use]
    pub fn allow_duplicates(mut self, allow: bool) -> Self {
        self.allow_duplicates = allow;
        self
    }
}

impl<T: Clone, D: Clone, O: Clone> Clone for Heap<T, D, O> {
    fn clone(&self) -> Self {
        Heap {
            data: self.data.clone(),
            order: self.order.clone(),
            direction: self.direction.clone(),
            allow_duplicates: self.allow_duplicates,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
        self.order.clone_from(&source.order);
        self.direction.clone_from(&source.direction);
        self.allow_duplicates = source.allow_duplicates;
    }
}

impl<T, D: Direction, O: Default> Default for Heap<T, D, O> {
    /// Creates an empty `Heap` that allows duplicates.
    #[inline]
    fn default() -> Self {
        Heap::with_order(O::default())
    }
}

impl<T: fmt::Debug, D, O> fmt::Debug for Heap<T, D, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, D: Direction> Heap<T, D> {
    /// Creates an empty heap that orders its elements by [`Ord`].
    ///
    /// # Examples
    ///
    /// ```
    /// use heapwise::MaxHeap;
    /// let mut heap = MaxHeap::new();
    /// heap.insert(4).unwrap();
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Heap::with_order(OrdTotalOrder)
    }

    /// Creates an empty heap that orders its elements by [`Ord`] and can hold at
    /// least `capacity` elements without reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Heap::with_capacity_and_order(capacity, OrdTotalOrder)
    }
}

impl<T, D: Direction, O> Heap<T, D, O> {
    /// Creates an empty heap that orders its elements by `order`.
    ///
    /// # Examples
    ///
    /// ```
    /// use heapwise::MinHeap;
    ///
    /// // shortest word first
    /// let mut heap = MinHeap::with_order(|a: &&str, b: &&str| a.len().cmp(&b.len()));
    /// heap.insert("heapify").unwrap();
    /// heap.insert("up").unwrap();
    /// assert_eq!(heap.peek(), Some(&"up"));
    /// ```
    #[must_use]
    pub fn with_order(order: O) -> Self {
        Heap { data: Vec::new(), order, direction: D::default(), allow_duplicates: true }
    }

    /// Creates an empty heap ordered by `order` with at least the specified
    /// capacity.
    #[must_use]
    pub fn with_capacity_and_order(capacity: usize, order: O) -> Self {
        Heap {
            data: Vec::with_capacity(capacity),
            order,
            direction: D::default(),
            allow_duplicates: true,
        }
    }
}

impl<T: Presence, D: Direction, O: TotalOrder<T>> Heap<T, D, O> {
    /// Creates a heap from `options`, heapifying its initial data in bulk.
    ///
    /// Initial values that are absent, or that duplicate an earlier value when
    /// duplicates are refused, are skipped exactly as by [`batch_insert`].
    ///
    /// [`batch_insert`]: Heap::batch_insert
    #[must_use]
    pub fn with_options(options: HeapOptions<T, O>) -> Self {
        let HeapOptions { order, initial_data, allow_duplicates } = options;
        let mut heap = Heap {
            data: Vec::with_capacity(initial_data.len()),
            order,
            direction: D::default(),
            allow_duplicates,
        };
        heap.batch_insert(initial_data);
        heap
    }

    /// Inserts a value into the heap.
    ///
    /// # Errors
    ///
    /// Fails with [`HeapError::InvalidValue`] if `value` is absent according to
    /// its [`Presence`] implementation; the heap is left unchanged.
    ///
    /// A heap that refuses duplicates returns [`Insertion::Duplicate`] instead
    /// of storing a value equal to one it already holds; this is not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use heapwise::{HeapError, HeapOptions, Insertion, MinHeap};
    ///
    /// let mut heap = MinHeap::with_options(HeapOptions::new().allow_duplicates(false));
    /// assert_eq!(heap.insert(Some(3)), Ok(Insertion::Inserted));
    /// assert_eq!(heap.insert(Some(3)), Ok(Insertion::Duplicate));
    /// assert_eq!(heap.insert(None), Err(HeapError::InvalidValue));
    /// assert_eq!(heap.len(), 1);
    /// ```
    ///
    /// # Time complexity
    ///
    /// *O*(log(*n*)) comparisons to restore the heap, plus *O*(*n*) when
    /// duplicates are refused.
    pub fn insert(&mut self, value: T) -> Result<Insertion, HeapError> {
        if value.is_absent() {
            return Err(HeapError::InvalidValue);
        }
        if !self.allow_duplicates && self.contains(&value) {
            diagnostics::skipped(None, SkipReason::Duplicate);
            return Ok(Insertion::Duplicate);
        }

        let old_len = self.len();
        self.data.push(value);
        // SAFETY: Since we pushed a new item it means that
        //  old_len = self.len() - 1 < self.len()
        unsafe { self.sift_up(0, old_len) };
        Ok(Insertion::Inserted)
    }

    /// Inserts many values at once, then rebuilds the heap bottom-up.
    ///
    /// Absent values are skipped, as are values equal to an element already
    /// held (or accepted earlier in the same batch) when duplicates are refused.
    /// Skipped values are handed back in the returned [`BatchReport`] and never
    /// cause an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use heapwise::{MaxHeap, SkipReason};
    ///
    /// let mut heap = MaxHeap::new();
    /// let report = heap.batch_insert([Some(4), None, Some(9)]);
    ///
    /// assert_eq!(report.inserted(), 2);
    /// assert_eq!(report.skipped()[0].index, 1);
    /// assert_eq!(report.skipped()[0].reason, SkipReason::Absent);
    /// assert_eq!(heap.extract_max(), Some(Some(9)));
    /// ```
    ///
    /// # Time complexity
    ///
    /// *O*(*n* + *m*) for *m* new values, plus *O*(*m* (*n* + *m*)) when
    /// duplicates are refused.
    pub fn batch_insert<I: IntoIterator<Item = T>>(&mut self, values: I) -> BatchReport<T> {
        let values = values.into_iter();
        let mut report = BatchReport::new();
        self.reserve(values.size_hint().0);

        let guard = RebuildOnDrop { first_changed: self.len(), heap: self };
        for (index, value) in values.enumerate() {
            if value.is_absent() {
                report.record_skipped(index, SkipReason::Absent, value);
            } else if !guard.heap.allow_duplicates && guard.heap.contains(&value) {
                report.record_skipped(index, SkipReason::Duplicate, value);
            } else {
                guard.heap.data.push(value);
                report.record_inserted();
            }
        }
        drop(guard);

        report
    }

    /// Moves all the elements of `other` into `self`, leaving `other` empty.
    ///
    /// The elements go through [`batch_insert`], so this heap's duplicate policy
    /// applies to them.
    ///
    /// [`batch_insert`]: Heap::batch_insert
    ///
    /// # Examples
    ///
    /// ```
    /// use heapwise::MinHeap;
    ///
    /// let mut a: MinHeap<i32> = [-10, 1, 2, 3, 3].into();
    /// let mut b: MinHeap<i32> = [-20, 5, 43].into();
    ///
    /// a.append(&mut b);
    ///
    /// assert_eq!(a.into_sorted_vec(), [-20, -10, 1, 2, 3, 3, 5, 43]);
    /// assert!(b.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) -> BatchReport<T> {
        self.batch_insert(other.data.drain(..))
    }
}

impl<T, D: Direction, O: TotalOrder<T>> Heap<T, D, O> {
    /// Assembles a heap around `data` and rebuilds it.
    ///
    /// The values are taken as they are: `data` must already satisfy the
    /// presence and duplicate policies, as a snapshot of another heap does.
    pub(crate) fn from_parts(data: Vec<T>, order: O, direction: D, allow_duplicates: bool) -> Self {
        let mut heap = Heap { data, order, direction, allow_duplicates };
        heap.rebuild();
        heap
    }

    /// Removes the root of the heap and returns it, or `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use heapwise::MaxHeap;
    /// let mut heap: MaxHeap<i32> = [1, 3].into();
    ///
    /// assert_eq!(heap.extract(), Some(3));
    /// assert_eq!(heap.extract(), Some(1));
    /// assert_eq!(heap.extract(), None);
    /// ```
    ///
    /// # Time complexity
    ///
    /// The worst case cost of `extract` on a heap containing *n* elements is
    /// *O*(log(*n*)).
    pub fn extract(&mut self) -> Option<T> {
        self.data.pop().map(|mut item| {
            if !self.is_empty() {
                swap(&mut item, &mut self.data[0]);
                // SAFETY: !self.is_empty() means that self.len() > 0
                unsafe { self.sift_down(0) };
            }
            item
        })
    }

    /// Whether the heap holds an element that its total order compares as
    /// [`Equal`](core::cmp::Ordering::Equal) to `value`.
    ///
    /// Only [`TotalOrder::cmp`] is consulted, so this agrees with the heap's
    /// ordering even when `T`'s [`PartialEq`] does not. This is a linear scan.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.data.iter().any(|item| self.order.cmp(item, value).is_eq())
    }

    /// Checks that no element outranks its parent.
    ///
    /// This always holds for heaps whose elements and total order behave; it is
    /// offered as a diagnostic.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let len = self.len();
        (0..len / 2).all(|parent| {
            [2 * parent + 1, 2 * parent + 2]
                .into_iter()
                .filter(|&child| child < len)
                .all(|child| {
                    !self.direction.prefers(&self.order, &self.data[child], &self.data[parent])
                })
        })
    }

    /// Retains only the elements specified by the predicate, then rebuilds the
    /// heap if anything but trailing leaves was removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use heapwise::MinHeap;
    ///
    /// let mut heap: MinHeap<i32> = [-10, -5, 1, 2, 4, 13].into();
    ///
    /// heap.retain(|x| x % 2 == 0); // only keep even numbers
    ///
    /// assert_eq!(heap.into_sorted_vec(), [-10, 2, 4])
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        let mut guard = RebuildOnDrop { first_changed: self.len(), heap: self };

        let mut i = 0;
        guard.heap.data.retain(|e| {
            let keep = f(e);
            if !keep && i < guard.first_changed {
                guard.first_changed = i;
            }
            i += 1;
            keep
        });
    }

    /// Consumes the heap and returns its elements in extraction order.
    ///
    /// The sort happens in place, without a second allocation.
    ///
    /// # Examples
    ///
    /// ```
    /// use heapwise::MaxHeap;
    ///
    /// let heap: MaxHeap<i32> = [1, 2, 4, 5, 7].into();
    /// assert_eq!(heap.into_sorted_vec(), [7, 5, 4, 2, 1]);
    /// ```
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut end = self.len();
        while end > 1 {
            end -= 1;
            // the root goes behind the shrinking heap, least favoured last
            self.data.swap(0, end);
            // SAFETY: `end` goes from `self.len() - 1` to 1 (both included) so:
            //  0 < 1 <= end <= self.len() - 1 < self.len()
            //  Which means 0 < end and end < self.len().
            unsafe { self.sift_down_range(0, end) };
        }
        // least favoured first until flipped
        self.data.reverse();
        self.into_vec()
    }

    /// Returns an iterator which extracts elements in priority order.
    /// This method consumes the heap.
    ///
    /// # Examples
    ///
    /// ```
    /// use heapwise::MaxHeap;
    /// let heap: MaxHeap<i32> = [1, 2, 3, 4, 5].into();
    ///
    /// assert_eq!(heap.into_iter_sorted().take(2).collect::<Vec<_>>(), [5, 4]);
    /// ```
    pub fn into_iter_sorted(self) -> IntoIterSorted<T, D, O> {
        IntoIterSorted::new(self)
    }

    // The implementations of sift_up and sift_down use unsafe blocks in
    // order to move an element out of the vector (leaving behind a
    // hole), shift along the others and move the removed element back into the
    // vector at the final location of the hole.
    // The `Hole` type is used to represent this, and make sure
    // the hole is filled back at the end of its scope, even on panic.
    // Using a hole reduces the constant factor compared to using swaps,
    // which involves twice as many moves.

    /// Moves the element at `pos` toward the root while it strictly outranks
    /// its parent, stopping at `start`.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `pos < self.len()`.
    unsafe fn sift_up(&mut self, start: usize, pos: usize) -> usize {
        // Take out the value at `pos` and create a hole.
        // SAFETY: The caller guarantees that pos < self.len()
        let mut hole = unsafe { Hole::new(&mut self.data, pos) };

        while hole.pos() > start {
            let parent = (hole.pos() - 1) / 2;

            // SAFETY: hole.pos() > start >= 0, which means hole.pos() > 0
            //  and so hole.pos() - 1 can't underflow.
            //  This guarantees that parent < hole.pos() so
            //  it's a valid index and also != hole.pos().
            if !self.direction.prefers(&self.order, hole.element(), unsafe { hole.get(parent) }) {
                break;
            }

            // SAFETY: Same as above
            unsafe { hole.move_to(parent) };
        }

        hole.pos()
    }

    /// Take an element at `pos` and move it down the heap, while one of its
    /// children within `end` outranks it.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `pos < end <= self.len()`.
    unsafe fn sift_down_range(&mut self, pos: usize, end: usize) {
        // SAFETY: The caller guarantees that pos < end <= self.len().
        let mut hole = unsafe { Hole::new(&mut self.data, pos) };
        let mut child = 2 * hole.pos() + 1;

        // Loop invariant: child == 2 * hole.pos() + 1.
        while child <= end.saturating_sub(2) {
            // the right child is chosen only when it strictly outranks the left
            // SAFETY: child < end - 1 < self.len() and
            //  child + 1 < end <= self.len(), so they're valid indexes.
            //  child == 2 * hole.pos() + 1 != hole.pos() and
            //  child + 1 == 2 * hole.pos() + 2 != hole.pos().
            child += unsafe {
                self.direction.prefers(&self.order, hole.get(child + 1), hole.get(child))
            } as usize;

            // if we are already in order, stop.
            // SAFETY: child is now either the old child or the old child+1
            //  We already proven that both are < self.len() and != hole.pos()
            if !self.direction.prefers(&self.order, unsafe { hole.get(child) }, hole.element()) {
                return;
            }

            // SAFETY: same as above.
            unsafe { hole.move_to(child) };
            child = 2 * hole.pos() + 1;
        }

        // SAFETY: && short circuit, which means that in the
        //  second condition it's already true that child == end - 1 < self.len().
        if child == end - 1
            && self.direction.prefers(&self.order, unsafe { hole.get(child) }, hole.element())
        {
            // SAFETY: child is already proven to be a valid index and
            //  child == 2 * hole.pos() + 1 != hole.pos().
            unsafe { hole.move_to(child) };
        }
    }

    /// # Safety
    ///
    /// The caller must guarantee that `pos < self.len()`.
    unsafe fn sift_down(&mut self, pos: usize) {
        let len = self.len();
        // SAFETY: pos < len is guaranteed by the caller and
        //  obviously len = self.len() <= self.len().
        unsafe { self.sift_down_range(pos, len) };
    }

    /// Bottom-up heapify: sift down every non-leaf, from the last one to the
    /// root.
    fn rebuild(&mut self) {
        let mut n = self.len() / 2;
        while n > 0 {
            n -= 1;
            // SAFETY: n starts from self.len() / 2 and goes down to 0.
            //  The only case when !(n < self.len()) is if
            //  self.len() == 0, but it's ruled out by the loop condition.
            unsafe { self.sift_down(n) };
        }
    }
}

impl<T: Clone, D: Direction, O: TotalOrder<T> + Clone> Heap<T, D, O> {
    /// Returns the `k` elements the heap would extract *last*, most extreme
    /// first: the `k` greatest of a min-heap in descending order, or the `k`
    /// least of a max-heap in ascending order.
    ///
    /// Asking for at least [`len`] elements returns all of them in that order;
    /// asking for none returns an empty vector. The heap itself is left
    /// untouched.
    ///
    /// [`len`]: Heap::len
    ///
    /// # Examples
    ///
    /// ```
    /// use heapwise::{MaxHeap, MinHeap};
    ///
    /// let min: MinHeap<i32> = [5, 3, 7, 1, 9].into();
    /// assert_eq!(min.top_k(2), [9, 7]);
    /// assert_eq!(min.len(), 5);
    ///
    /// let max: MaxHeap<i32> = [5, 3, 7, 1, 9].into();
    /// assert_eq!(max.top_k(2), [1, 3]);
    /// assert_eq!(max.top_k(10), [1, 3, 5, 7, 9]);
    /// assert!(max.top_k(0).is_empty());
    /// ```
    ///
    /// # Time complexity
    ///
    /// *O*(*n* + *k* log(*n*)): the snapshot is heapified in the opposite
    /// direction and drained `k` times.
    #[must_use]
    pub fn top_k(&self, k: usize) -> Vec<T> {
        if k == 0 {
            return Vec::new();
        }

        let reversed = Heap::from_parts(
            self.data.clone(),
            self.order.clone(),
            self.direction.opposite(),
            self.allow_duplicates,
        );
        let count = k.min(reversed.len());
        reversed.into_iter_sorted().take(count).collect()
    }

    /// Returns every element in extraction order: ascending for a min-heap,
    /// descending for a max-heap. The heap itself is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use heapwise::MinHeap;
    ///
    /// let heap: MinHeap<i32> = [4, 1, 3].into();
    /// assert_eq!(heap.sort(), [1, 3, 4]);
    /// assert_eq!(heap.len(), 3);
    /// ```
    #[must_use]
    pub fn sort(&self) -> Vec<T> {
        self.iter_sorted().collect()
    }

    /// Returns an iterator over a private copy of the heap, yielding elements
    /// in extraction order.
    ///
    /// The heap is not borrowed past this call, and every call starts afresh.
    ///
    /// # Examples
    ///
    /// ```
    /// use heapwise::MinHeap;
    ///
    /// let heap: MinHeap<i32> = [3, 1, 2].into();
    /// assert_eq!(heap.iter_sorted().collect::<Vec<_>>(), [1, 2, 3]);
    /// assert_eq!(heap.iter_sorted().next(), Some(1));
    /// ```
    pub fn iter_sorted(&self) -> IntoIterSorted<T, D, O> {
        self.clone().into_iter_sorted()
    }
}

impl<T, O: TotalOrder<T>> Heap<T, Min, O> {
    /// Removes and returns the least element, as [`extract`](Heap::extract).
    pub fn extract_min(&mut self) -> Option<T> {
        self.extract()
    }
}

impl<T, O: TotalOrder<T>> Heap<T, Max, O> {
    /// Removes and returns the greatest element, as [`extract`](Heap::extract).
    pub fn extract_max(&mut self) -> Option<T> {
        self.extract()
    }
}

impl<T, D, O> Heap<T, D, O> {
    /// Returns an iterator visiting all values in the underlying vector, in
    /// heap (not sorted) order.
    ///
    /// # Examples
    ///
    /// ```
    /// use heapwise::MinHeap;
    /// let heap: MinHeap<i32> = [1, 2, 3, 4].into();
    ///
    /// // Print 1, 2, 3, 4 in arbitrary order
    /// for x in heap.iter() {
    ///     println!("{x}");
    /// }
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.data.iter())
    }

    /// Returns the root of the heap, or `None` if it is empty.
    ///
    /// # Time complexity
    ///
    /// Cost is *O*(1) in the worst case.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// The total order the heap was built with.
    pub fn order(&self) -> &O {
        &self.order
    }

    /// The heap's direction.
    pub fn direction(&self) -> &D {
        &self.direction
    }

    /// Whether values equal to one already held may be inserted.
    #[must_use]
    pub fn allows_duplicates(&self) -> bool {
        self.allow_duplicates
    }

    /// Returns the number of elements the heap can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves capacity for at least `additional` elements more than the
    /// current length.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows [`usize`].
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Discards as much additional capacity as possible.
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Returns a slice of all values in the underlying vector, in heap order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    /// Returns a copy of the underlying vector, in heap (not sorted) order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    /// Consumes the heap and returns the underlying vector in heap order.
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_vec(self) -> Vec<T> {
        self.into()
    }

    /// Returns the number of elements in the heap.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks if the heap is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the heap, returning an iterator over the removed elements in heap
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use heapwise::MinHeap;
    /// let mut heap: MinHeap<i32> = [1, 3].into();
    ///
    /// assert_eq!(heap.drain().count(), 2);
    /// assert!(heap.is_empty());
    /// ```
    #[inline]
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain::new(self.data.drain(..))
    }

    /// Drops all items from the heap, keeping its allocation.
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

/// Rebuilds the heap when dropped if anything at or after `first_changed` was
/// touched, so that the invariant is restored even if a comparison or predicate
/// panics part way through.
struct RebuildOnDrop<'a, T, D: Direction, O: TotalOrder<T>> {
    heap: &'a mut Heap<T, D, O>,
    first_changed: usize,
}

impl<T, D: Direction, O: TotalOrder<T>> Drop for RebuildOnDrop<'_, T, D, O> {
    fn drop(&mut self) {
        // data[..first_changed] is untouched; removing trailing leaves alone
        // keeps the heap valid
        if self.first_changed < self.heap.len() {
            self.heap.rebuild();
        }
    }
}

/// Hole represents a hole in a slice i.e., an index without valid value
/// (because it was moved from or duplicated).
/// In drop, `Hole` will restore the slice by filling the hole
/// position with the value that was originally removed.
struct Hole<'a, T: 'a> {
    data: &'a mut [T],
    elt: ManuallyDrop<T>,
    pos: usize,
}

impl<'a, T> Hole<'a, T> {
    /// Create a new `Hole` at index `pos`.
    ///
    /// Unsafe because pos must be within the data slice.
    #[inline]
    unsafe fn new(data: &'a mut [T], pos: usize) -> Self {
        debug_assert!(pos < data.len());
        // SAFE: pos should be inside the slice
        let elt = unsafe { ptr::read(data.get_unchecked(pos)) };
        Hole { data, elt: ManuallyDrop::new(elt), pos }
    }

    #[inline]
    fn pos(&self) -> usize {
        self.pos
    }

    /// Returns a reference to the element removed.
    #[inline]
    fn element(&self) -> &T {
        &self.elt
    }

    /// Returns a reference to the element at `index`.
    ///
    /// Unsafe because index must be within the data slice and not equal to pos.
    #[inline]
    unsafe fn get(&self, index: usize) -> &T {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        unsafe { self.data.get_unchecked(index) }
    }

    /// Move hole to new location
    ///
    /// Unsafe because index must be within the data slice and not equal to pos.
    #[inline]
    unsafe fn move_to(&mut self, index: usize) {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        unsafe {
            let ptr = self.data.as_mut_ptr();
            let index_ptr: *const _ = ptr.add(index);
            let hole_ptr = ptr.add(self.pos);
            ptr::copy_nonoverlapping(index_ptr, hole_ptr, 1);
        }
        self.pos = index;
    }
}

impl<T> Drop for Hole<'_, T> {
    #[inline]
    fn drop(&mut self) {
        // fill the hole again
        unsafe {
            let pos = self.pos;
            ptr::copy_nonoverlapping(&*self.elt, self.data.get_unchecked_mut(pos), 1);
        }
    }
}

impl<T: Presence, D: Direction, O: TotalOrder<T> + Default> From<Vec<T>> for Heap<T, D, O> {
    /// Heapifies a vector in bulk, skipping absent values.
    fn from(vec: Vec<T>) -> Self {
        Heap::with_options(HeapOptions::default().initial_data(vec))
    }
}

impl<T: Presence, D: Direction, O: TotalOrder<T> + Default, const N: usize> From<[T; N]>
    for Heap<T, D, O>
{
    /// ```
    /// use heapwise::MinHeap;
    ///
    /// let mut h1: MinHeap<i32> = MinHeap::from([1, 4, 2, 3]);
    /// let mut h2: MinHeap<i32> = [1, 4, 2, 3].into();
    /// while let Some((a, b)) = h1.extract().zip(h2.extract()) {
    ///     assert_eq!(a, b);
    /// }
    /// ```
    fn from(arr: [T; N]) -> Self {
        Self::from_iter(arr)
    }
}

impl<T, D, O> From<Heap<T, D, O>> for Vec<T> {
    /// Converts a `Heap<T>` into a `Vec<T>` in heap order.
    ///
    /// This conversion requires no data movement or allocation, and has
    /// constant time complexity.
    fn from(heap: Heap<T, D, O>) -> Vec<T> {
        heap.data
    }
}

impl<T: Presence, D: Direction, O: TotalOrder<T> + Default> FromIterator<T> for Heap<T, D, O> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Heap::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T, D: Direction, O: TotalOrder<T>> IntoIterator for Heap<T, D, O> {
    type Item = T;
    type IntoIter = IntoIterSorted<T, D, O>;

    /// Creates a consuming iterator that extracts each value in priority order.
    ///
    /// # Examples
    ///
    /// ```
    /// use heapwise::MaxHeap;
    /// let heap: MaxHeap<i32> = [1, 2, 3, 4].into();
    ///
    /// assert_eq!(heap.into_iter().collect::<Vec<_>>(), [4, 3, 2, 1]);
    /// ```
    fn into_iter(self) -> IntoIterSorted<T, D, O> {
        self.into_iter_sorted()
    }
}

impl<T: Clone, D: Direction, O: TotalOrder<T> + Clone> IntoIterator for &Heap<T, D, O> {
    type Item = T;
    type IntoIter = IntoIterSorted<T, D, O>;

    /// Iterates over a fresh copy of the heap in priority order; see
    /// [`Heap::iter_sorted`].
    fn into_iter(self) -> IntoIterSorted<T, D, O> {
        self.iter_sorted()
    }
}

impl<T: Presence, D: Direction, O: TotalOrder<T>> Extend<T> for Heap<T, D, O> {
    /// Inserts every value through [`Heap::batch_insert`], discarding the report.
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.batch_insert(iter);
    }
}

impl<'a, T, D, O> Extend<&'a T> for Heap<T, D, O>
where
    T: 'a + Presence + Copy,
    D: Direction,
    O: TotalOrder<T>,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}
