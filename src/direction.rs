use crate::TotalOrder;
use core::cmp::Ordering;
use core::fmt::Debug;

/// The direction of a heap: which end of its [`TotalOrder`] leaves the heap
/// first.
///
/// A direction is a zero-sized capability value rather than a subtype; the heap
/// engine consults it at every comparison and is otherwise identical for both
/// directions.
pub trait Direction: Copy + Default + Debug {
    /// The direction that yields elements in the reverse order.
    type Opposite: Direction<Opposite = Self>;

    /// Orients a verdict of the heap's total order so that [`Ordering::Less`]
    /// means "has priority".
    fn orient(&self, ordering: Ordering) -> Ordering;

    /// Returns the opposite direction.
    fn opposite(&self) -> Self::Opposite;

    /// Whether `this` strictly outranks `that` under `order` in this direction.
    #[inline]
    fn prefers<T: ?Sized, O: TotalOrder<T>>(&self, order: &O, this: &T, that: &T) -> bool {
        self.orient(order.cmp(this, that)) == Ordering::Less
    }
}

/// Smallest element first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Min;

/// Greatest element first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Max;

impl Direction for Min {
    type Opposite = Max;

    #[inline]
    fn orient(&self, ordering: Ordering) -> Ordering {
        ordering
    }

    #[inline]
    fn opposite(&self) -> Max {
        Max
    }
}

impl Direction for Max {
    type Opposite = Min;

    #[inline]
    fn orient(&self, ordering: Ordering) -> Ordering {
        ordering.reverse()
    }

    #[inline]
    fn opposite(&self) -> Min {
        Min
    }
}
