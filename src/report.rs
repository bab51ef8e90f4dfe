use alloc::vec::Vec;
use core::fmt;

/// The outcome of a successful [`Heap::insert`](crate::Heap::insert).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Insertion {
    /// The value was stored.
    Inserted,
    /// The heap refuses duplicates and already held an equal value; nothing was
    /// stored.
    Duplicate,
}

impl Insertion {
    /// Whether the value was stored.
    #[must_use]
    pub fn is_inserted(self) -> bool {
        self == Insertion::Inserted
    }
}

/// Why a value was not stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// The value is absent according to its [`Presence`](crate::Presence).
    Absent,
    /// The heap refuses duplicates and an equal value was already present, either
    /// in the heap or earlier in the same batch.
    Duplicate,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SkipReason::Absent => "absent value",
            SkipReason::Duplicate => "duplicate value",
        })
    }
}

/// A batch entry that was not stored, handed back to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Skipped<T> {
    /// Position of the entry within the batch.
    pub index: usize,
    /// Why it was skipped.
    pub reason: SkipReason,
    /// The entry itself.
    pub value: T,
}

/// What [`Heap::batch_insert`](crate::Heap::batch_insert) did with its input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchReport<T> {
    inserted: usize,
    skipped: Vec<Skipped<T>>,
}

impl<T> BatchReport<T> {
    pub(crate) fn new() -> Self {
        BatchReport { inserted: 0, skipped: Vec::new() }
    }

    pub(crate) fn record_inserted(&mut self) {
        self.inserted += 1;
    }

    pub(crate) fn record_skipped(&mut self, index: usize, reason: SkipReason, value: T) {
        crate::diagnostics::skipped(Some(index), reason);
        self.skipped.push(Skipped { index, reason, value });
    }

    /// Number of entries actually stored.
    #[must_use]
    pub fn inserted(&self) -> usize {
        self.inserted
    }

    /// Entries that were not stored, in batch order.
    #[must_use]
    pub fn skipped(&self) -> &[Skipped<T>] {
        &self.skipped
    }

    /// Whether every entry was stored.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Takes back ownership of the entries that were not stored.
    #[must_use]
    pub fn into_skipped(self) -> Vec<Skipped<T>> {
        self.skipped
    }
}
