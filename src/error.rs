use thiserror::Error;

/// Errors that abort a heap operation, leaving the heap unchanged.
///
/// Soft conditions (duplicates under a no-duplicates policy, extraction from an
/// empty heap) are not errors: they are reported through return values such as
/// [`Insertion`](crate::Insertion) and [`BatchReport`](crate::BatchReport).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum HeapError {
    /// The value is absent according to its [`Presence`](crate::Presence)
    /// implementation, and heaps never hold absence markers.
    #[error("heaps cannot hold an absent value")]
    InvalidValue,
}
