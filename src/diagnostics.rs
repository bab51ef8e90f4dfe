//! Structured events for entries a heap declined to store.

use crate::SkipReason;

cfg_if::cfg_if! {
    if #[cfg(feature = "tracing")] {
        /// Reports a skipped value; `index` is its position within a batch.
        pub(crate) fn skipped(index: Option<usize>, reason: SkipReason) {
            match index {
                Some(index) => tracing::warn!(
                    target: "heapwise",
                    index,
                    reason = %reason,
                    "skipping batch entry"
                ),
                None => tracing::warn!(target: "heapwise", reason = %reason, "skipping insert"),
            }
        }
    } else {
        #[inline(always)]
        pub(crate) fn skipped(_index: Option<usize>, _reason: SkipReason) {}
    }
}
