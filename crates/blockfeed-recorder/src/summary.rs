//! Run summaries.

/// Unit counts for one orchestration run.
///
/// A unit is one discovery source or one block, depending on the loop.
/// Failed units were logged and skipped; the run itself completed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Units processed and written (or legitimately empty).
    pub recorded: usize,
    /// Units skipped after an error.
    pub failed: usize,
}

impl RunSummary {
    /// Returns true if every unit was recorded.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.failed == 0
    }
}
