//! Chart fetch state — app-owned, SDK-provided update logic.

use super::OhlcvRecord;
use crate::error::SdkError;

/// Token identifying one fetch attempt. Returned by [`ChartState::begin_fetch`]
/// and required to apply that attempt's outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchGeneration(u64);

/// Request lifecycle state for one chart view.
///
/// The app owns instances of this type. The SDK provides update methods.
///
/// Overlapping fetches are not serialized or cancelled; instead every
/// [`begin_fetch`](Self::begin_fetch) bumps a generation counter and a
/// completion carrying a stale generation is discarded wholesale, so a
/// superseded request can never overwrite state set by a later one.
#[derive(Debug, Clone, Default)]
pub struct ChartState {
    data: Vec<OhlcvRecord>,
    loading: bool,
    error: Option<String>,
    generation: u64,
}

impl ChartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalized records from the most recent successful fetch.
    pub fn data(&self) -> &[OhlcvRecord] {
        &self.data
    }

    /// True strictly while the newest request is in flight.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Failure message from the most recent completed fetch, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Mark a fetch as started: `loading = true`, `error` cleared.
    pub fn begin_fetch(&mut self) -> FetchGeneration {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        FetchGeneration(self.generation)
    }

    /// Apply a successful outcome for the given fetch attempt.
    ///
    /// `records = Some(..)` replaces `data` wholesale; `None` (the response
    /// carried no `dataset`) leaves existing data in place. Returns false if
    /// the attempt was superseded, in which case nothing changes.
    pub fn apply_success(
        &mut self,
        generation: FetchGeneration,
        records: Option<Vec<OhlcvRecord>>,
    ) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        if let Some(records) = records {
            self.data = records;
        }
        self.loading = false;
        true
    }

    /// Apply a failed outcome for the given fetch attempt.
    ///
    /// Sets `error` to the failure's message and leaves `data` at its
    /// previous value. Returns false if the attempt was superseded.
    pub fn apply_error(&mut self, generation: FetchGeneration, err: &SdkError) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.error = Some(err.display_message());
        self.loading = false;
        true
    }

    /// Drop all records and any error; does not affect an in-flight fetch.
    pub fn clear(&mut self) {
        self.data.clear();
        self.error = None;
    }

    fn is_current(&self, generation: FetchGeneration) -> bool {
        generation.0 == self.generation
    }
}
