//! Mock record source for CI-safe tests and examples.
//!
//! `MockSource` serves deterministic in-memory records filtered by the
//! requested window, or a forced connectivity failure when built with
//! [`MockSource::failing`].

use async_trait::async_trait;
use baro_core::{BaroError, CorrectionRecord, RecordSource, window::TimeWindow};

mod fixtures;

pub use fixtures::fixture_records;

enum Behavior {
    Serve(Vec<CorrectionRecord>),
    FailConnectivity,
}

/// In-memory record source with deterministic data.
pub struct MockSource {
    behavior: Behavior,
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    /// Source backed by the built-in fixture data.
    #[must_use]
    pub fn new() -> Self {
        Self::with_records(fixture_records())
    }

    /// Source backed by the given records.
    #[must_use]
    pub fn with_records(records: Vec<CorrectionRecord>) -> Self {
        Self {
            behavior: Behavior::Serve(records),
        }
    }

    /// Source whose every fetch fails with a connectivity error.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            behavior: Behavior::FailConnectivity,
        }
    }
}

#[async_trait]
impl RecordSource for MockSource {
    fn name(&self) -> &'static str {
        "baro-mock"
    }

    async fn fetch(&self, window: &TimeWindow) -> Result<Vec<CorrectionRecord>, BaroError> {
        match &self.behavior {
            Behavior::FailConnectivity => Err(BaroError::connectivity(self.name())),
            Behavior::Serve(records) => Ok(records
                .iter()
                .filter(|r| window.contains(r.ts))
                .cloned()
                .collect()),
        }
    }
}
