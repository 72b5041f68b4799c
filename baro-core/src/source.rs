use async_trait::async_trait;

use crate::window::TimeWindow;
use crate::{BaroError, CorrectionRecord};

/// Storage backend supplying correction records for a time window.
///
/// Implementations must be safe for concurrent invocation; the aggregation
/// layer holds no state of its own and may call `fetch` from any number of
/// requests at once.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Short stable name, used in error messages and logs.
    fn name(&self) -> &'static str;

    /// Fetch all records whose timestamp falls inside `window`.
    ///
    /// An empty vector means "nothing matched" and is not an error; that
    /// distinction belongs to the caller.
    ///
    /// # Errors
    /// `BaroError::Connectivity` when the backing store is unreachable,
    /// `BaroError::Source` for any other backend failure.
    async fn fetch(&self, window: &TimeWindow) -> Result<Vec<CorrectionRecord>, BaroError>;
}
