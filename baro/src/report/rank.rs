use tracing::debug;

use baro_core::window::TimeWindow;
use baro_core::{BaroError, RankedBucket, rank_buckets};

use crate::Baro;

impl Baro {
    /// Build the ranking report for the window.
    ///
    /// With `tag = Some(t)`, each emitted bucket holds `t`'s top-10 list and
    /// buckets without that tag are omitted; with `tag = None`, all tags are
    /// merged into one top-10 `total` list per bucket. Buckets come back in
    /// ascending timestamp order.
    ///
    /// # Errors
    /// `BaroError::NoData` when the window matched zero records, plus
    /// whatever the record source raises (`Connectivity`, `Source`).
    pub async fn rank(
        &self,
        window: TimeWindow,
        tag: Option<&str>,
    ) -> Result<Vec<RankedBucket>, BaroError> {
        let records = self.source.fetch(&window).await?;
        debug!(
            source = self.source.name(),
            records = records.len(),
            tag,
            "building ranking report"
        );
        rank_buckets(&records, tag)
    }
}
