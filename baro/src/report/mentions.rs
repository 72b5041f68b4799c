use tracing::debug;

use baro_core::window::TimeWindow;
use baro_core::{BaroError, MentionSummary, summarize_mentions};

use crate::Baro;

impl Baro {
    /// Build the mention-summary report for the window.
    ///
    /// One entry per hour bucket in first-seen source order, each carrying
    /// per-channel occurrence totals and the distinct word forms matching
    /// `search_word` on either side of the correction pair.
    ///
    /// # Errors
    /// `BaroError::NoData` when the window matched zero records;
    /// `BaroError::UnknownChannel` for an out-of-set tag under the `Reject`
    /// policy; plus whatever the record source raises.
    pub async fn mentions(
        &self,
        window: TimeWindow,
        search_word: &str,
    ) -> Result<Vec<MentionSummary>, BaroError> {
        let records = self.source.fetch(&window).await?;
        debug!(
            source = self.source.name(),
            records = records.len(),
            search_word,
            "building mention summary"
        );
        summarize_mentions(&records, search_word, self.unknown_tag_policy)
    }
}
