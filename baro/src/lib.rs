//! baro
//!
//! High-level reporting API over pre-computed word-correction records.
//!
//! Construct a [`Baro`] with a [`RecordSource`](baro_core::RecordSource)
//! implementation, then ask it for one of the two report views:
//!
//! - [`Baro::rank`]: per hour bucket, the top-10 word pairs by occurrence
//!   count, merged across tags or filtered to one tag.
//! - [`Baro::mentions`]: per hour bucket, occurrence totals per channel and
//!   the word forms matching a search term.
//!
//! Each call fetches once from the source, aggregates in memory, and returns;
//! nothing is retained between calls.
//!
//! ```no_run
//! use std::sync::Arc;
//! use baro::{Baro, RecordSource, TimeWindow};
//!
//! # async fn demo(source: Arc<dyn RecordSource>) -> Result<(), baro::BaroError> {
//! let baro = Baro::builder().with_source(source).build()?;
//! let _buckets = baro.rank(TimeWindow::last_24h(), Some("news")).await?;
//! # Ok(())
//! # }
//! ```
#![warn(missing_docs)]

mod core;
mod report;

pub use crate::core::{Baro, BaroBuilder};
pub use baro_core::{
    BaroError, BucketLabel, Channel, CorrectionRecord, MentionSummary, RankedBucket, RankedWord,
    RecordSource, TimeWindow, UnknownTagPolicy,
};
