//! baro-core
//!
//! Core types, traits, and aggregation pipelines shared across the baro
//! ecosystem.
//!
//! - `types`: correction records and the report structures built from them.
//! - `source`: the `RecordSource` trait implemented by storage backends.
//! - `window`: query time windows and the hour-bucket key format.
//! - `aggregate`: the ranking and mention-summary pipelines.
//!
//! Everything here is pure and request-scoped: an aggregator invocation owns
//! its intermediate maps and retains nothing between calls, so concurrent
//! requests need no coordination beyond whatever the `RecordSource`
//! implementation itself requires.
#![warn(missing_docs)]

/// Ranking and mention-summary aggregation pipelines.
pub mod aggregate;
mod error;
/// The `RecordSource` trait implemented by storage backends.
pub mod source;
pub mod types;
/// Query time windows and timestamp parsing.
pub mod window;

pub use aggregate::{UnknownTagPolicy, rank_buckets, summarize_mentions};
pub use error::BaroError;
pub use source::RecordSource;
pub use types::{BucketLabel, Channel, CorrectionRecord, MentionSummary, RankedBucket, RankedWord};
pub use window::{TIMESTAMP_FORMAT, TimeWindow, bucket_key};
