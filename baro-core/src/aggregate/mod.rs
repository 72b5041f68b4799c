//! Aggregation pipelines over raw correction records.
//!
//! Both pipelines group records into hour buckets keyed by the formatted
//! timestamp; they differ in the per-bucket reduction. `rank` re-ranks word
//! pairs and caps each bucket at ten entries; `mention` sums occurrence
//! counts per channel and collects word forms matching a search term.

/// Per-channel mention totals and search-word matching.
pub mod mention;
/// Top-10 ranking per hour bucket.
pub mod rank;

pub use mention::{UnknownTagPolicy, summarize_mentions};
pub use rank::{MAX_BUCKET_ENTRIES, rank_buckets};
