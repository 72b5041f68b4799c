use indexmap::IndexMap;

use crate::window::bucket_key;
use crate::{BaroError, Channel, CorrectionRecord, MentionSummary};

/// What to do with a record whose tag is outside the fixed channel set.
///
/// The channel set is closed by design; an unrecognized tag means the record
/// source's contract changed underneath us. Neither option counts it under a
/// known channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownTagPolicy {
    /// Abort the whole aggregation with `BaroError::UnknownChannel`.
    #[default]
    Reject,
    /// Accumulate the count under an `other` counter (still part of `total`).
    FoldIntoOther,
}

/// Build the mention-summary report: one entry per distinct hour timestamp,
/// in the order buckets are first seen in the input stream.
///
/// No re-sort is applied — output order is chronological only if the source
/// returns records in time order. Per bucket, occurrence counts are summed
/// into `total` and the matching channel counter, and the distinct
/// incorrect/correct forms of records matching `search_word` (on either
/// side of the pair) are collected in first-seen order.
///
/// # Errors
/// `BaroError::NoData` when `records` is empty; `BaroError::UnknownChannel`
/// when a tag falls outside the channel set under the `Reject` policy. The
/// aggregation is all-or-nothing: a rejected record discards the whole
/// result, never a partial one.
pub fn summarize_mentions(
    records: &[CorrectionRecord],
    search_word: &str,
    policy: UnknownTagPolicy,
) -> Result<Vec<MentionSummary>, BaroError> {
    if records.is_empty() {
        return Err(BaroError::NoData);
    }

    let mut buckets: IndexMap<String, MentionSummary> = IndexMap::new();
    for r in records {
        let key = bucket_key(r.ts);
        let summary = buckets
            .entry(key.clone())
            .or_insert_with(|| MentionSummary::empty(key, search_word));

        match Channel::from_tag(&r.tag) {
            Some(channel) => *summary.channel_mut(channel) += r.occurrence_count,
            None => match policy {
                UnknownTagPolicy::Reject => return Err(BaroError::unknown_channel(&r.tag)),
                UnknownTagPolicy::FoldIntoOther => summary.other += r.occurrence_count,
            },
        }
        summary.total += r.occurrence_count;

        if r.incorrect_word == search_word || r.correct_word == search_word {
            if !summary.incorrect_word.contains(&r.incorrect_word) {
                summary.incorrect_word.push(r.incorrect_word.clone());
            }
            if !summary.correct_word.contains(&r.correct_word) {
                summary.correct_word.push(r.correct_word.clone());
            }
        }
    }

    Ok(buckets.into_values().collect())
}
