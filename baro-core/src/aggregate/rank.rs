use std::collections::{BTreeMap, HashSet};

use indexmap::IndexMap;

use crate::window::bucket_key;
use crate::{BaroError, BucketLabel, CorrectionRecord, RankedBucket, RankedWord};

/// Cap on the number of entries emitted per bucket.
pub const MAX_BUCKET_ENTRIES: usize = 10;

/// Build the ranking report: one bucket per distinct hour timestamp, in
/// ascending order, each holding at most ten word pairs sorted by occurrence
/// count descending.
///
/// With `tag = Some(t)`, buckets that contain no records for `t` are omitted
/// from the output entirely — a deliberate omission, not a zero-filled
/// entry — and surviving buckets emit their list under the tag key. With
/// `tag = None`, every bucket merges all tags into one list emitted under
/// `"total"`.
///
/// # Errors
/// Returns `BaroError::NoData` when `records` is empty. A nonempty input
/// whose buckets are all skipped by the tag filter is *not* `NoData`; it
/// yields `Ok` with an empty vector.
pub fn rank_buckets(
    records: &[CorrectionRecord],
    tag: Option<&str>,
) -> Result<Vec<RankedBucket>, BaroError> {
    if records.is_empty() {
        return Err(BaroError::NoData);
    }

    // Outer map: bucket keys are fixed-width timestamp strings, so BTreeMap
    // iteration is chronological. Inner map: tags in first-seen input order,
    // which fixes the flatten order and therefore the tie-break and rank
    // dedup outcomes below.
    let mut buckets: BTreeMap<String, IndexMap<String, Vec<RankedWord>>> = BTreeMap::new();
    for r in records {
        buckets
            .entry(bucket_key(r.ts))
            .or_default()
            .entry(r.tag.clone())
            .or_default()
            .push(RankedWord::from(r));
    }

    let mut out = Vec::with_capacity(buckets.len());
    for (timestamp, mut by_tag) in buckets {
        let (label, words) = match tag {
            Some(t) => match by_tag.shift_remove(t) {
                Some(words) => (BucketLabel::Tag(t.to_string()), words),
                None => continue,
            },
            None => {
                let merged: Vec<RankedWord> = by_tag.into_values().flatten().collect();
                (BucketLabel::Total, merged)
            }
        };
        out.push(RankedBucket {
            timestamp,
            label,
            words: top_ranked(words),
        });
    }
    Ok(out)
}

/// Sort by occurrence count descending, drop rank collisions, cap at ten.
///
/// The sort is stable, so equal counts keep their scan order. Rank dedup is
/// first-seen-wins: when merging tags puts two different word pairs under
/// the same rank number, the later one is silently dropped rather than
/// reported. Surprising, but it is the established output contract.
fn top_ranked(mut words: Vec<RankedWord>) -> Vec<RankedWord> {
    words.sort_by(|a, b| b.occurrence_count.cmp(&a.occurrence_count));

    let mut seen: HashSet<u32> = HashSet::new();
    let mut out = Vec::with_capacity(MAX_BUCKET_ENTRIES);
    for w in words {
        if seen.insert(w.rank) {
            out.push(w);
        }
        if out.len() >= MAX_BUCKET_ENTRIES {
            break;
        }
    }
    out
}
