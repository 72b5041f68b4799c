use std::collections::HashSet;

use baro_core::{CorrectionRecord, UnknownTagPolicy, summarize_mentions};
use chrono::{DateTime, Utc};
use proptest::prelude::*;

const TAGS: [&str; 5] = ["news", "webtoon", "youtube", "sports", "blog"];
const WORDS: [&str; 4] = ["궃이", "굳이", "역활", "역할"];

fn arb_record() -> impl Strategy<Value = CorrectionRecord> {
    (
        0u32..4,
        0usize..TAGS.len(),
        0usize..WORDS.len(),
        0usize..WORDS.len(),
        0u64..500,
        1u32..12,
    )
        .prop_map(|(h, tag_idx, inc_idx, cor_idx, occurrence_count, rank)| CorrectionRecord {
            ts: DateTime::<Utc>::from_timestamp(1_693_180_800 + i64::from(h) * 3600, 0).unwrap(),
            incorrect_word: WORDS[inc_idx].to_string(),
            correct_word: WORDS[cor_idx].to_string(),
            tag: TAGS[tag_idx].to_string(),
            occurrence_count,
            rank,
        })
}

proptest! {
    #[test]
    fn totals_equal_channel_sums(records in proptest::collection::vec(arb_record(), 1..150)) {
        let out =
            summarize_mentions(&records, "궃이", UnknownTagPolicy::FoldIntoOther).unwrap();
        for s in &out {
            prop_assert_eq!(s.total, s.news + s.webtoon + s.youtube + s.other);
        }

        // Grand total matches the raw input sum.
        let emitted: u64 = out.iter().map(|s| s.total).sum();
        let raw: u64 = records.iter().map(|r| r.occurrence_count).sum();
        prop_assert_eq!(emitted, raw);
    }

    #[test]
    fn word_lists_are_duplicate_free_and_idempotent(
        records in proptest::collection::vec(arb_record(), 1..150),
        search_idx in 0usize..WORDS.len(),
    ) {
        let search = WORDS[search_idx];
        let once = summarize_mentions(&records, search, UnknownTagPolicy::FoldIntoOther).unwrap();
        let twice = summarize_mentions(&records, search, UnknownTagPolicy::FoldIntoOther).unwrap();
        prop_assert_eq!(&once, &twice);

        for s in &once {
            let inc: HashSet<&String> = s.incorrect_word.iter().collect();
            prop_assert_eq!(inc.len(), s.incorrect_word.len());
            let cor: HashSet<&String> = s.correct_word.iter().collect();
            prop_assert_eq!(cor.len(), s.correct_word.len());
        }
    }

    #[test]
    fn one_summary_per_distinct_bucket(records in proptest::collection::vec(arb_record(), 1..150)) {
        let out =
            summarize_mentions(&records, "궃이", UnknownTagPolicy::FoldIntoOther).unwrap();
        let keys: HashSet<&str> = out.iter().map(|s| s.timestamp.as_str()).collect();
        prop_assert_eq!(keys.len(), out.len());

        let distinct_inputs: HashSet<i64> = records.iter().map(|r| r.ts.timestamp()).collect();
        prop_assert_eq!(out.len(), distinct_inputs.len());
    }
}
