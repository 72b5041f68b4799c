//! Deterministic fixture records covering three hours across all channels.

use baro_core::{CorrectionRecord, window::parse_timestamp};

fn rec(ts: &str, inc: &str, cor: &str, tag: &str, count: u64, rank: u32) -> CorrectionRecord {
    CorrectionRecord {
        // Fixture timestamps are literals; a parse failure here is a bug in
        // this file, so panicking is acceptable.
        ts: parse_timestamp(ts).expect("fixture timestamp"),
        incorrect_word: inc.into(),
        correct_word: cor.into(),
        tag: tag.into(),
        occurrence_count: count,
        rank,
    }
}

/// Three hours of correction records over the three channels, with enough
/// overlap in words and rank numbers to exercise merging and dedup paths.
#[must_use]
pub fn fixture_records() -> Vec<CorrectionRecord> {
    vec![
        // 04:00 — all three channels active.
        rec("2023-08-28 04:00:00", "궃이", "굳이", "news", 31, 1),
        rec("2023-08-28 04:00:00", "역활", "역할", "news", 28, 2),
        rec("2023-08-28 04:00:00", "일부로", "일부러", "news", 26, 3),
        rec("2023-08-28 04:00:00", "곰곰히", "곰곰이", "webtoon", 24, 1),
        rec("2023-08-28 04:00:00", "일찍기", "일찍이", "webtoon", 23, 2),
        rec("2023-08-28 04:00:00", "깨끗히", "깨끗이", "youtube", 22, 1),
        rec("2023-08-28 04:00:00", "가벼히", "가벼이", "youtube", 21, 2),
        // 05:00 — news only.
        rec("2023-08-28 05:00:00", "금새", "금세", "news", 19, 1),
        rec("2023-08-28 05:00:00", "궃이", "굳이", "news", 17, 2),
        // 06:00 — webtoon and youtube, with a rank collision across tags.
        rec("2023-08-28 06:00:00", "역활", "역할", "webtoon", 35, 1),
        rec("2023-08-28 06:00:00", "궃이", "굳이", "youtube", 30, 1),
        rec("2023-08-28 06:00:00", "일부로", "일부러", "youtube", 12, 2),
    ]
}
