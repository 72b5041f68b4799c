use baro_core::window::parse_timestamp;
use baro_core::{BaroError, CorrectionRecord, UnknownTagPolicy, summarize_mentions};

fn rec(ts: &str, inc: &str, cor: &str, tag: &str, count: u64, rank: u32) -> CorrectionRecord {
    CorrectionRecord {
        ts: parse_timestamp(ts).unwrap(),
        incorrect_word: inc.into(),
        correct_word: cor.into(),
        tag: tag.into(),
        occurrence_count: count,
        rank,
    }
}

#[test]
fn sums_channels_and_collects_matching_words() {
    let records = vec![
        rec("2023-08-28 04:00:00", "궃이", "굳이", "news", 31, 1),
        rec("2023-08-28 04:00:00", "역활", "역할", "webtoon", 28, 2),
    ];
    let out = summarize_mentions(&records, "궃이", UnknownTagPolicy::Reject).unwrap();

    let json = serde_json::to_value(&out).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "timestamp": "2023-08-28 04:00:00",
            "total": 59,
            "news": 31,
            "webtoon": 28,
            "youtube": 0,
            "search_word": "궃이",
            "incorrect_word": ["궃이"],
            "correct_word": ["굳이"]
        }])
    );
}

#[test]
fn matches_on_either_side_of_the_pair() {
    let records = vec![rec("2023-08-28 04:00:00", "궃이", "굳이", "news", 5, 1)];
    // Searching for the corrected form also collects the pair.
    let out = summarize_mentions(&records, "굳이", UnknownTagPolicy::Reject).unwrap();
    assert_eq!(out[0].incorrect_word, vec!["궃이"]);
    assert_eq!(out[0].correct_word, vec!["굳이"]);
}

#[test]
fn word_lists_deduplicate_but_keep_first_seen_order() {
    let records = vec![
        rec("2023-08-28 04:00:00", "궃이", "굳이", "news", 5, 1),
        rec("2023-08-28 04:00:00", "궃이", "굳이", "webtoon", 3, 1),
        rec("2023-08-28 04:00:00", "구지", "굳이", "youtube", 2, 2),
    ];
    let out = summarize_mentions(&records, "굳이", UnknownTagPolicy::Reject).unwrap();

    assert_eq!(out[0].incorrect_word, vec!["궃이", "구지"]);
    assert_eq!(out[0].correct_word, vec!["굳이"]);
}

#[test]
fn buckets_keep_first_seen_input_order() {
    // Deliberately out of time order; the summary performs no sort.
    let records = vec![
        rec("2023-08-28 06:00:00", "궃이", "굳이", "news", 1, 1),
        rec("2023-08-28 04:00:00", "궃이", "굳이", "news", 1, 1),
        rec("2023-08-28 06:00:00", "역활", "역할", "webtoon", 1, 1),
    ];
    let out = summarize_mentions(&records, "궃이", UnknownTagPolicy::Reject).unwrap();

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].timestamp, "2023-08-28 06:00:00");
    assert_eq!(out[0].total, 2);
    assert_eq!(out[1].timestamp, "2023-08-28 04:00:00");
}

#[test]
fn empty_input_is_no_data() {
    assert!(matches!(
        summarize_mentions(&[], "궃이", UnknownTagPolicy::Reject),
        Err(BaroError::NoData)
    ));
}

#[test]
fn unknown_tag_rejects_whole_aggregation() {
    let records = vec![
        rec("2023-08-28 04:00:00", "궃이", "굳이", "news", 5, 1),
        rec("2023-08-28 04:00:00", "역활", "역할", "sports", 3, 1),
    ];
    let err = summarize_mentions(&records, "궃이", UnknownTagPolicy::Reject).unwrap_err();
    match err {
        BaroError::UnknownChannel { tag } => assert_eq!(tag, "sports"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn unknown_tag_folds_into_other_when_asked() {
    let records = vec![
        rec("2023-08-28 04:00:00", "궃이", "굳이", "news", 5, 1),
        rec("2023-08-28 04:00:00", "역활", "역할", "sports", 3, 1),
    ];
    let out = summarize_mentions(&records, "궃이", UnknownTagPolicy::FoldIntoOther).unwrap();

    assert_eq!(out[0].other, 3);
    assert_eq!(out[0].total, 8);
    assert_eq!(out[0].news, 5);
}

#[test]
fn rerunning_yields_identical_output() {
    let records = vec![
        rec("2023-08-28 04:00:00", "궃이", "굳이", "news", 5, 1),
        rec("2023-08-28 05:00:00", "궃이", "굳이", "webtoon", 3, 1),
    ];
    let once = summarize_mentions(&records, "궃이", UnknownTagPolicy::Reject).unwrap();
    let twice = summarize_mentions(&records, "궃이", UnknownTagPolicy::Reject).unwrap();
    assert_eq!(once, twice);
}
