use std::sync::Arc;

use baro::{Baro, BucketLabel};
use baro_core::window::{TimeWindow, parse_timestamp};
use baro_mock::MockSource;

fn fixture_window() -> TimeWindow {
    TimeWindow::new(
        parse_timestamp("2023-08-28 00:00:00").unwrap(),
        parse_timestamp("2023-08-28 23:00:00").unwrap(),
    )
    .unwrap()
}

fn baro() -> Baro {
    Baro::builder()
        .with_source(Arc::new(MockSource::new()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn merged_report_covers_every_fixture_hour() {
    let out = baro().rank(fixture_window(), None).await.unwrap();

    let stamps: Vec<_> = out.iter().map(|b| b.timestamp.as_str()).collect();
    assert_eq!(
        stamps,
        [
            "2023-08-28 04:00:00",
            "2023-08-28 05:00:00",
            "2023-08-28 06:00:00"
        ]
    );
    assert!(out.iter().all(|b| b.label == BucketLabel::Total));
    for bucket in &out {
        for pair in bucket.words.windows(2) {
            assert!(pair[0].occurrence_count >= pair[1].occurrence_count);
        }
    }
}

#[tokio::test]
async fn fixture_rank_collision_drops_the_lower_count_pair() {
    // The 06:00 fixture hour carries rank 1 from both webtoon and youtube.
    let out = baro().rank(fixture_window(), None).await.unwrap();
    let six = out.iter().find(|b| b.timestamp.ends_with("06:00:00")).unwrap();

    assert_eq!(six.words.len(), 2);
    assert_eq!(six.words[0].incorrect_word, "역활");
    assert!(six.words.iter().all(|w| w.rank != 1 || w.incorrect_word == "역활"));
}

#[tokio::test]
async fn tag_filter_skips_hours_without_that_tag() {
    let out = baro().rank(fixture_window(), Some("webtoon")).await.unwrap();

    let stamps: Vec<_> = out.iter().map(|b| b.timestamp.as_str()).collect();
    assert_eq!(stamps, ["2023-08-28 04:00:00", "2023-08-28 06:00:00"]);
    assert!(
        out.iter()
            .all(|b| b.label == BucketLabel::Tag("webtoon".into()))
    );
}

#[tokio::test]
async fn unmatched_tag_yields_empty_report() {
    let out = baro().rank(fixture_window(), Some("sports")).await.unwrap();
    assert!(out.is_empty());
}

#[tokio::test]
async fn serialized_shape_uses_the_tag_as_key() {
    let out = baro().rank(fixture_window(), Some("news")).await.unwrap();
    let json = serde_json::to_value(&out).unwrap();

    assert!(json[0]["news"].is_array());
    assert!(json[0].get("total").is_none());
}
