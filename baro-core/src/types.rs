//! Correction records and the report structures built from them.

use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// One pre-computed word-correction row from the backing store.
///
/// Immutable once fetched; aggregators read it and never persist it. `ts` is
/// already hour-aligned upstream, and `rank` is a popularity ordinal assigned
/// within that hour+tag bucket — it is *not* unique across tags sharing an
/// hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionRecord {
    /// Hour-aligned observation time.
    pub ts: DateTime<Utc>,
    /// The misspelled form as observed.
    pub incorrect_word: String,
    /// The corrected form.
    pub correct_word: String,
    /// Open-set content-category label ("news", "webtoon", "youtube", ...).
    pub tag: String,
    /// Times this pair was observed in that hour for that tag.
    pub occurrence_count: u64,
    /// Upstream popularity rank within the hour+tag bucket.
    pub rank: u32,
}

/// One ranked word pair in a bucket's top-10 list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedWord {
    /// The misspelled form.
    pub incorrect_word: String,
    /// The corrected form.
    pub correct_word: String,
    /// Observed occurrences backing this entry.
    pub occurrence_count: u64,
    /// Upstream rank carried through from the source record.
    pub rank: u32,
}

impl From<&CorrectionRecord> for RankedWord {
    fn from(r: &CorrectionRecord) -> Self {
        Self {
            incorrect_word: r.incorrect_word.clone(),
            correct_word: r.correct_word.clone(),
            occurrence_count: r.occurrence_count,
            rank: r.rank,
        }
    }
}

/// Key under which a ranked bucket's word list is emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BucketLabel {
    /// All tags merged; serialized under `"total"`.
    Total,
    /// A single requested tag; serialized under the tag string itself.
    Tag(String),
}

impl BucketLabel {
    /// The JSON object key this label serializes under.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Total => "total",
            Self::Tag(tag) => tag,
        }
    }
}

/// One hour bucket of the ranking report.
///
/// Serializes with a dynamic second key, matching the wire shape
/// `{"timestamp": "...", "total": [...]}` or `{"timestamp": "...", "<tag>": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedBucket {
    /// Formatted hour-bucket key.
    pub timestamp: String,
    /// Key under which `words` is emitted.
    pub label: BucketLabel,
    /// Top entries, occurrence count descending, at most ten.
    pub words: Vec<RankedWord>,
}

impl Serialize for RankedBucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("timestamp", &self.timestamp)?;
        map.serialize_entry(self.label.key(), &self.words)?;
        map.end()
    }
}

/// The fixed channel set counted by the mention-summary report.
///
/// Deliberately closed, unlike the open `tag` key the ranking path groups
/// by: the summary carries one counter per channel, so a new upstream tag is
/// a contract change, not something to absorb silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// News-article comments.
    News,
    /// Webtoon comments.
    Webtoon,
    /// YouTube comments.
    Youtube,
}

impl Channel {
    /// All channels, in wire order.
    pub const ALL: [Self; 3] = [Self::News, Self::Webtoon, Self::Youtube];

    /// Map an open-set record tag onto a channel, if it is one.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "news" => Some(Self::News),
            "webtoon" => Some(Self::Webtoon),
            "youtube" => Some(Self::Youtube),
            _ => None,
        }
    }

    /// The channel's wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::News => "news",
            Self::Webtoon => "webtoon",
            Self::Youtube => "youtube",
        }
    }
}

/// One hour bucket of the mention-summary report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionSummary {
    /// Formatted hour-bucket key.
    pub timestamp: String,
    /// Sum of all channel counters (including `other`).
    pub total: u64,
    /// Occurrences attributed to the news channel.
    pub news: u64,
    /// Occurrences attributed to the webtoon channel.
    pub webtoon: u64,
    /// Occurrences attributed to the youtube channel.
    pub youtube: u64,
    /// Occurrences folded from unrecognized tags; omitted from the wire
    /// shape when zero so the historical three-channel output is unchanged.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub other: u64,
    /// The search term this summary was built for.
    pub search_word: String,
    /// Distinct misspelled forms matching the search term, first-seen order.
    pub incorrect_word: Vec<String>,
    /// Distinct corrected forms matching the search term, first-seen order.
    pub correct_word: Vec<String>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(n: &u64) -> bool {
    *n == 0
}

impl MentionSummary {
    /// Fresh summary for a newly seen bucket.
    #[must_use]
    pub fn empty(timestamp: String, search_word: &str) -> Self {
        Self {
            timestamp,
            total: 0,
            news: 0,
            webtoon: 0,
            youtube: 0,
            other: 0,
            search_word: search_word.to_string(),
            incorrect_word: Vec::new(),
            correct_word: Vec::new(),
        }
    }

    /// Mutable counter for the given channel.
    pub fn channel_mut(&mut self, channel: Channel) -> &mut u64 {
        match channel {
            Channel::News => &mut self.news,
            Channel::Webtoon => &mut self.webtoon,
            Channel::Youtube => &mut self.youtube,
        }
    }
}
