//! Metadata record of an article

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Part-of-speech tag → number of occurrences
///
/// Ordered by tag so that persisting the same counts twice yields the same
/// bytes.
pub type PosFrequencies = BTreeMap<String, u64>;

/// Metadata harvested together with the raw text
///
/// All fields except `pos_frequencies` are written once at harvest time.
/// `pos_frequencies` is added by the POS frequency stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleMeta {
    /// Author name as published
    pub author: String,

    /// Article title
    pub title: String,

    /// Keywords, in publication order
    #[serde(default)]
    pub topics: Vec<String>,

    /// Submission date
    #[serde(with = "date_format")]
    pub date: NaiveDateTime,

    /// Tag frequencies computed by stage 2
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos_frequencies: Option<PosFrequencies>,
}

impl ArticleMeta {
    /// Create a metadata record without POS frequencies
    pub fn new(
        author: impl Into<String>,
        title: impl Into<String>,
        topics: Vec<String>,
        date: NaiveDateTime,
    ) -> Self {
        Self {
            author: author.into(),
            title: title.into(),
            topics,
            date,
            pos_frequencies: None,
        }
    }
}

/// Key under which stage 2 stores tag frequencies
pub const POS_FREQUENCIES_KEY: &str = "pos_frequencies";

/// Serialization of dates as `YYYY-MM-DD HH:MM:SS`
pub mod date_format {
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    /// Date format used in metadata files
    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    /// Serialize a date
    pub fn serialize<S>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    /// Deserialize a date
    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}
