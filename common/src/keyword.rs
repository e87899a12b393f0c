//! Shared keyword record model.

use serde::{Deserialize, Serialize};

use crate::tag::KeywordTag;


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KeywordRecord {
    pub id: u64,
    pub title: String,
    pub tags: Vec<KeywordTag>,
    pub starred: bool,
    pub location: SearchLocation,
    pub latest_rank: Option<RankSample>,
    pub stats: Option<KeywordStats>,
    pub search_volume: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchLocation {
    /// Lowercase ISO 3166-1 alpha-2 code, e.g. "dk".
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RankSample {
    pub position: Option<f64>,
    pub previous_position: Option<f64>,
    pub landing_pages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KeywordStats {
    pub clicks: u64,
    pub impressions: u64,
    pub previous_clicks: u64,
    pub previous_impressions: u64,
}

impl KeywordRecord {
    pub fn position(&self) -> Option<f64> {
        self.latest_rank.as_ref().and_then(|s| s.position)
    }

    pub fn landing_pages(&self) -> &[String] {
        self.latest_rank
            .as_ref()
            .map(|s| s.landing_pages.as_slice())
            .unwrap_or(&[])
    }

    pub fn clicks(&self) -> Option<u64> {
        self.stats.as_ref().map(|s| s.clicks)
    }

    pub fn impressions(&self) -> Option<u64> {
        self.stats.as_ref().map(|s| s.impressions)
    }

    /// Position movement since the previous sample. Positive means the keyword
    /// moved up the results page (8 -> 3 is +5).
    pub fn position_delta(&self) -> Option<f64> {
        let sample = self.latest_rank.as_ref()?;
        Some(sample.previous_position? - sample.position?)
    }

    pub fn clicks_delta(&self) -> Option<i64> {
        self.stats
            .as_ref()
            .map(|s| s.clicks as i64 - s.previous_clicks as i64)
    }

    pub fn impressions_delta(&self) -> Option<i64> {
        self.stats
            .as_ref()
            .map(|s| s.impressions as i64 - s.previous_impressions as i64)
    }

    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t.matches_name(name))
    }
}
