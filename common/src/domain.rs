//! Shared tracked-domain record model.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DomainRecord {
    pub id: u64,
    pub display_name: String,
    pub keyword_count: u64,
    pub average_position: Option<f64>,
    pub previous_average_position: Option<f64>,
    pub clicks: u64,
    pub impressions: u64,
    /// Keywords currently ranking in the top three results.
    pub top_three_count: u64,
}

impl DomainRecord {
    /// Positive when the domain average moved up the results page.
    pub fn average_position_delta(&self) -> Option<f64> {
        Some(self.previous_average_position? - self.average_position?)
    }
}
