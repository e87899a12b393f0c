//! Filter configuration decoded from the browser URL query string.
//!
//! The query string is the source of truth for every table filter: a flat
//! mapping of string keys to string values. Recognized keys are `starred`,
//! `search`, `tags`, `landingPages`, `country`, the threshold triples
//! `{rank,clicks,impressions}{Type,Value1,Value2}` and the sort pair
//! `sort` / `dir`.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FilterParams(pub BTreeMap<String, String>);

impl FilterParams {
    pub fn from_query(query: &str) -> Self {
        let mut map = BTreeMap::new();
        for pair in query.trim_start_matches('?').split('&') {
            if pair.is_empty() {
                continue;
            }
            let (key, value) = match pair.split_once('=') {
                Some((k, v)) => (k, v),
                None => (pair, ""),
            };
            let key = percent_decode(key);
            let value = percent_decode(value);
            if !key.is_empty() {
                map.insert(key, value);
            }
        }
        FilterParams(map)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|v| v.as_str()).filter(|v| !v.is_empty())
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.0.remove(key);
        } else {
            self.0.insert(key.to_string(), value);
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.0.remove(key);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn starred_only(&self) -> bool {
        matches!(self.get("starred"), Some("true") | Some("1"))
    }

    /// Comma-separated search terms, lowercased. Empty when the filter is off.
    pub fn search_terms(&self) -> Vec<String> {
        split_lowercase_list(self.get("search"))
    }

    /// Selected tag names; a record must carry all of them.
    pub fn tag_names(&self) -> Vec<String> {
        self.get("tags")
            .map(|v| {
                v.split(',')
                    .map(|t| t.trim().to_string())
                    .filter(|t| !t.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn landing_page_terms(&self) -> Vec<String> {
        split_lowercase_list(self.get("landingPages"))
    }

    pub fn country(&self) -> Option<&str> {
        self.get("country")
    }

    /// The threshold triple for one metric, or `None` when the filter is off
    /// or its parameters are malformed (malformed triples are logged and
    /// treated as absent so the table still renders).
    pub fn threshold(&self, metric: ThresholdMetric) -> Option<ThresholdFilter> {
        let prefix = metric.key_prefix();
        let op_raw = self.get(&format!("{prefix}Type"))?;
        let op = match op_raw.parse::<ThresholdOp>() {
            Ok(op) => op,
            Err(_) => {
                warn!("ignoring {prefix} filter with unknown operator {op_raw:?}");
                return None;
            }
        };
        let value1_raw = self.get(&format!("{prefix}Value1"))?;
        let value1 = match value1_raw.parse::<f64>() {
            Ok(v) => v,
            Err(_) => {
                warn!("ignoring {prefix} filter with unparsable bound {value1_raw:?}");
                return None;
            }
        };
        let value2 = self
            .get(&format!("{prefix}Value2"))
            .and_then(|v| v.parse::<f64>().ok());
        Some(ThresholdFilter { op, value1, value2 })
    }

    pub fn sort_field(&self) -> Option<&str> {
        self.get("sort")
    }

    pub fn sort_descending(&self) -> bool {
        self.get("dir") == Some("desc")
    }

    pub fn to_query_string(&self) -> String {
        let mut parts = Vec::with_capacity(self.0.len());
        for (key, value) in &self.0 {
            parts.push(format!("{}={}", percent_encode(key), percent_encode(value)));
        }
        parts.join("&")
    }
}

impl Display for FilterParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_query_string())
    }
}

impl From<&str> for FilterParams {
    fn from(query: &str) -> Self {
        FilterParams::from_query(query)
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThresholdMetric {
    Rank,
    Clicks,
    Impressions,
}

impl ThresholdMetric {
    pub fn key_prefix(&self) -> &'static str {
        match self {
            Self::Rank => "rank",
            Self::Clicks => "clicks",
            Self::Impressions => "impressions",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThresholdOp {
    Equals,
    Greater,
    Less,
    Between,
}

impl FromStr for ThresholdOp {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equals" => Ok(Self::Equals),
            "greater" => Ok(Self::Greater),
            "less" => Ok(Self::Less),
            "between" => Ok(Self::Between),
            _ => Err(()),
        }
    }
}

impl ThresholdOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equals => "equals",
            Self::Greater => "greater",
            Self::Less => "less",
            Self::Between => "between",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdFilter {
    pub op: ThresholdOp,
    pub value1: f64,
    pub value2: Option<f64>,
}

impl ThresholdFilter {
    /// Whether this filter constrains anything at all. An open-ended
    /// `between` (no second bound) passes every record unfiltered.
    pub fn is_active(&self) -> bool {
        !(self.op == ThresholdOp::Between && self.value2.is_none())
    }

    pub fn matches(&self, value: f64) -> bool {
        match self.op {
            ThresholdOp::Equals => value == self.value1,
            ThresholdOp::Greater => value > self.value1,
            ThresholdOp::Less => value < self.value1,
            ThresholdOp::Between => match self.value2 {
                Some(value2) => self.value1 <= value && value <= value2,
                None => true,
            },
        }
    }
}


fn split_lowercase_list(value: Option<&str>) -> Vec<String> {
    value
        .map(|v| {
            v.split(',')
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => {
                let hex = bytes
                    .get(i + 1..i + 3)
                    .and_then(|h| std::str::from_utf8(h).ok())
                    .and_then(|h| u8::from_str_radix(h, 16).ok());
                if let Some(byte) = hex {
                    out.push(byte);
                    i += 3;
                    continue;
                }
                out.push(b'%');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b',' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flat_query_pairs() {
        let params = FilterParams::from_query("?search=blue%20widget&starred=true&dir=desc");
        assert_eq!(params.get("search"), Some("blue widget"));
        assert!(params.starred_only());
        assert!(params.sort_descending());
    }

    #[test]
    fn empty_values_count_as_absent() {
        let params = FilterParams::from_query("search=&tags=a");
        assert_eq!(params.get("search"), None);
        assert_eq!(params.tag_names(), vec!["a".to_string()]);
    }

    #[test]
    fn search_terms_split_and_lowercase() {
        let params = FilterParams::from_query("search=Widget,%20GADGET");
        assert_eq!(params.search_terms(), vec!["widget", "gadget"]);
    }

    #[test]
    fn threshold_triple_parses() {
        let params = FilterParams::from_query("rankType=between&rankValue1=1&rankValue2=10");
        let filter = params.threshold(ThresholdMetric::Rank).unwrap();
        assert_eq!(filter.op, ThresholdOp::Between);
        assert!(filter.matches(1.0));
        assert!(filter.matches(10.0));
        assert!(!filter.matches(10.5));
    }

    #[test]
    fn malformed_threshold_is_ignored() {
        let params = FilterParams::from_query("clicksType=greater&clicksValue1=lots");
        assert_eq!(params.threshold(ThresholdMetric::Clicks), None);
        let params = FilterParams::from_query("clicksType=sideways&clicksValue1=5");
        assert_eq!(params.threshold(ThresholdMetric::Clicks), None);
    }

    #[test]
    fn open_ended_between_is_inactive() {
        let params = FilterParams::from_query("rankType=between&rankValue1=3");
        let filter = params.threshold(ThresholdMetric::Rank).unwrap();
        assert!(!filter.is_active());
        assert!(filter.matches(9999.0));
    }

    #[test]
    fn round_trips_through_query_string() {
        let mut params = FilterParams::default();
        params.set("search", "blue widget");
        params.set("tags", "brand,seo");
        let rendered = params.to_query_string();
        assert_eq!(FilterParams::from_query(&rendered), params);
    }
}
