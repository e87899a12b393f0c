//! Generic field comparator for the sortable tables.
//!
//! Values are compared per column key: numeric columns arithmetically (with
//! string-to-number coercion for loosely typed upstream data), text columns
//! with Danish collation so æ, ø and å land after z. Missing values sort
//! last in ascending order and first in descending order; mixed types are
//! left where they are.

use std::cmp::Ordering;

use crate::domain::DomainRecord;
use crate::keyword::KeywordRecord;


#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Number(f64),
    Text(String),
    Missing,
}

/// Column keys whose values are always compared numerically, even when the
/// backend delivers them as strings.
const NUMERIC_FIELDS: &[&str] = &[
    "rank",
    "rank_delta",
    "search_volume",
    "clicks",
    "impressions",
    "keywords",
    "average_position",
    "top_three",
];

pub trait SortableRecord {
    fn sort_value(&self, field: &str) -> SortValue;
}

impl SortableRecord for KeywordRecord {
    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "title" => SortValue::Text(self.title.clone()),
            "rank" => opt_number(self.position()),
            "rank_delta" => opt_number(self.position_delta()),
            "search_volume" => opt_number(self.search_volume.map(|v| v as f64)),
            "clicks" => opt_number(self.clicks().map(|v| v as f64)),
            "impressions" => opt_number(self.impressions().map(|v| v as f64)),
            "country" => SortValue::Text(self.location.country.clone()),
            _ => SortValue::Missing,
        }
    }
}

impl SortableRecord for DomainRecord {
    fn sort_value(&self, field: &str) -> SortValue {
        match field {
            "display_name" => SortValue::Text(self.display_name.clone()),
            "keywords" => SortValue::Number(self.keyword_count as f64),
            "average_position" => opt_number(self.average_position),
            "clicks" => SortValue::Number(self.clicks as f64),
            "impressions" => SortValue::Number(self.impressions as f64),
            "top_three" => SortValue::Number(self.top_three_count as f64),
            _ => SortValue::Missing,
        }
    }
}

fn opt_number(value: Option<f64>) -> SortValue {
    match value {
        Some(v) => SortValue::Number(v),
        None => SortValue::Missing,
    }
}

pub fn compare_records<R: SortableRecord>(
    a: &R,
    b: &R,
    field: &str,
    descending: bool,
) -> Ordering {
    compare_values(a.sort_value(field), b.sort_value(field), field, descending)
}

pub fn compare_values(a: SortValue, b: SortValue, field: &str, descending: bool) -> Ordering {
    let ordering = compare_ascending(coerce(a, field), coerce(b, field));
    if descending { ordering.reverse() } else { ordering }
}

fn compare_ascending(a: SortValue, b: SortValue) -> Ordering {
    match (a, b) {
        (SortValue::Missing, SortValue::Missing) => Ordering::Equal,
        (SortValue::Missing, _) => Ordering::Greater,
        (_, SortValue::Missing) => Ordering::Less,
        (SortValue::Number(a), SortValue::Number(b)) => {
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        }
        (SortValue::Text(a), SortValue::Text(b)) => danish_cmp(&a, &b),
        // mixed types: leave the pair where it is
        _ => Ordering::Equal,
    }
}

/// Numeric columns coerce stray text values, defaulting to 0 on parse failure.
fn coerce(value: SortValue, field: &str) -> SortValue {
    match value {
        SortValue::Text(text) if NUMERIC_FIELDS.contains(&field) => {
            SortValue::Number(text.trim().parse::<f64>().unwrap_or(0.0))
        }
        other => other,
    }
}

fn danish_cmp(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(&collation_key(b))
}

/// Case-insensitive Danish collation key. Letters a-z come first, then æ, ø
/// and å; ä and ö collate with æ and ø as in Danish dictionaries. Digits sort
/// before letters, anything else after by code point.
fn collation_key(text: &str) -> Vec<u32> {
    text.chars()
        .flat_map(|c| c.to_lowercase())
        .map(|c| match c {
            '0'..='9' => 50 + (c as u32 - '0' as u32),
            'a'..='z' => 100 + (c as u32 - 'a' as u32),
            'à' | 'á' | 'â' | 'ã' => 100,
            'é' | 'è' | 'ê' | 'ë' => 104,
            'ü' => 124,
            'æ' | 'ä' => 126,
            'ø' | 'ö' => 127,
            'å' => 128,
            _ => 1000 + c as u32,
        })
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sorts_last_ascending() {
        let ord = compare_values(SortValue::Number(1.0), SortValue::Missing, "rank", false);
        assert_eq!(ord, Ordering::Less);
    }

    #[test]
    fn missing_sorts_first_descending() {
        let ord = compare_values(SortValue::Number(1.0), SortValue::Missing, "rank", true);
        assert_eq!(ord, Ordering::Greater);
    }

    #[test]
    fn danish_letters_follow_z() {
        let ord = compare_values(
            SortValue::Text("Åse".to_string()),
            SortValue::Text("Øster".to_string()),
            "title",
            false,
        );
        assert_eq!(ord, Ordering::Greater);

        let ord = compare_values(
            SortValue::Text("zebra".to_string()),
            SortValue::Text("æble".to_string()),
            "title",
            false,
        );
        assert_eq!(ord, Ordering::Less);
    }

    #[test]
    fn numeric_fields_coerce_strings() {
        let ord = compare_values(
            SortValue::Text("12".to_string()),
            SortValue::Number(3.0),
            "clicks",
            false,
        );
        assert_eq!(ord, Ordering::Greater);

        // unparsable text coerces to 0
        let ord = compare_values(
            SortValue::Text("lots".to_string()),
            SortValue::Number(1.0),
            "clicks",
            false,
        );
        assert_eq!(ord, Ordering::Less);
    }

    #[test]
    fn mixed_types_compare_equal() {
        let ord = compare_values(
            SortValue::Text("abc".to_string()),
            SortValue::Number(1.0),
            "title",
            false,
        );
        assert_eq!(ord, Ordering::Equal);
    }

    #[test]
    fn record_comparison_by_title() {
        let mut a = KeywordRecord::default();
        a.title = "blå cykel".to_string();
        let mut b = KeywordRecord::default();
        b.title = "zebra print".to_string();
        assert_eq!(compare_records(&a, &b, "title", false), Ordering::Less);
    }
}
