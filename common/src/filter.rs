//! The keyword filter pipeline.
//!
//! Takes the in-memory keyword list plus the filter parameters decoded from
//! the URL and produces a filtered copy together with the resolved sort
//! directive. The input list is never mutated. Filters are conjunctive and
//! applied in a fixed order; a filter whose parameters are absent (or
//! malformed, see `FilterParams::threshold`) is skipped, so a broken
//! parameter degrades to showing unfiltered data instead of an empty or
//! crashed table.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::columns::{TableColumn, column_exists};
use crate::country::{DEFAULT_COUNTRY, resolve_country_code};
use crate::filter_params::{FilterParams, ThresholdMetric};
use crate::keyword::KeywordRecord;


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortDirective {
    pub field: String,
    pub descending: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    pub records: Vec<KeywordRecord>,
    pub sort: SortDirective,
}

pub fn apply_filters(
    records: &[KeywordRecord],
    params: &FilterParams,
    columns: &[TableColumn],
    default_sort_field: &str,
) -> FilterOutcome {
    let mut kept: Vec<KeywordRecord> = records.to_vec();

    if params.starred_only() {
        kept.retain(|record| record.starred);
    }

    let search_terms = params.search_terms();
    if !search_terms.is_empty() {
        kept.retain(|record| {
            let title = record.title.to_lowercase();
            search_terms.iter().any(|term| title.contains(term))
        });
    }

    let tag_names = params.tag_names();
    if !tag_names.is_empty() {
        kept.retain(|record| tag_names.iter().all(|name| record.has_tag(name)));
    }

    if let Some(country) = params.country() {
        let code = resolve_country_code(country);
        if code != DEFAULT_COUNTRY {
            kept.retain(|record| record.location.country.eq_ignore_ascii_case(&code));
        }
    }

    let landing_terms = params.landing_page_terms();
    if !landing_terms.is_empty() {
        kept.retain(|record| {
            record.landing_pages().iter().any(|page| {
                let page = page.to_lowercase();
                landing_terms.iter().any(|term| page.contains(term))
            })
        });
    }

    apply_threshold(&mut kept, params, ThresholdMetric::Rank, |r| r.position());
    apply_threshold(&mut kept, params, ThresholdMetric::Clicks, |r| {
        r.clicks().map(|v| v as f64)
    });
    apply_threshold(&mut kept, params, ThresholdMetric::Impressions, |r| {
        r.impressions().map(|v| v as f64)
    });

    FilterOutcome {
        records: kept,
        sort: resolve_sort(params, columns, default_sort_field),
    }
}

fn apply_threshold(
    kept: &mut Vec<KeywordRecord>,
    params: &FilterParams,
    metric: ThresholdMetric,
    value_of: impl Fn(&KeywordRecord) -> Option<f64>,
) {
    let Some(filter) = params.threshold(metric) else {
        return;
    };
    if !filter.is_active() {
        return;
    }
    // records missing the metric are dropped by an active threshold
    kept.retain(|record| value_of(record).map(|v| filter.matches(v)).unwrap_or(false));
}

/// Resolve the sort directive from the parameters, keeping the caller's
/// default when the requested field is not a configured column.
fn resolve_sort(
    params: &FilterParams,
    columns: &[TableColumn],
    default_sort_field: &str,
) -> SortDirective {
    let mut field = default_sort_field.to_string();
    if let Some(requested) = params.sort_field() {
        if column_exists(columns, requested) {
            field = requested.to_string();
        } else {
            warn!("requested sort field {requested:?} is not a configured column, keeping {field:?}");
        }
    }
    SortDirective {
        field,
        descending: params.sort_descending(),
    }
}

/// Merge a batch of freshly created keywords into the held list, deduplicated
/// by id. Repeated or out-of-order delivery of the same batch is a no-op.
pub fn merge_new_keywords(existing: &[KeywordRecord], batch: &[KeywordRecord]) -> Vec<KeywordRecord> {
    let mut seen: HashSet<u64> = existing.iter().map(|r| r.id).collect();
    let mut merged = existing.to_vec();
    for record in batch {
        if seen.insert(record.id) {
            merged.push(record.clone());
        }
    }
    merged
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::KEYWORD_COLUMNS;
    use crate::keyword::{KeywordStats, RankSample, SearchLocation};
    use crate::tag::KeywordTag;

    fn keyword(id: u64, title: &str) -> KeywordRecord {
        KeywordRecord {
            id,
            title: title.to_string(),
            location: SearchLocation { country: "dk".to_string() },
            ..Default::default()
        }
    }

    fn with_position(mut record: KeywordRecord, position: f64) -> KeywordRecord {
        record.latest_rank = Some(RankSample {
            position: Some(position),
            ..Default::default()
        });
        record
    }

    fn with_tags(mut record: KeywordRecord, names: &[&str]) -> KeywordRecord {
        record.tags = names
            .iter()
            .enumerate()
            .map(|(i, name)| KeywordTag { id: i as u64, name: name.to_string() })
            .collect();
        record
    }

    fn apply(records: &[KeywordRecord], query: &str) -> FilterOutcome {
        apply_filters(
            records,
            &FilterParams::from_query(query),
            KEYWORD_COLUMNS,
            "rank",
        )
    }

    #[test]
    fn empty_params_are_identity() {
        let records = vec![keyword(1, "blue widget"), keyword(2, "red gadget")];
        let outcome = apply(&records, "");
        assert_eq!(outcome.records, records);
        assert_eq!(outcome.sort.field, "rank");
        assert!(!outcome.sort.descending);
    }

    #[test]
    fn starred_filter_keeps_only_starred() {
        let mut starred = keyword(1, "blue widget");
        starred.starred = true;
        let records = vec![starred.clone(), keyword(2, "red gadget")];
        let outcome = apply(&records, "starred=true");
        assert_eq!(outcome.records, vec![starred]);
    }

    #[test]
    fn search_matches_any_term_in_title() {
        let records = vec![keyword(1, "blue widget"), keyword(2, "red gadget")];
        let outcome = apply(&records, "search=widget");
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].title, "blue widget");

        let outcome = apply(&records, "search=WIDGET,gadget");
        assert_eq!(outcome.records.len(), 2);
    }

    #[test]
    fn tag_filter_requires_all_tags() {
        let records = vec![
            with_tags(keyword(1, "one"), &["a", "b"]),
            with_tags(keyword(2, "two"), &["A"]),
            with_tags(keyword(3, "three"), &["B", "a", "c"]),
        ];
        let outcome = apply(&records, "tags=a,b");
        let ids: Vec<u64> = outcome.records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn tag_filter_folds_danish_letters() {
        let records = vec![
            with_tags(keyword(1, "one"), &["Økologi"]),
            with_tags(keyword(2, "two"), &["Brand"]),
        ];
        // %C3%B8 is "ø"
        let outcome = apply(&records, "tags=%C3%B8kologi");
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].id, 1);
    }

    #[test]
    fn country_filter_resolves_names() {
        let mut swedish = keyword(2, "two");
        swedish.location.country = "se".to_string();
        let records = vec![keyword(1, "one"), swedish];

        let outcome = apply(&records, "country=Sweden");
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].id, 2);

        // the default country means "no filter"
        let outcome = apply(&records, "country=Denmark");
        assert_eq!(outcome.records.len(), 2);
    }

    #[test]
    fn landing_page_filter_is_substring_match() {
        let mut record = keyword(1, "one");
        record.latest_rank = Some(RankSample {
            position: Some(4.0),
            landing_pages: vec!["https://example.dk/pricing".to_string()],
            ..Default::default()
        });
        let records = vec![record, keyword(2, "two")];
        let outcome = apply(&records, "landingPages=pricing");
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].id, 1);
    }

    #[test]
    fn between_threshold_bounds_inclusive_and_drops_missing() {
        let records = vec![
            with_position(keyword(1, "one"), 1.0),
            with_position(keyword(2, "two"), 10.0),
            with_position(keyword(3, "three"), 11.0),
            keyword(4, "four"), // no position sample
        ];
        let outcome = apply(&records, "rankType=between&rankValue1=1&rankValue2=10");
        let ids: Vec<u64> = outcome.records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn open_ended_between_keeps_everything() {
        let records = vec![with_position(keyword(1, "one"), 50.0), keyword(2, "two")];
        let outcome = apply(&records, "rankType=between&rankValue1=1");
        assert_eq!(outcome.records.len(), 2);
    }

    #[test]
    fn clicks_threshold_uses_operator() {
        let mut busy = keyword(1, "one");
        busy.stats = Some(KeywordStats { clicks: 50, ..Default::default() });
        let mut quiet = keyword(2, "two");
        quiet.stats = Some(KeywordStats { clicks: 5, ..Default::default() });
        let records = vec![busy, quiet];

        let outcome = apply(&records, "clicksType=greater&clicksValue1=10");
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].id, 1);

        let outcome = apply(&records, "clicksType=equals&clicksValue1=5");
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].id, 2);
    }

    #[test]
    fn malformed_threshold_degrades_to_unfiltered() {
        let records = vec![with_position(keyword(1, "one"), 3.0), keyword(2, "two")];
        let outcome = apply(&records, "rankType=greater&rankValue1=banana");
        assert_eq!(outcome.records.len(), 2);
    }

    #[test]
    fn unknown_sort_field_falls_back_to_default() {
        let records = vec![keyword(1, "one")];
        let outcome = apply(&records, "sort=velocity&dir=desc");
        assert_eq!(outcome.sort.field, "rank");
        assert!(outcome.sort.descending);
    }

    #[test]
    fn known_sort_field_is_used() {
        let outcome = apply(&[], "sort=clicks&dir=desc");
        assert_eq!(outcome.sort.field, "clicks");
        assert!(outcome.sort.descending);
    }

    #[test]
    fn filtering_does_not_mutate_input() {
        let records = vec![keyword(1, "blue widget"), keyword(2, "red gadget")];
        let before = records.clone();
        let _ = apply(&records, "search=widget");
        assert_eq!(records, before);
    }

    #[test]
    fn merge_skips_duplicate_ids() {
        let existing = vec![keyword(1, "one"), keyword(2, "two")];
        let batch = vec![keyword(2, "two"), keyword(3, "three")];
        let merged = merge_new_keywords(&existing, &batch);
        let ids: Vec<u64> = merged.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn merge_is_idempotent() {
        let existing = vec![keyword(1, "one"), keyword(2, "two")];
        let merged = merge_new_keywords(&existing, &existing.clone());
        assert_eq!(merged.len(), existing.len());
        let merged_again = merge_new_keywords(&merged, &existing);
        assert_eq!(merged_again, merged);
    }
}
