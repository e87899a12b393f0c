//! CSV export of the keyword table, served as a file download.

use axum::{
    body::Body,
    extract::Path,
    http::{StatusCode, header},
    response::IntoResponse,
};
use common::keyword::KeywordRecord;
use tracing::info;

use crate::api::{list_domains, list_keywords};

pub async fn export_keywords(Path(domain_id): Path<u64>) -> impl IntoResponse {
    info!("Exporting keywords for domain: {}", domain_id);

    let fetched = futures::future::try_join(list_domains(), list_keywords(domain_id)).await;
    let (domains, keywords) = match fetched {
        Ok(pair) => pair,
        Err(e) => {
            return (StatusCode::BAD_GATEWAY, format!("Export failed: {e}")).into_response();
        }
    };

    let domain_name = domains
        .iter()
        .find(|d| d.id == domain_id)
        .map(|d| d.display_name.clone())
        .unwrap_or_else(|| format!("domain-{domain_id}"));

    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{domain_name}-keywords.csv\""),
        ),
    ];
    (headers, Body::from(keywords_csv(&keywords))).into_response()
}

fn keywords_csv(keywords: &[KeywordRecord]) -> String {
    let mut out = String::from("keyword,rank,search_volume,clicks,impressions,country,starred,tags\n");
    for keyword in keywords {
        let rank = keyword
            .position()
            .map(|p| p.to_string())
            .unwrap_or_default();
        let volume = keyword
            .search_volume
            .map(|v| v.to_string())
            .unwrap_or_default();
        let clicks = keyword.clicks().map(|v| v.to_string()).unwrap_or_default();
        let impressions = keyword
            .impressions()
            .map(|v| v.to_string())
            .unwrap_or_default();
        let tags = keyword
            .tags
            .iter()
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>()
            .join(";");
        out.push_str(&format!(
            "{},{rank},{volume},{clicks},{impressions},{},{},{}\n",
            csv_field(&keyword.title),
            csv_field(&keyword.location.country),
            keyword.starred,
            csv_field(&tags),
        ));
    }
    out
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_quotes_fields_with_separators() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn csv_rows_include_header() {
        let mut record = KeywordRecord::default();
        record.title = "blue widget, cheap".to_string();
        let csv = keywords_csv(&[record]);
        let mut lines = csv.lines();
        assert!(lines.next().unwrap().starts_with("keyword,rank"));
        assert!(lines.next().unwrap().starts_with("\"blue widget, cheap\""));
    }
}
