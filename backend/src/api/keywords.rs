//! Endpoints for listing and tracking keywords.

use common::keyword::KeywordRecord;
use serde::Serialize;

use crate::http_utils::ranker_client::{RankerClient, RankerListResponse};

pub async fn list_keywords(domain_id: u64) -> anyhow::Result<Vec<KeywordRecord>> {
    let client = RankerClient::from_env();
    let response: RankerListResponse<KeywordRecord> = client
        .get_json(&format!("/api/v1/domains/{domain_id}/keywords"))
        .await?;
    Ok(response.results)
}

#[derive(Debug, Serialize)]
struct CreateKeywordsRequest {
    keywords: Vec<String>,
}

/// Start tracking new keywords for a domain. Returns the created records so
/// the UI can merge them into the open table without a refetch.
pub async fn create_keywords(
    domain_id: u64,
    titles: Vec<String>,
) -> anyhow::Result<Vec<KeywordRecord>> {
    let client = RankerClient::from_env();
    let body = CreateKeywordsRequest { keywords: titles };
    let response: RankerListResponse<KeywordRecord> = client
        .post_json(&format!("/api/v1/domains/{domain_id}/keywords"), &body)
        .await?;
    Ok(response.results)
}
