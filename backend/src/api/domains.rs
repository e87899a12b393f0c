//! Endpoint for the tracked-domain list.

use common::domain::DomainRecord;

use crate::http_utils::ranker_client::{RankerClient, RankerListResponse};

pub async fn list_domains() -> anyhow::Result<Vec<DomainRecord>> {
    let client = RankerClient::from_env();
    let response: RankerListResponse<DomainRecord> = client.get_json("/api/v1/domains").await?;
    Ok(response.results)
}
