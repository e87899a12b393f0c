//! Tag CRUD endpoints.

use common::tag::KeywordTag;
use serde::Serialize;
use tracing::info;

use crate::http_utils::ranker_client::{RankerClient, RankerListResponse};

pub async fn list_tags() -> anyhow::Result<Vec<KeywordTag>> {
    let client = RankerClient::from_env();
    let response: RankerListResponse<KeywordTag> = client.get_json("/api/v1/tags").await?;
    Ok(response.results)
}

#[derive(Debug, Serialize)]
struct UpdateTagRequest<'a> {
    name: &'a str,
}

pub async fn update_tag(tag: KeywordTag) -> anyhow::Result<()> {
    let client = RankerClient::from_env();
    client
        .put_json(
            &format!("/api/v1/tags/{}", tag.id),
            &UpdateTagRequest { name: &tag.name },
        )
        .await?;
    info!("Updated tag {} to {:?}", tag.id, tag.name);
    Ok(())
}

pub async fn delete_tag(tag_id: u64) -> anyhow::Result<()> {
    let client = RankerClient::from_env();
    client.delete(&format!("/api/v1/tags/{tag_id}")).await?;
    info!("Deleted tag {}", tag_id);
    Ok(())
}
