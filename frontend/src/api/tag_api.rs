//! Client API calls for tag endpoints.

use common::tag::KeywordTag;
use dioxus::prelude::*;




#[server]
pub async fn list_tags() -> Result<Vec<KeywordTag>, ServerFnError> {
    let x = backend::api::list_tags().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn update_tag(tag: KeywordTag) -> Result<(), ServerFnError> {
    let x = backend::api::update_tag(tag).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn delete_tag(tag_id: u64) -> Result<(), ServerFnError> {
    let x = backend::api::delete_tag(tag_id).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
