//! Client API calls for domain and keyword endpoints.

use common::{domain::DomainRecord, keyword::KeywordRecord};
use dioxus::prelude::*;




#[server]
pub async fn list_domains() -> Result<Vec<DomainRecord>, ServerFnError> {
    let x = backend::api::list_domains().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn list_keywords(domain_id: u64) -> Result<Vec<KeywordRecord>, ServerFnError> {
    let x = backend::api::list_keywords(domain_id).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn create_keywords(domain_id: u64, titles: Vec<String>) -> Result<Vec<KeywordRecord>, ServerFnError> {
    let x = backend::api::create_keywords(domain_id, titles).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
