//! HTTP client for the external rank-tracking API.
//!
//! Authentication is a bearer token plus a team identifier header; both are
//! owned by the session layer and reach this process through the
//! environment.

use reqwest::Method;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

const TEAM_ID_HEADER: &str = "X-Team-Id";

#[derive(Debug, Clone)]
pub struct RankerClient {
    http: reqwest::Client,
    base_url: String,
    api_token: String,
    team_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankerListResponse<T> {
    pub results: Vec<T>,
    pub total: Option<u64>,
}

impl RankerClient {
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("RANKER_API_URL").unwrap_or("http://127.0.0.1:8600".to_string());
        let api_token = std::env::var("RANKER_API_TOKEN").unwrap_or_default();
        let team_id = std::env::var("RANKER_TEAM_ID").unwrap_or_default();
        RankerClient {
            http: reqwest::Client::new(),
            base_url,
            api_token,
            team_id,
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.http
            .request(method, url)
            .bearer_auth(&self.api_token)
            .header(TEAM_ID_HEADER, &self.team_id)
    }

    async fn send_for_text(&self, request: reqwest::RequestBuilder) -> anyhow::Result<String> {
        let response = request.send().await?;
        let status = response.status();
        let response_txt = response.text().await?;
        if status.is_client_error() || status.is_server_error() {
            anyhow::bail!("Error: {}: {}", status, response_txt);
        }
        Ok(response_txt)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<T> {
        let response_txt = self.send_for_text(self.request(Method::GET, path)).await?;
        Ok(serde_json::from_str(&response_txt)?)
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> anyhow::Result<T> {
        let response_txt = self
            .send_for_text(self.request(Method::POST, path).json(body))
            .await?;
        Ok(serde_json::from_str(&response_txt)?)
    }

    pub async fn put_json<B: Serialize>(&self, path: &str, body: &B) -> anyhow::Result<()> {
        self.send_for_text(self.request(Method::PUT, path).json(body))
            .await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> anyhow::Result<()> {
        self.send_for_text(self.request(Method::DELETE, path))
            .await?;
        Ok(())
    }
}
