use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::SearchError;
use crate::models::{Contributor, ReadmeContent, SearchResponse};
use crate::query::SearchQuery;

const USER_AGENT: &str = concat!("github-repo-searching/", env!("CARGO_PKG_VERSION"));

/// The three GitHub lookups a search needs.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    async fn search_repositories(&self, query: &SearchQuery) -> Result<SearchResponse, SearchError>;

    async fn contributors(&self, owner: &str, repo: &str) -> Result<Vec<Contributor>, SearchError>;

    async fn readme(&self, owner: &str, repo: &str) -> Result<ReadmeContent, SearchError>;
}

/// [`GitHubApi`] over the REST API.
pub struct HttpGitHubApi {
    client: Client,
    base_url: String,
}

impl HttpGitHubApi {
    pub fn new(config: &Config) -> Result<Self, SearchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );
        if let Some(token) = config.token() {
            let mut value = HeaderValue::from_str(&format!("token {}", token))
                .map_err(|_| SearchError::Config("token contains invalid characters".into()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        } else {
            debug!("No GitHub token configured, using unauthenticated access");
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(HttpGitHubApi {
            client,
            base_url: config.api_base_url().to_string(),
        })
    }

    async fn get(&self, path: &str, params: &[(&str, String)]) -> Result<Response, SearchError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("Requesting URL: {}", url);

        let response = self.client.get(&url).query(params).send().await?;
        log_rate_limit(response.headers());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Status { status, body });
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, SearchError> {
        let response = self.get(path, params).await?;
        response.json::<T>().await.map_err(|e| {
            if e.is_decode() {
                SearchError::Decode(e.to_string())
            } else {
                SearchError::Http(e)
            }
        })
    }
}

#[async_trait]
impl GitHubApi for HttpGitHubApi {
    async fn search_repositories(&self, query: &SearchQuery) -> Result<SearchResponse, SearchError> {
        let params = [
            ("q", query.qualified_text()),
            ("sort", query.sort().to_string()),
            ("order", "desc".to_string()),
            ("per_page", query.per_page().to_string()),
        ];
        self.get_json("/search/repositories", &params).await
    }

    async fn contributors(&self, owner: &str, repo: &str) -> Result<Vec<Contributor>, SearchError> {
        self.get_json(&format!("/repos/{}/{}/contributors", owner, repo), &[])
            .await
    }

    async fn readme(&self, owner: &str, repo: &str) -> Result<ReadmeContent, SearchError> {
        self.get_json(&format!("/repos/{}/{}/readme", owner, repo), &[])
            .await
    }
}

/// Warn once the rate limit is spent. Requests are not delayed or retried.
fn log_rate_limit(headers: &HeaderMap) {
    let Some(remaining) = header_u64(headers, "X-RateLimit-Remaining") else {
        return;
    };
    debug!("Rate limit remaining: {}", remaining);
    if remaining > 0 {
        return;
    }

    match header_u64(headers, "X-RateLimit-Reset") {
        Some(reset) => {
            let now = Utc::now().timestamp().max(0) as u64;
            warn!(
                "GitHub rate limit reached, resets in {} seconds",
                reset.saturating_sub(now)
            );
        }
        None => warn!("GitHub rate limit reached"),
    }
}

fn header_u64(headers: &HeaderMap, name: &str) -> Option<u64> {
    headers.get(name)?.to_str().ok()?.parse().ok()
}
