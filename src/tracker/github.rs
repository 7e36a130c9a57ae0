//! GitHub REST API client implementation
//!
//! This module implements the IssueTracker trait for the GitHub REST API.
//! Pull requests are addressed through the issues endpoints, which serve both
//! comments and labels.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, Response, StatusCode, Url};

use crate::domain::Comment;
use crate::error::{QaLabelsError, Result};
use crate::tracker::client::{IssueRef, IssueTracker};
use crate::tracker::types::{AddLabelsRequest, GitHubComment, GitHubErrorBody};

/// GitHub API base URL
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// REST API version header value
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Page size for listing comments (GitHub's maximum)
const COMMENTS_PER_PAGE: usize = 100;

/// Configuration for the GitHub client
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    pub api_url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            timeout: Duration::from_secs(30),
        }
    }
}

/// GitHub API client for comments and labels
pub struct GitHubClient {
    client: Client,
    base_url: Url,
}

impl GitHubClient {
    /// Create a client authenticated with `token`
    pub fn new(token: &str, config: GitHubConfig) -> Result<Self> {
        let token = token.trim();
        if token.is_empty() {
            return Err(QaLabelsError::InvalidConfig("github-token is empty".to_string()));
        }

        let base_url = Url::parse(&config.api_url)
            .map_err(|e| QaLabelsError::InvalidConfig(format!("invalid api url '{}': {}", config.api_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(QaLabelsError::InvalidConfig(format!(
                "api url '{}' cannot be used as a base",
                config.api_url
            )));
        }

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| QaLabelsError::InvalidConfig("github-token contains invalid characters".to_string()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("x-github-api-version", HeaderValue::from_static(GITHUB_API_VERSION));

        let client = Client::builder()
            .user_agent(config.user_agent)
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// `{api}/repos/{owner}/{repo}/issues/{n}/{tail...}`, each segment
    /// percent-encoded.
    fn issue_url(&self, issue: &IssueRef, tail: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        let number = issue.number.to_string();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["repos", issue.owner.as_str(), issue.repo.as_str(), "issues", number.as_str()])
                .extend(tail);
        }
        url
    }

    async fn fetch_comment_page(&self, issue: &IssueRef, page: usize) -> Result<Vec<GitHubComment>> {
        let url = self.issue_url(issue, &["comments"]);
        log::debug!("GET {} (page {})", url, page);

        let response = self
            .client
            .get(url)
            .query(&[("per_page", COMMENTS_PER_PAGE), ("page", page)])
            .send()
            .await?;

        let response = ensure_success(response).await?;
        Ok(response.json().await?)
    }
}

/// Turn a non-success response into an API error carrying GitHub's message.
async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<GitHubErrorBody>(&text)
        .map(|body| body.message)
        .unwrap_or(text);

    Err(QaLabelsError::Api {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl IssueTracker for GitHubClient {
    async fn list_comments(&self, issue: &IssueRef) -> Result<Vec<Comment>> {
        let mut comments = Vec::new();
        let mut page = 1;

        loop {
            let batch = self.fetch_comment_page(issue, page).await?;
            let last_page = batch.len() < COMMENTS_PER_PAGE;
            comments.extend(batch.into_iter().map(Comment::from));
            if last_page {
                break;
            }
            page += 1;
        }

        log::debug!("Retrieved {} comments for {}", comments.len(), issue);
        Ok(comments)
    }

    async fn add_label(&self, issue: &IssueRef, label: &str) -> Result<()> {
        let url = self.issue_url(issue, &["labels"]);
        log::debug!("POST {} [{}]", url, label);

        let response = self
            .client
            .post(url)
            .json(&AddLabelsRequest { labels: vec![label] })
            .send()
            .await?;

        ensure_success(response).await?;
        Ok(())
    }

    async fn remove_label(&self, issue: &IssueRef, label: &str) -> Result<()> {
        let url = self.issue_url(issue, &["labels", label]);
        log::debug!("DELETE {}", url);

        let response = self.client.delete(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            log::debug!("Label '{}' not present on {}", label, issue);
            return Ok(());
        }

        ensure_success(response).await?;
        Ok(())
    }
}
