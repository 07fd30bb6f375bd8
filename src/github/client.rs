//! GitHub API client module
//!
//! Fetches the configured user's most recently updated repositories and
//! reshapes them into [`RepositorySummary`] records.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{
    Client,
    header::{ACCEPT, AUTHORIZATION},
};
use serde::Deserialize;
use tracing::{info, warn};
use url::Url;

use super::RepositorySource;
use crate::core::config::AppConfig;
use crate::core::models::RepositorySummary;
use crate::errors::ApiError;

pub const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";
pub const REPOS_PER_PAGE: u32 = 10;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// The subset of a GitHub repository object that the summary needs.
#[derive(Debug, Deserialize)]
pub struct GitHubRepo {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub language: Option<String>,
    pub updated_at: DateTime<Utc>,
    pub topics: Option<Vec<String>>,
}

impl From<GitHubRepo> for RepositorySummary {
    fn from(repo: GitHubRepo) -> Self {
        RepositorySummary {
            repo_id: repo.id.to_string(),
            name: repo.name,
            description: Some(repo.description.unwrap_or_default()),
            url: repo.html_url,
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            language: Some(repo.language.unwrap_or_default()),
            updated_at: repo.updated_at,
            tags: repo.topics.unwrap_or_default(),
        }
    }
}

/// Parses an upstream `/users/{user}/repos` body into summaries.
///
/// # Errors
///
/// Returns `ApiError::UpstreamFailure` if the body is not the expected array.
pub fn reshape_repositories(body: &str) -> Result<Vec<RepositorySummary>, ApiError> {
    let repos: Vec<GitHubRepo> = serde_json::from_str(body)
        .map_err(|e| ApiError::UpstreamFailure(format!("Failed to parse GitHub response: {e}")))?;

    Ok(repos.into_iter().map(RepositorySummary::from).collect())
}

/// GitHub API client
pub struct GitHubClient {
    http: Client,
    api_url: Url,
    username: String,
    token: Option<String>,
}

impl GitHubClient {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(config.github_timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            api_url: config.github_api_url.clone(),
            username: config.github_username.clone(),
            token: config.github_token.clone(),
        })
    }

    /// `{api}/users/{username}/repos?sort=updated&per_page=10`
    ///
    /// # Errors
    ///
    /// Returns an error if the configured base URL cannot carry a path.
    pub fn repos_url(&self) -> Result<Url, ApiError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                ApiError::UpstreamFailure(format!("GitHub API URL {} has no path", self.api_url))
            })?
            .pop_if_empty()
            .extend(["users", self.username.as_str(), "repos"]);
        url.query_pairs_mut()
            .append_pair("sort", "updated")
            .append_pair("per_page", &REPOS_PER_PAGE.to_string());

        Ok(url)
    }
}

#[async_trait]
impl RepositorySource for GitHubClient {
    async fn list_repositories(&self) -> Result<Vec<RepositorySummary>, ApiError> {
        let url = self.repos_url()?;
        info!(username = %self.username, authenticated = self.token.is_some(), "Fetching GitHub repositories");

        let mut request = self.http.get(url).header(ACCEPT, GITHUB_ACCEPT);
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("token {token}"));
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(status = status.as_u16(), "GitHub API returned an error");
            return Err(ApiError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;

        #[cfg(feature = "debug-logs")]
        info!("GitHub response body:\n{}", body);

        reshape_repositories(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(api_url: &str, username: &str) -> GitHubClient {
        let config = AppConfig {
            github_api_url: Url::parse(api_url).unwrap(),
            github_username: username.to_string(),
            ..AppConfig::default()
        };
        GitHubClient::new(&config).unwrap()
    }

    #[test]
    fn builds_repos_url() {
        let client = client_for("https://api.github.com", "octocat");
        assert_eq!(
            client.repos_url().unwrap().as_str(),
            "https://api.github.com/users/octocat/repos?sort=updated&per_page=10"
        );
    }

    #[test]
    fn repos_url_keeps_base_path_and_escapes_username() {
        let client = client_for("http://127.0.0.1:8080/github/", "a b");
        assert_eq!(
            client.repos_url().unwrap().as_str(),
            "http://127.0.0.1:8080/github/users/a%20b/repos?sort=updated&per_page=10"
        );
    }

    #[test]
    fn reshape_fills_missing_optionals() {
        let body = r#"[{
            "id": 1296269,
            "name": "Hello-World",
            "html_url": "https://github.com/octocat/Hello-World",
            "stargazers_count": 80,
            "forks_count": 9,
            "updated_at": "2011-01-26T19:14:43Z"
        }]"#;

        let repos = reshape_repositories(body).unwrap();
        assert_eq!(repos.len(), 1);
        let repo = &repos[0];
        assert_eq!(repo.repo_id, "1296269");
        assert_eq!(repo.description.as_deref(), Some(""));
        assert_eq!(repo.language.as_deref(), Some(""));
        assert!(repo.tags.is_empty());
        assert_eq!(repo.stars, 80);
        assert_eq!(repo.forks, 9);
        assert_eq!(repo.updated_at.to_rfc3339(), "2011-01-26T19:14:43+00:00");
    }

    #[test]
    fn reshape_rejects_unexpected_payload() {
        let err = reshape_repositories(r#"{"message":"oops"}"#).unwrap_err();
        assert!(matches!(err, ApiError::UpstreamFailure(_)));
    }
}
