//! GitHub REST API access and project filtering

pub mod client;
pub mod filter;

use async_trait::async_trait;

use crate::core::models::RepositorySummary;
use crate::errors::ApiError;

pub use client::GitHubClient;
pub use filter::ProjectFilter;

/// Source of the owner's repositories, already reshaped into summaries.
#[async_trait]
pub trait RepositorySource: Send + Sync {
    /// # Errors
    ///
    /// `ApiError::Upstream` when the provider answers with a non-success
    /// status, `ApiError::UpstreamFailure` when it cannot be reached or its
    /// payload cannot be read.
    async fn list_repositories(&self) -> Result<Vec<RepositorySummary>, ApiError>;
}
