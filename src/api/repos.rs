//! `GET /api/github/repos`

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::Deserialize;
use tracing::{error, info};

use super::state::AppState;
use crate::core::models::RepositorySummary;
use crate::errors::ApiError;
use crate::github::ProjectFilter;

#[derive(Debug, Default, Deserialize)]
pub struct RepoQuery {
    pub filter: Option<String>,
}

/// Lists the owner's repositories, optionally narrowed by `?filter=`.
///
/// # Errors
///
/// Upstream non-success statuses pass through unchanged; network and parse
/// failures become a 500 with a fixed message.
pub async fn list_repos(
    State(state): State<AppState>,
    query: Result<Query<RepoQuery>, QueryRejection>,
) -> Result<Json<Vec<RepositorySummary>>, ApiError> {
    let Query(query) = query
        .map_err(|e| ApiError::BadRequest(format!("Invalid query string: {}", e.body_text())))?;

    let filter = query
        .filter
        .as_deref()
        .map(str::parse::<ProjectFilter>)
        .transpose()?
        .unwrap_or_default();

    let repos = state.repositories.list_repositories().await?;
    info!(count = repos.len(), ?filter, "Fetched repositories");

    if state.config.cache_repositories {
        cache_repositories(&state, &repos).await;
    }

    Ok(Json(filter.apply(repos)))
}

async fn cache_repositories(state: &AppState, repos: &[RepositorySummary]) {
    for repo in repos {
        if let Err(e) = state.storage.save_repository(repo.clone()).await {
            error!(repo_id = %repo.repo_id, error = %e, "Failed to cache repository");
        }
    }
}
