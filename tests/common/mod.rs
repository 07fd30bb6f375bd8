#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, StatusCode},
};
use portfolio::{
    api::{self, AppState},
    core::{
        config::AppConfig,
        models::{
            Account, CachedRepository, ContactMessage, NewAccount, NewContactMessage,
            RepositorySummary,
        },
    },
    errors::{ApiError, StorageError},
    github::RepositorySource,
    storage::{MemStorage, Storage},
};
use serde_json::Value;
use tokio::net::TcpListener;
use tower::ServiceExt;

/// Canned upstream outcome for router tests.
pub enum FakeRepos {
    Ok(Vec<RepositorySummary>),
    Status(u16, String),
    Failure(String),
}

#[async_trait]
impl RepositorySource for FakeRepos {
    async fn list_repositories(&self) -> Result<Vec<RepositorySummary>, ApiError> {
        match self {
            FakeRepos::Ok(repos) => Ok(repos.clone()),
            FakeRepos::Status(status, body) => Err(ApiError::Upstream {
                status: *status,
                body: body.clone(),
            }),
            FakeRepos::Failure(reason) => Err(ApiError::UpstreamFailure(reason.clone())),
        }
    }
}

/// A store whose backend is always down.
pub struct UnavailableStorage;

fn down<T>() -> Result<T, StorageError> {
    Err(StorageError::Unavailable("backend offline".to_string()))
}

#[async_trait]
impl Storage for UnavailableStorage {
    async fn create_account(&self, _: NewAccount) -> Result<Account, StorageError> {
        down()
    }

    async fn get_account(&self, _: u64) -> Result<Option<Account>, StorageError> {
        down()
    }

    async fn get_account_by_username(&self, _: &str) -> Result<Option<Account>, StorageError> {
        down()
    }

    async fn create_contact_message(
        &self,
        _: NewContactMessage,
    ) -> Result<ContactMessage, StorageError> {
        down()
    }

    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, StorageError> {
        down()
    }

    async fn save_repository(
        &self,
        _: RepositorySummary,
    ) -> Result<CachedRepository, StorageError> {
        down()
    }

    async fn list_repositories(&self) -> Result<Vec<CachedRepository>, StorageError> {
        down()
    }

    async fn get_repository_by_repo_id(
        &self,
        _: &str,
    ) -> Result<Option<CachedRepository>, StorageError> {
        down()
    }
}

/// Router over an arbitrary store.
pub fn router_with_storage(
    config: AppConfig,
    storage: Arc<dyn Storage>,
    repos: FakeRepos,
) -> Router {
    api::router(AppState::new(config, storage, Arc::new(repos)))
}

pub struct TestApp {
    pub router: Router,
    pub storage: Arc<MemStorage>,
}

pub fn test_app(config: AppConfig, repos: FakeRepos) -> TestApp {
    let storage = Arc::new(MemStorage::new());
    let state = AppState::new(
        config,
        storage.clone() as Arc<dyn Storage>,
        Arc::new(repos),
    );
    TestApp {
        router: api::router(state),
        storage,
    }
}

pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response: Response<Body> = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn_upstream(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}
