use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::Storage;
use crate::core::models::{
    Account, CachedRepository, ContactMessage, NewAccount, NewContactMessage, RepositorySummary,
};
use crate::errors::StorageError;

/// Rows plus the id counter for one record kind. Both live under the same
/// lock so assigning an id and inserting the row cannot interleave.
#[derive(Debug)]
struct Table<T> {
    next_id: u64,
    rows: Vec<T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: Vec::new(),
        }
    }
}

impl<T> Table<T> {
    fn insert_with(&mut self, build: impl FnOnce(u64) -> T) -> &T {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.push(build(id));
        &self.rows[self.rows.len() - 1]
    }
}

/// Volatile in-memory store. Everything is dropped with the process.
#[derive(Debug, Default)]
pub struct MemStorage {
    accounts: RwLock<Table<Account>>,
    messages: RwLock<Table<ContactMessage>>,
    repositories: RwLock<Table<CachedRepository>>,
}

impl MemStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn create_account(&self, account: NewAccount) -> Result<Account, StorageError> {
        let mut table = self.accounts.write().await;

        if table.rows.iter().any(|a| a.username == account.username) {
            return Err(StorageError::Conflict(format!(
                "username {} is taken",
                account.username
            )));
        }

        let row = table.insert_with(|id| Account {
            id,
            username: account.username,
            password: account.password,
        });
        Ok(row.clone())
    }

    async fn get_account(&self, id: u64) -> Result<Option<Account>, StorageError> {
        let table = self.accounts.read().await;
        Ok(table.rows.iter().find(|a| a.id == id).cloned())
    }

    async fn get_account_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Account>, StorageError> {
        let table = self.accounts.read().await;
        Ok(table.rows.iter().find(|a| a.username == username).cloned())
    }

    async fn create_contact_message(
        &self,
        message: NewContactMessage,
    ) -> Result<ContactMessage, StorageError> {
        let mut table = self.messages.write().await;

        let row = table.insert_with(|id| ContactMessage {
            id,
            name: message.name,
            email: message.email,
            subject: message.subject,
            message: message.message,
            created_at: Utc::now(),
        });
        Ok(row.clone())
    }

    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, StorageError> {
        Ok(self.messages.read().await.rows.clone())
    }

    async fn save_repository(
        &self,
        summary: RepositorySummary,
    ) -> Result<CachedRepository, StorageError> {
        let mut table = self.repositories.write().await;

        if let Some(existing) = table
            .rows
            .iter_mut()
            .find(|r| r.summary.repo_id == summary.repo_id)
        {
            existing.summary = summary;
            return Ok(existing.clone());
        }

        let row = table.insert_with(|id| CachedRepository { id, summary });
        Ok(row.clone())
    }

    async fn list_repositories(&self) -> Result<Vec<CachedRepository>, StorageError> {
        Ok(self.repositories.read().await.rows.clone())
    }

    async fn get_repository_by_repo_id(
        &self,
        repo_id: &str,
    ) -> Result<Option<CachedRepository>, StorageError> {
        let table = self.repositories.read().await;
        Ok(table
            .rows
            .iter()
            .find(|r| r.summary.repo_id == repo_id)
            .cloned())
    }
}
