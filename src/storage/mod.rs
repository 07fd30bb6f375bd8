//! Storage seam for accounts, contact messages and cached repositories.
//!
//! The request layer only sees [`Storage`]; [`MemStorage`] is the volatile
//! process-lifetime implementation. A durable backend slots in behind the same
//! trait.

mod memory;

use async_trait::async_trait;

use crate::core::models::{
    Account, CachedRepository, ContactMessage, NewAccount, NewContactMessage, RepositorySummary,
};
use crate::errors::StorageError;

pub use memory::MemStorage;

#[async_trait]
pub trait Storage: Send + Sync {
    /// Inserts a new account under the next free id.
    ///
    /// # Errors
    ///
    /// `StorageError::Conflict` if the username is taken.
    async fn create_account(&self, account: NewAccount) -> Result<Account, StorageError>;

    async fn get_account(&self, id: u64) -> Result<Option<Account>, StorageError>;

    async fn get_account_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Account>, StorageError>;

    /// Stores a pre-validated submission, stamping it with the current time.
    async fn create_contact_message(
        &self,
        message: NewContactMessage,
    ) -> Result<ContactMessage, StorageError>;

    /// All messages in insertion order.
    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, StorageError>;

    /// Upserts by `repo_id`: an existing row keeps its id and takes the new
    /// fields.
    async fn save_repository(
        &self,
        summary: RepositorySummary,
    ) -> Result<CachedRepository, StorageError>;

    async fn list_repositories(&self) -> Result<Vec<CachedRepository>, StorageError>;

    async fn get_repository_by_repo_id(
        &self,
        repo_id: &str,
    ) -> Result<Option<CachedRepository>, StorageError>;
}
