use crate::domain::model::Franchise;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Whole-aggregate persistence for franchise documents.
#[async_trait]
pub trait FranchiseRepository: Send + Sync {
    /// Insert or replace the document. An id is assigned when absent.
    async fn save(&self, franchise: Franchise) -> Result<Franchise>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Franchise>>;
    async fn find_all(&self) -> Result<Vec<Franchise>>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Franchise>>;
    /// Deleting an absent id is not an error.
    async fn delete_by_id(&self, id: &str) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn listen_addr(&self) -> &str;
    fn store_backend(&self) -> &str;
    fn data_path(&self) -> &str;
    fn verbose(&self) -> bool;
    /// Explicit log level for this crate; overrides `verbose` when set.
    fn log_level(&self) -> Option<&str> {
        None
    }
    fn json_logs(&self) -> bool;
}
