use crate::domain::aggregate::new_id;
use crate::domain::model::Franchise;
use crate::domain::ports::FranchiseRepository;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Process-local document store; contents are lost on shutdown.
#[derive(Debug, Default)]
pub struct InMemoryFranchiseRepository {
    documents: RwLock<BTreeMap<String, Franchise>>,
}

impl InMemoryFranchiseRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FranchiseRepository for InMemoryFranchiseRepository {
    async fn save(&self, mut franchise: Franchise) -> Result<Franchise> {
        let id = franchise.id.get_or_insert_with(new_id).clone();
        self.documents.write().await.insert(id, franchise.clone());
        Ok(franchise)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Franchise>> {
        Ok(self.documents.read().await.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Franchise>> {
        Ok(self.documents.read().await.values().cloned().collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Franchise>> {
        Ok(self
            .documents
            .read()
            .await
            .values()
            .find(|f| f.name == name)
            .cloned())
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        self.documents.write().await.remove(id);
        Ok(())
    }
}
