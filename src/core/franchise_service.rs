use crate::domain::aggregate;
use crate::domain::model::{Branch, Franchise, Product, ProductWithBranch};
use crate::domain::ports::FranchiseRepository;
use crate::domain::stock;
use crate::utils::error::{FranchiseError, Result};
use std::sync::Arc;

/// Franchise use cases. Every nested operation is fetch → check → mutate → save.
///
/// There is no locking or versioning: two concurrent writes against the same
/// franchise both load the old document and the later save wins.
#[derive(Clone)]
pub struct FranchiseService {
    repository: Arc<dyn FranchiseRepository>,
}

impl FranchiseService {
    pub fn new(repository: Arc<dyn FranchiseRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_franchise(&self, franchise: Franchise) -> Result<Franchise> {
        let created = self.repository.save(franchise).await?;
        tracing::info!("Created franchise {:?} ({})", created.id, created.name);
        Ok(created)
    }

    pub async fn get_franchise(&self, id: &str) -> Result<Option<Franchise>> {
        self.repository.find_by_id(id).await
    }

    pub async fn list_franchises(&self) -> Result<Vec<Franchise>> {
        self.repository.find_all().await
    }

    pub async fn delete_franchise(&self, id: &str) -> Result<()> {
        self.repository.delete_by_id(id).await?;
        tracing::info!("Deleted franchise {}", id);
        Ok(())
    }

    pub async fn add_branch(&self, franchise_id: &str, branch: Branch) -> Result<Franchise> {
        let mut franchise = self.load(franchise_id).await?;
        let branch_id = aggregate::append_branch(&mut franchise, branch).id.clone();
        tracing::debug!("Appending branch {:?} to franchise {}", branch_id, franchise_id);
        self.repository.save(franchise).await
    }

    pub async fn list_branches(&self, franchise_id: &str) -> Result<Vec<Branch>> {
        Ok(self.load(franchise_id).await?.branches)
    }

    pub async fn max_stock_products(&self, franchise_id: &str) -> Result<Vec<ProductWithBranch>> {
        let franchise = self.load(franchise_id).await?;
        let report = stock::max_stock_per_branch(&franchise);
        tracing::debug!(
            "Max-stock report for franchise {}: {} of {} branches",
            franchise_id,
            report.len(),
            franchise.branches.len()
        );
        Ok(report)
    }

    pub async fn rename_franchise(&self, franchise_id: &str, new_name: &str) -> Result<Franchise> {
        let mut franchise = self.load(franchise_id).await?;
        aggregate::rename(&mut franchise, new_name);
        self.repository.save(franchise).await
    }

    pub async fn rename_branch(
        &self,
        franchise_id: &str,
        branch_id: &str,
        new_name: &str,
    ) -> Result<Branch> {
        let mut franchise = self.load(franchise_id).await?;
        let branch = aggregate::rename_branch(&mut franchise, branch_id, new_name)?.clone();
        self.repository.save(franchise).await?;
        tracing::debug!("Renamed branch {} of franchise {}", branch_id, franchise_id);
        Ok(branch)
    }

    pub async fn rename_product(
        &self,
        franchise_id: &str,
        branch_id: &str,
        product_id: &str,
        new_name: &str,
    ) -> Result<Product> {
        let mut franchise = self.load(franchise_id).await?;
        let product =
            aggregate::rename_product(&mut franchise, branch_id, product_id, new_name)?.clone();
        self.repository.save(franchise).await?;
        tracing::debug!(
            "Renamed product {} in branch {} of franchise {}",
            product_id,
            branch_id,
            franchise_id
        );
        Ok(product)
    }

    pub async fn modify_product_stock(
        &self,
        franchise_id: &str,
        branch_id: &str,
        product_id: &str,
        new_stock: i32,
    ) -> Result<Product> {
        let mut franchise = self.load(franchise_id).await?;
        let product =
            aggregate::set_stock(&mut franchise, branch_id, product_id, new_stock)?.clone();
        self.repository.save(franchise).await?;
        tracing::debug!(
            "Stock of product {} in branch {} set to {}",
            product_id,
            branch_id,
            new_stock
        );
        Ok(product)
    }

    pub async fn delete_product(
        &self,
        franchise_id: &str,
        branch_id: &str,
        product_id: &str,
    ) -> Result<()> {
        let mut franchise = self.load(franchise_id).await?;
        aggregate::remove_product(&mut franchise, branch_id, product_id)?;
        self.repository.save(franchise).await?;
        tracing::info!(
            "Deleted product {} from branch {} of franchise {}",
            product_id,
            branch_id,
            franchise_id
        );
        Ok(())
    }

    async fn load(&self, franchise_id: &str) -> Result<Franchise> {
        match self.repository.find_by_id(franchise_id).await? {
            Some(franchise) => Ok(franchise),
            None => {
                tracing::debug!("Franchise {} not found", franchise_id);
                Err(FranchiseError::FranchiseNotFound)
            }
        }
    }
}
