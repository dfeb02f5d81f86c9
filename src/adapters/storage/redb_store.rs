use crate::domain::aggregate::new_id;
use crate::domain::model::Franchise;
use crate::domain::ports::FranchiseRepository;
use crate::utils::error::{FranchiseError, Result};
use async_trait::async_trait;
use redb::{Database, ReadableTable, TableDefinition};
use std::path::Path;
use std::sync::Arc;

/// One JSON document per franchise, keyed by id.
const FRANCHISES: TableDefinition<&str, &[u8]> = TableDefinition::new("franchises_collection");

/// Embedded on-disk document store backed by redb.
///
/// redb is synchronous, so every call is moved onto tokio's blocking pool
/// and request tasks only suspend while waiting for it.
#[derive(Clone)]
pub struct RedbFranchiseRepository {
    db: Arc<Database>,
}

impl RedbFranchiseRepository {
    /// 開啟或建立資料庫，並確保資料表存在
    pub fn open(path: &Path) -> Result<Self> {
        let db = Database::create(path).map_err(FranchiseError::storage)?;

        let write_txn = db.begin_write().map_err(FranchiseError::storage)?;
        {
            let _table = write_txn
                .open_table(FRANCHISES)
                .map_err(FranchiseError::storage)?;
        }
        write_txn.commit().map_err(FranchiseError::storage)?;

        tracing::debug!("Opened redb document store at {}", path.display());
        Ok(Self { db: Arc::new(db) })
    }

    async fn blocking<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Database) -> Result<T> + Send + 'static,
    {
        let db = Arc::clone(&self.db);
        tokio::task::spawn_blocking(move || op(&db))
            .await
            .map_err(FranchiseError::storage)?
    }
}

fn read_one(db: &Database, id: &str) -> Result<Option<Franchise>> {
    let read_txn = db.begin_read().map_err(FranchiseError::storage)?;
    let table = read_txn
        .open_table(FRANCHISES)
        .map_err(FranchiseError::storage)?;

    match table.get(id).map_err(FranchiseError::storage)? {
        Some(bytes) => Ok(Some(serde_json::from_slice(bytes.value())?)),
        None => Ok(None),
    }
}

fn read_all(db: &Database) -> Result<Vec<Franchise>> {
    let read_txn = db.begin_read().map_err(FranchiseError::storage)?;
    let table = read_txn
        .open_table(FRANCHISES)
        .map_err(FranchiseError::storage)?;

    let mut franchises = Vec::new();
    for entry in table.iter().map_err(FranchiseError::storage)? {
        let (_, bytes) = entry.map_err(FranchiseError::storage)?;
        franchises.push(serde_json::from_slice(bytes.value())?);
    }
    Ok(franchises)
}

#[async_trait]
impl FranchiseRepository for RedbFranchiseRepository {
    async fn save(&self, mut franchise: Franchise) -> Result<Franchise> {
        let id = franchise.id.get_or_insert_with(new_id).clone();
        let document = serde_json::to_vec(&franchise)?;

        self.blocking(move |db| {
            let write_txn = db.begin_write().map_err(FranchiseError::storage)?;
            {
                let mut table = write_txn
                    .open_table(FRANCHISES)
                    .map_err(FranchiseError::storage)?;
                table
                    .insert(id.as_str(), document.as_slice())
                    .map_err(FranchiseError::storage)?;
            }
            write_txn.commit().map_err(FranchiseError::storage)
        })
        .await?;

        Ok(franchise)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Franchise>> {
        let id = id.to_string();
        self.blocking(move |db| read_one(db, &id)).await
    }

    async fn find_all(&self) -> Result<Vec<Franchise>> {
        self.blocking(read_all).await
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Franchise>> {
        let name = name.to_string();
        self.blocking(move |db| Ok(read_all(db)?.into_iter().find(|f| f.name == name)))
            .await
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        let id = id.to_string();
        self.blocking(move |db| {
            let write_txn = db.begin_write().map_err(FranchiseError::storage)?;
            {
                let mut table = write_txn
                    .open_table(FRANCHISES)
                    .map_err(FranchiseError::storage)?;
                table
                    .remove(id.as_str())
                    .map_err(FranchiseError::storage)?;
            }
            write_txn.commit().map_err(FranchiseError::storage)
        })
        .await
    }
}
