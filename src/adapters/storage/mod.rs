pub mod memory;
pub mod redb_store;

pub use memory::InMemoryFranchiseRepository;
pub use redb_store::RedbFranchiseRepository;

use crate::domain::ports::FranchiseRepository;
use crate::utils::error::{FranchiseError, Result};
use std::path::Path;
use std::sync::Arc;

pub const MEMORY_BACKEND: &str = "memory";
pub const REDB_BACKEND: &str = "redb";

/// 依設定選擇儲存後端
pub fn open_repository(backend: &str, data_path: &str) -> Result<Arc<dyn FranchiseRepository>> {
    match backend {
        MEMORY_BACKEND => Ok(Arc::new(InMemoryFranchiseRepository::new())),
        REDB_BACKEND => {
            let path = Path::new(data_path);
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            Ok(Arc::new(RedbFranchiseRepository::open(path)?))
        }
        other => Err(FranchiseError::InvalidConfigValueError {
            field: "storage.backend".to_string(),
            value: other.to_string(),
            reason: format!("Valid backends: {}, {}", MEMORY_BACKEND, REDB_BACKEND),
        }),
    }
}
