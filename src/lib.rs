pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use adapters::http::router;
pub use adapters::storage::{InMemoryFranchiseRepository, RedbFranchiseRepository};
pub use config::{CliConfig, TomlConfig};
pub use crate::core::FranchiseService;
pub use domain::model::{Branch, Franchise, Product, ProductWithBranch};
pub use utils::error::{FranchiseError, Result};
