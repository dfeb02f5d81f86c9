pub mod franchise_service;

pub use crate::domain::model::{Branch, Franchise, Product, ProductWithBranch};
pub use crate::domain::ports::{ConfigProvider, FranchiseRepository};
pub use crate::utils::error::Result;
pub use franchise_service::FranchiseService;
