//! Locate-then-mutate operations on a loaded franchise aggregate.
//!
//! Nothing here touches the store. Callers load the whole document, apply
//! one of these functions and save the whole document back.

use crate::domain::model::{Branch, Franchise, Product};
use crate::utils::error::{FranchiseError, Result};

pub fn new_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Append a branch, assigning identifiers to it and its products when absent.
pub fn append_branch(franchise: &mut Franchise, mut branch: Branch) -> &Branch {
    if branch.id.is_none() {
        branch.id = Some(new_id());
    }
    for product in branch.products.iter_mut().filter(|p| p.id.is_none()) {
        product.id = Some(new_id());
    }
    franchise.branches.push(branch);
    &franchise.branches[franchise.branches.len() - 1]
}

pub fn rename(franchise: &mut Franchise, new_name: &str) {
    franchise.name = new_name.to_string();
}

/// First branch whose id equals `branch_id`.
pub fn branch_mut<'a>(franchise: &'a mut Franchise, branch_id: &str) -> Result<&'a mut Branch> {
    franchise
        .branches
        .iter_mut()
        .find(|b| b.id.as_deref() == Some(branch_id))
        .ok_or(FranchiseError::BranchNotFound)
}

/// Branch lookup first, then the first product in it whose id equals `product_id`.
pub fn product_mut<'a>(
    franchise: &'a mut Franchise,
    branch_id: &str,
    product_id: &str,
) -> Result<&'a mut Product> {
    branch_mut(franchise, branch_id)?
        .products
        .iter_mut()
        .find(|p| p.id.as_deref() == Some(product_id))
        .ok_or(FranchiseError::ProductNotFound)
}

pub fn rename_branch<'a>(
    franchise: &'a mut Franchise,
    branch_id: &str,
    new_name: &str,
) -> Result<&'a Branch> {
    let branch = branch_mut(franchise, branch_id)?;
    branch.name = new_name.to_string();
    Ok(branch)
}

pub fn rename_product<'a>(
    franchise: &'a mut Franchise,
    branch_id: &str,
    product_id: &str,
    new_name: &str,
) -> Result<&'a Product> {
    let product = product_mut(franchise, branch_id, product_id)?;
    product.name = new_name.to_string();
    Ok(product)
}

/// Negative values are stored as given.
pub fn set_stock<'a>(
    franchise: &'a mut Franchise,
    branch_id: &str,
    product_id: &str,
    new_stock: i32,
) -> Result<&'a Product> {
    let product = product_mut(franchise, branch_id, product_id)?;
    product.stock = new_stock;
    Ok(product)
}

/// Remove the first product matching `product_id` from the branch.
pub fn remove_product(franchise: &mut Franchise, branch_id: &str, product_id: &str) -> Result<Product> {
    let branch = branch_mut(franchise, branch_id)?;
    let index = branch
        .products
        .iter()
        .position(|p| p.id.as_deref() == Some(product_id))
        .ok_or(FranchiseError::ProductNotFound)?;
    Ok(branch.products.remove(index))
}
