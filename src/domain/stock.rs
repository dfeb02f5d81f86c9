use crate::domain::model::{Franchise, Product, ProductWithBranch};

/// 每間分店庫存最多的商品。沒有商品的分店略過；同庫存取先出現者。
pub fn max_stock_per_branch(franchise: &Franchise) -> Vec<ProductWithBranch> {
    franchise
        .branches
        .iter()
        .filter_map(|branch| {
            first_max_by_stock(&branch.products).map(|product| ProductWithBranch {
                branch_name: branch.name.clone(),
                product: product.clone(),
            })
        })
        .collect()
}

// Iterator::max_by_key keeps the last maximum, so fold with a strict comparison.
fn first_max_by_stock(products: &[Product]) -> Option<&Product> {
    products.iter().fold(None, |best: Option<&Product>, product| match best {
        Some(current) if current.stock >= product.stock => Some(current),
        _ => Some(product),
    })
}
