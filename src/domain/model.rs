use serde::{Deserialize, Deserializer, Serialize};

/// 加盟品牌：整份文件連同其分店與商品一起存取
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Franchise {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub branches: Vec<Branch>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub stock: i32,
}

/// Read model for the max-stock report; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductWithBranch {
    pub branch_name: String,
    pub product: Product,
}

impl Franchise {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            branches: Vec::new(),
        }
    }

    pub fn with_branch(mut self, branch: Branch) -> Self {
        self.branches.push(branch);
        self
    }
}

impl Branch {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
            products: Vec::new(),
        }
    }

    pub fn with_product(mut self, product: Product) -> Self {
        self.products.push(product);
        self
    }
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, stock: i32) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
            stock,
        }
    }
}

// `null` 與缺欄位都視為空序列
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_and_null_collections_decode_empty() {
        let franchise: Franchise = serde_json::from_str(r#"{"name": "Acme"}"#).unwrap();
        assert!(franchise.id.is_none());
        assert!(franchise.branches.is_empty());

        let franchise: Franchise =
            serde_json::from_str(r#"{"id": "f1", "name": "Acme", "branches": null}"#).unwrap();
        assert_eq!(franchise.id.as_deref(), Some("f1"));
        assert!(franchise.branches.is_empty());

        let branch: Branch =
            serde_json::from_str(r#"{"id": "b1", "name": "North", "products": null}"#).unwrap();
        assert!(branch.products.is_empty());
    }

    #[test]
    fn test_product_with_branch_wire_names() {
        let row = ProductWithBranch {
            branch_name: "North".to_string(),
            product: Product::new("p1", "Soda", 12),
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["branchName"], "North");
        assert_eq!(json["product"]["stock"], 12);
    }

    #[test]
    fn test_absent_id_is_omitted() {
        let json = serde_json::to_value(Franchise::new("Acme")).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["branches"], serde_json::json!([]));
    }
}
