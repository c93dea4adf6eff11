//! Serialized form of the authoritative list plus its category set.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use curio_core::{DomainError, DomainResult};

use crate::categories::default_categories;
use crate::model::{CategoryItem, Product};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub categories: Vec<CategoryItem>,
}

impl CatalogSnapshot {
    /// Decode and validate a snapshot. An empty category set is replaced by
    /// [`default_categories`].
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let mut snapshot: Self = serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("malformed catalog snapshot: {e}")))?;

        validate_products(&snapshot.products)?;
        if snapshot.categories.is_empty() {
            snapshot.categories = default_categories();
        }
        Ok(snapshot)
    }

    pub fn to_json(&self) -> DomainResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DomainError::invariant(format!("catalog snapshot not serializable: {e}")))
    }
}

/// Check identity invariants: product ids unique across the list, SKU ids
/// unique within each product.
pub fn validate_products(products: &[Product]) -> DomainResult<()> {
    let mut product_ids = HashSet::with_capacity(products.len());
    for product in products {
        if product.id.as_str().trim().is_empty() {
            return Err(DomainError::invalid_id("product id is empty"));
        }
        if !product_ids.insert(&product.id) {
            return Err(DomainError::invariant(format!("duplicate product id {}", product.id)));
        }

        validate_skus(product)?;
    }
    Ok(())
}

/// Check that SKU ids are unique within `product`.
pub fn validate_skus(product: &Product) -> DomainResult<()> {
    let mut sku_ids = HashSet::with_capacity(product.skus.len());
    for sku in &product.skus {
        if !sku_ids.insert(&sku.id) {
            return Err(DomainError::invariant(format!(
                "duplicate sku id {} in product {}",
                sku.id, product.id
            )));
        }
    }
    Ok(())
}
