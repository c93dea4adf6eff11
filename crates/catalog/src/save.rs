//! Save-time derivation of aggregate product fields.

use curio_core::{DomainError, DomainResult};

use crate::categories::find_category;
use crate::model::{CategoryItem, Product, ProductSku};
use crate::snapshot::validate_skus;

/// Price of the first SKU, or 0 when there are none.
pub fn derived_price(skus: &[ProductSku]) -> u64 {
    skus.first().map(|s| s.price).unwrap_or(0)
}

/// Sum of all SKU stock levels, saturating at the `i64` bounds.
pub fn derived_stock(skus: &[ProductSku]) -> i64 {
    skus.iter().map(|s| s.stock).fold(0i64, i64::saturating_add)
}

/// Prepare an edited product for commit.
///
/// Recomputes `price` and `stock` from the SKUs and refreshes the `category`
/// display name from `category_id`. If the category cannot be resolved the
/// previous display name is kept. A product without a name, or with two SKUs
/// sharing an id, is rejected and nothing is derived.
pub fn prepare_for_save(edited: &Product, categories: &[CategoryItem]) -> DomainResult<Product> {
    if edited.name.trim().is_empty() {
        return Err(DomainError::validation("name cannot be empty"));
    }
    validate_skus(edited)?;

    let category = match &edited.category_id {
        Some(id) => match find_category(categories, id) {
            Some(found) => found.name.clone(),
            None => {
                tracing::warn!(
                    product_id = %edited.id,
                    category_id = %id,
                    "category not found; keeping previous display name"
                );
                edited.category.clone()
            }
        },
        None => edited.category.clone(),
    };

    Ok(Product {
        price: derived_price(&edited.skus),
        stock: derived_stock(&edited.skus),
        category,
        ..edited.clone()
    })
}
