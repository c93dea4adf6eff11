//! Headline numbers for the catalog dashboard.

use serde::{Deserialize, Serialize};

use crate::model::Product;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSummary {
    pub total_products: usize,
    pub company_products: usize,
    pub master_products: usize,
    /// Sum of the stored (save-time) product stock, saturating.
    pub total_stock: i64,
    /// Sum of `cost * stock` over every SKU, in minor units. Negative stock
    /// counts as zero.
    pub stock_value: u64,
}

pub fn summarize(products: &[Product]) -> CatalogSummary {
    let company_products = products.iter().filter(|p| p.is_company_active).count();

    let stock_value = products
        .iter()
        .flat_map(|p| p.skus.iter())
        .map(|s| s.cost.saturating_mul(s.stock.max(0) as u64))
        .fold(0u64, u64::saturating_add);

    CatalogSummary {
        total_products: products.len(),
        company_products,
        master_products: products.len() - company_products,
        total_stock: products.iter().map(|p| p.stock).fold(0i64, i64::saturating_add),
        stock_value,
    }
}
