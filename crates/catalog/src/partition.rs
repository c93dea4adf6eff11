//! Company / master partitioning and import from the master list.

use std::collections::HashSet;

use curio_core::ProductId;

use crate::model::Product;

/// The two disjoint views derived from the authoritative list.
///
/// Derived on demand; never stored alongside the list it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogPartition {
    /// Products curated into the company catalog (`is_company_active`).
    pub company_portfolio: Vec<Product>,
    /// Reference library products not (yet) in the company catalog.
    pub master_list: Vec<Product>,
}

impl CatalogPartition {
    pub fn len(&self) -> usize {
        self.company_portfolio.len() + self.master_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Split `products` by the company flag, preserving input order in both views.
pub fn partition(products: &[Product]) -> CatalogPartition {
    let (company_portfolio, master_list): (Vec<Product>, Vec<Product>) =
        products.iter().cloned().partition(|p| p.is_company_active);

    tracing::debug!(
        company = company_portfolio.len(),
        master = master_list.len(),
        "partitioned catalog"
    );

    CatalogPartition {
        company_portfolio,
        master_list,
    }
}

/// Move the selected master-list products into the company catalog.
///
/// Every product whose id is in `selected` comes back with the company flag
/// set; all others are returned unchanged. Unknown ids are ignored, and an
/// empty selection is the identity transform.
pub fn import_selected(products: &[Product], selected: &HashSet<ProductId>) -> Vec<Product> {
    if selected.is_empty() {
        return products.to_vec();
    }

    let mut imported = 0usize;
    let next: Vec<Product> = products
        .iter()
        .map(|p| {
            if selected.contains(&p.id) && !p.is_company_active {
                imported += 1;
                p.with_company_active(true)
            } else {
                p.clone()
            }
        })
        .collect();

    let matched = products.iter().filter(|p| selected.contains(&p.id)).count();
    if matched < selected.len() {
        tracing::debug!(
            ignored = selected.len() - matched,
            "import selection contained ids not present in the catalog"
        );
    }
    tracing::debug!(imported, "imported products into company catalog");

    next
}
