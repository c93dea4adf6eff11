//! Owner of the authoritative product list.
//!
//! `Catalog` is the single holder of state: each mutating call computes a new
//! list from the current one with the pure operations of this crate and then
//! swaps it in wholesale. Views (company portfolio, master list, searches)
//! are derived on demand and never cached.

use std::collections::HashSet;

use curio_core::{DomainResult, ProductId};

use crate::edit::EditSession;
use crate::model::{CategoryItem, Product};
use crate::ops;
use crate::partition::{self, CatalogPartition};
use crate::query::{ProductQuery, filter_products};
use crate::reconcile::{ReconcileReport, reconcile_scope_detailed};
use crate::snapshot::{CatalogSnapshot, validate_products, validate_skus};
use crate::summary::{CatalogSummary, summarize};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<CategoryItem>,
}

impl Catalog {
    pub fn new(products: Vec<Product>, categories: Vec<CategoryItem>) -> DomainResult<Self> {
        validate_products(&products)?;
        Ok(Self {
            products,
            categories,
        })
    }

    pub fn from_snapshot(snapshot: CatalogSnapshot) -> DomainResult<Self> {
        Self::new(snapshot.products, snapshot.categories)
    }

    pub fn to_snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            products: self.products.clone(),
            categories: self.categories.clone(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[CategoryItem] {
        &self.categories
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        ops::find_product(&self.products, id)
    }

    pub fn partition(&self) -> CatalogPartition {
        partition::partition(&self.products)
    }

    pub fn search(&self, query: &ProductQuery) -> Vec<Product> {
        filter_products(&self.products, query)
    }

    pub fn summary(&self) -> CatalogSummary {
        summarize(&self.products)
    }

    /// Replace the category set. Products keep their stored display names
    /// until they are saved again.
    pub fn set_categories(&mut self, categories: Vec<CategoryItem>) {
        self.categories = categories;
    }

    /// Move master-list products into the company catalog. Returns how many
    /// products changed scope.
    pub fn import_selected(&mut self, selected: &HashSet<ProductId>) -> usize {
        let next = partition::import_selected(&self.products, selected);
        let changed = self
            .products
            .iter()
            .zip(next.iter())
            .filter(|(before, after)| before.is_company_active != after.is_company_active)
            .count();
        self.publish(next);
        tracing::info!(imported = changed, "imported products into company catalog");
        changed
    }

    /// Merge an edited company view back into the catalog.
    ///
    /// Every scope record must keep its SKU ids unique; otherwise nothing is
    /// published and the catalog is unchanged.
    pub fn reconcile_scope(&mut self, edited_scope: &[Product]) -> DomainResult<ReconcileReport> {
        for product in edited_scope {
            validate_skus(product)?;
        }
        let reconciled = reconcile_scope_detailed(&self.products, edited_scope);
        self.publish(reconciled.products);
        tracing::info!(
            replaced = reconciled.report.replaced.len(),
            demoted = reconciled.report.demoted.len(),
            ignored = reconciled.report.ignored.len(),
            "reconciled company scope"
        );
        Ok(reconciled.report)
    }

    /// Delete a product. Returns whether anything was removed.
    pub fn delete_product(&mut self, id: &ProductId) -> bool {
        let next = ops::delete_product(&self.products, id);
        let removed = next.len() != self.products.len();
        self.publish(next);
        if removed {
            tracing::info!(product_id = %id, "deleted product");
        }
        removed
    }

    pub fn create_product(&mut self, product: Product) -> DomainResult<()> {
        let id = product.id.clone();
        let next = ops::create_product(&self.products, product)?;
        self.publish(next);
        tracing::info!(product_id = %id, "created product");
        Ok(())
    }

    /// Open an edit session on an existing product.
    pub fn edit(&self, id: &ProductId) -> Option<EditSession> {
        self.get(id).map(EditSession::open)
    }

    /// Save an edit session and commit the result.
    ///
    /// On a validation error nothing is committed and the caller still holds
    /// the session.
    pub fn save_edit(&mut self, session: &EditSession) -> DomainResult<Product> {
        let saved = session.save(&self.categories)?;
        let next = ops::commit_product(&self.products, saved.clone());
        self.publish(next);
        tracing::info!(
            product_id = %saved.id,
            price = saved.price,
            stock = saved.stock,
            "saved product"
        );
        Ok(saved)
    }

    fn publish(&mut self, next: Vec<Product>) {
        self.products = next;
    }
}
