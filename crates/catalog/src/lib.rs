//! Catalog domain module.
//!
//! This crate contains the rules for curating a company catalog out of a
//! reference product library, implemented purely as deterministic list
//! transformations (no IO, no HTTP, no storage). Every operation takes the
//! current snapshot of the authoritative product list and returns a new one;
//! nothing is mutated in place.

pub mod catalog;
pub mod categories;
pub mod edit;
pub mod model;
pub mod ops;
pub mod partition;
pub mod query;
pub mod reconcile;
pub mod save;
pub mod snapshot;
pub mod summary;

pub use catalog::Catalog;
pub use categories::{default_categories, find_category};
pub use edit::EditSession;
pub use model::{CategoryItem, Product, ProductPatch, ProductSku, SkuPatch};
pub use ops::{
    commit_product, create_product, delete_product, find_product, new_company_product, new_product,
};
pub use partition::{CatalogPartition, import_selected, partition};
pub use query::{ProductQuery, Scope, filter_products};
pub use reconcile::{ReconcileReport, Reconciled, reconcile_scope, reconcile_scope_detailed};
pub use save::{derived_price, derived_stock, prepare_for_save};
pub use snapshot::{CatalogSnapshot, validate_products, validate_skus};
pub use summary::{CatalogSummary, summarize};

pub use curio_core::{CategoryId, DomainError, DomainResult, ProductId, SkuId};
