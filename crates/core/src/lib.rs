//! `curio-core` — domain foundation building blocks for the catalog.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::{Entity, contains_id, position_of};
pub use error::{DomainError, DomainResult};
pub use id::{CategoryId, ProductId, SkuId};
