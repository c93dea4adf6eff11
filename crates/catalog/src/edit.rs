//! Working copy of a single product while it is being edited.

use curio_core::{DomainError, DomainResult, SkuId, contains_id, position_of};

use crate::model::{CategoryItem, Product, ProductPatch, ProductSku, SkuPatch};
use crate::save::prepare_for_save;

/// An open edit surface.
///
/// The session owns a copy of the product; nothing reaches the authoritative
/// list until [`EditSession::save`] succeeds and the caller commits the
/// result. Dropping (or [`EditSession::cancel`]ing) the session discards the
/// draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    draft: Product,
}

impl EditSession {
    pub fn open(product: &Product) -> Self {
        Self {
            draft: product.clone(),
        }
    }

    pub fn draft(&self) -> &Product {
        &self.draft
    }

    pub fn apply(&mut self, patch: &ProductPatch) {
        self.draft = patch.apply_to(&self.draft);
    }

    /// Append a blank SKU with the given id.
    pub fn add_sku(&mut self, id: SkuId) -> DomainResult<&ProductSku> {
        if contains_id(&self.draft.skus, &id) {
            return Err(DomainError::conflict(format!("sku {id} already exists")));
        }
        self.draft.skus.push(ProductSku::new(id));
        let last = self.draft.skus.len() - 1;
        Ok(&self.draft.skus[last])
    }

    pub fn update_sku(&mut self, id: &SkuId, patch: &SkuPatch) -> DomainResult<()> {
        let ix = position_of(&self.draft.skus, id).ok_or_else(DomainError::not_found)?;
        self.draft.skus[ix] = patch.apply_to(&self.draft.skus[ix]);
        Ok(())
    }

    pub fn remove_sku(&mut self, id: &SkuId) -> DomainResult<ProductSku> {
        let ix = position_of(&self.draft.skus, id).ok_or_else(DomainError::not_found)?;
        Ok(self.draft.skus.remove(ix))
    }

    /// Derive the saved record. On error the session stays open and the
    /// draft is unchanged.
    pub fn save(&self, categories: &[CategoryItem]) -> DomainResult<Product> {
        prepare_for_save(&self.draft, categories)
    }

    pub fn cancel(self) {
        tracing::debug!(product_id = %self.draft.id, "edit session cancelled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curio_core::{CategoryId, ProductId};

    fn categories() -> Vec<CategoryItem> {
        vec![CategoryItem::new("audio", "Audio", "headphones")]
    }

    fn session() -> EditSession {
        EditSession::open(&Product::new(ProductId::new("p-1")))
    }

    #[test]
    fn edit_then_save_derives_fields() {
        let mut s = session();
        s.apply(&ProductPatch {
            name: Some("Headphones".to_string()),
            category_id: Some(CategoryId::new("audio")),
            ..ProductPatch::default()
        });
        s.add_sku(SkuId::new("s-1")).unwrap();
        s.add_sku(SkuId::new("s-2")).unwrap();
        s.update_sku(
            &SkuId::new("s-1"),
            &SkuPatch {
                price: Some(7900),
                stock: Some(3),
                ..SkuPatch::default()
            },
        )
        .unwrap();
        s.update_sku(
            &SkuId::new("s-2"),
            &SkuPatch {
                price: Some(8900),
                stock: Some(5),
                ..SkuPatch::default()
            },
        )
        .unwrap();

        let saved = s.save(&categories()).unwrap();
        assert_eq!(saved.price, 7900);
        assert_eq!(saved.stock, 8);
        assert_eq!(saved.category, "Audio");
    }

    #[test]
    fn failed_save_keeps_session_open() {
        let mut s = session();
        s.add_sku(SkuId::new("s-1")).unwrap();
        let before = s.clone();

        let err = s.save(&categories()).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for unnamed product"),
        }
        assert_eq!(s, before);

        s.apply(&ProductPatch {
            name: Some("Named".to_string()),
            ..ProductPatch::default()
        });
        assert!(s.save(&categories()).is_ok());
    }

    #[test]
    fn add_sku_rejects_duplicate_id() {
        let mut s = session();
        s.add_sku(SkuId::new("s-1")).unwrap();
        let err = s.add_sku(SkuId::new("s-1")).unwrap_err();
        match err {
            DomainError::Conflict(_) => {}
            _ => panic!("Expected Conflict error for duplicate SKU id"),
        }
        assert_eq!(s.draft().skus.len(), 1);
    }

    #[test]
    fn unknown_sku_is_not_found() {
        let mut s = session();
        assert_eq!(s.remove_sku(&SkuId::new("nope")).unwrap_err(), DomainError::NotFound);
        assert_eq!(
            s.update_sku(&SkuId::new("nope"), &SkuPatch::default()).unwrap_err(),
            DomainError::NotFound
        );
    }

    #[test]
    fn remove_sku_keeps_order_of_rest() {
        let mut s = session();
        for id in ["s-1", "s-2", "s-3"] {
            s.add_sku(SkuId::new(id)).unwrap();
        }
        let removed = s.remove_sku(&SkuId::new("s-2")).unwrap();
        assert_eq!(removed.id.as_str(), "s-2");
        let left: Vec<&str> = s.draft().skus.iter().map(|k| k.id.as_str()).collect();
        assert_eq!(left, vec!["s-1", "s-3"]);
    }

    #[test]
    fn session_does_not_touch_source_record() {
        let source = Product::new(ProductId::new("p-1"));
        let mut s = EditSession::open(&source);
        s.apply(&ProductPatch {
            name: Some("Changed".to_string()),
            ..ProductPatch::default()
        });
        s.cancel();
        assert_eq!(source.name, "");
    }
}
