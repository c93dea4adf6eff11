//! Create / commit / delete over the authoritative product list.
//!
//! These are the only operations that add or remove identities. Each one
//! returns a new list and leaves its input untouched.

use curio_core::{DomainError, DomainResult, ProductId, contains_id, position_of};

use crate::model::Product;

/// Blank draft for the master list.
pub fn new_product(id: ProductId) -> Product {
    Product::new(id)
}

/// Blank draft created from within the company view.
pub fn new_company_product(id: ProductId) -> Product {
    Product::new(id).with_company_active(true)
}

pub fn find_product<'a>(products: &'a [Product], id: &ProductId) -> Option<&'a Product> {
    products.iter().find(|p| &p.id == id)
}

/// Append a new product to the authoritative list.
///
/// The id must not already be present.
pub fn create_product(products: &[Product], product: Product) -> DomainResult<Vec<Product>> {
    if contains_id(products, &product.id) {
        return Err(DomainError::conflict(format!("product {} already exists", product.id)));
    }

    let mut next = Vec::with_capacity(products.len() + 1);
    next.extend_from_slice(products);
    next.push(product);
    Ok(next)
}

/// Commit a saved product: replace the record with the same id in place, or
/// append it if the id is unseen.
pub fn commit_product(products: &[Product], saved: Product) -> Vec<Product> {
    let mut next = products.to_vec();
    match position_of(products, &saved.id) {
        Some(ix) => next[ix] = saved,
        None => next.push(saved),
    }
    next
}

/// Remove the product with the given id. An unknown id is a no-op.
pub fn delete_product(products: &[Product], id: &ProductId) -> Vec<Product> {
    products.iter().filter(|p| &p.id != id).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str) -> Product {
        Product {
            name: format!("Product {id}"),
            ..Product::new(ProductId::new(id))
        }
    }

    fn five() -> Vec<Product> {
        ["a", "b", "c", "d", "e"].into_iter().map(product).collect()
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn delete_removes_only_matching_id() {
        let products = five();
        let next = delete_product(&products, &ProductId::new("c"));
        assert_eq!(ids(&next), vec!["a", "b", "d", "e"]);
    }

    #[test]
    fn delete_unknown_id_is_noop() {
        let products = five();
        assert_eq!(delete_product(&products, &ProductId::new("zzz")), products);
    }

    #[test]
    fn create_appends_new_product() {
        let products = five();
        let next = create_product(&products, product("f")).unwrap();
        assert_eq!(ids(&next), vec!["a", "b", "c", "d", "e", "f"]);
        assert_eq!(products.len(), 5);
    }

    #[test]
    fn create_rejects_duplicate_id() {
        let err = create_product(&five(), product("b")).unwrap_err();
        match err {
            DomainError::Conflict(_) => {}
            _ => panic!("Expected Conflict error for duplicate product id"),
        }
    }

    #[test]
    fn commit_replaces_in_place_or_appends() {
        let products = five();
        let mut edited = product("b");
        edited.brand = "Acme".to_string();

        let next = commit_product(&products, edited.clone());
        assert_eq!(ids(&next), ids(&products));
        assert_eq!(next[1], edited);

        let next = commit_product(&products, product("z"));
        assert_eq!(next.len(), 6);
        assert_eq!(next[5].id.as_str(), "z");
    }

    #[test]
    fn new_company_product_starts_in_company_scope() {
        let draft = new_company_product(ProductId::new("n"));
        assert!(draft.is_company_active);
        assert!(draft.skus.is_empty());
        assert!(!new_product(ProductId::new("n")).is_company_active);
    }

    #[test]
    fn find_product_by_id() {
        let products = five();
        assert_eq!(find_product(&products, &ProductId::new("d")).unwrap().name, "Product d");
        assert!(find_product(&products, &ProductId::new("q")).is_none());
    }
}
