//! Merging an edited company-scoped view back into the authoritative list.

use std::collections::{HashMap, HashSet};

use curio_core::ProductId;

use crate::model::Product;

/// What a reconciliation did, per product id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Products replaced by their edited-scope version.
    pub replaced: Vec<ProductId>,
    /// Company products missing from the edited scope, now moved back to the
    /// master list.
    pub demoted: Vec<ProductId>,
    /// Ids present only in the edited scope. Reconciliation never creates
    /// products, so these were dropped.
    pub ignored: Vec<ProductId>,
}

/// Result of [`reconcile_scope_detailed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled {
    pub products: Vec<Product>,
    pub report: ReconcileReport,
}

/// Merge `edited_scope` back into `products`.
///
/// See [`reconcile_scope_detailed`] for the rules.
pub fn reconcile_scope(products: &[Product], edited_scope: &[Product]) -> Vec<Product> {
    reconcile_scope_detailed(products, edited_scope).products
}

/// Merge `edited_scope` back into `products` and report what changed.
///
/// - A product whose id appears in `edited_scope` is replaced wholesale by
///   that version (last occurrence wins if the scope repeats an id).
/// - A company product absent from `edited_scope` is demoted to the master
///   list; it is never physically removed.
/// - Any other product is returned unchanged.
/// - Ids only present in `edited_scope` are ignored.
///
/// Output order is the order of `products`.
pub fn reconcile_scope_detailed(products: &[Product], edited_scope: &[Product]) -> Reconciled {
    let edited: HashMap<&ProductId, &Product> = edited_scope.iter().map(|p| (&p.id, p)).collect();

    let mut report = ReconcileReport::default();
    let mut next = Vec::with_capacity(products.len());

    for product in products {
        match edited.get(&product.id) {
            Some(&replacement) => {
                report.replaced.push(product.id.clone());
                next.push(replacement.clone());
            }
            None if product.is_company_active => {
                report.demoted.push(product.id.clone());
                next.push(product.with_company_active(false));
            }
            None => next.push(product.clone()),
        }
    }

    let known: HashSet<&ProductId> = products.iter().map(|p| &p.id).collect();
    let mut ignored_seen = HashSet::new();
    for product in edited_scope {
        if !known.contains(&product.id) && ignored_seen.insert(&product.id) {
            report.ignored.push(product.id.clone());
        }
    }

    if !report.ignored.is_empty() {
        tracing::warn!(
            ignored = report.ignored.len(),
            "edited scope held unknown products; create them directly instead"
        );
    }
    tracing::debug!(
        replaced = report.replaced.len(),
        demoted = report.demoted.len(),
        "reconciled edited scope"
    );

    Reconciled {
        products: next,
        report,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::partition;

    fn product(id: &str, active: bool) -> Product {
        Product {
            name: format!("Product {id}"),
            is_company_active: active,
            ..Product::new(ProductId::new(id))
        }
    }

    #[test]
    fn removed_company_product_is_demoted_not_deleted() {
        let products = vec![product("a", true), product("b", true), product("m", false)];
        let scope = vec![product("a", true)];

        let out = reconcile_scope_detailed(&products, &scope);
        assert_eq!(out.products.len(), 3);
        assert!(out.products[0].is_company_active);
        assert!(!out.products[1].is_company_active);
        assert_eq!(out.products[1].name, "Product b");
        assert_eq!(out.products[2], product("m", false));
        assert_eq!(out.report.demoted, vec![ProductId::new("b")]);
        assert_eq!(out.report.replaced, vec![ProductId::new("a")]);
    }

    #[test]
    fn edited_records_replace_originals() {
        let products = vec![product("a", true), product("m", false)];
        let mut edited = product("a", true);
        edited.name = "Renamed".to_string();
        edited.price = 4200;

        let out = reconcile_scope(&products, &[edited.clone()]);
        assert_eq!(out[0], edited);
        assert_eq!(out[1], products[1]);
    }

    #[test]
    fn unknown_scope_ids_are_not_added() {
        let products = vec![product("a", true)];
        let scope = vec![product("a", true), product("new", true)];

        let out = reconcile_scope_detailed(&products, &scope);
        assert_eq!(out.products, products);
        assert_eq!(out.report.ignored, vec![ProductId::new("new")]);
    }

    #[test]
    fn last_duplicate_in_scope_wins() {
        let products = vec![product("a", true)];
        let mut first = product("a", true);
        first.brand = "first".to_string();
        let mut second = product("a", true);
        second.brand = "second".to_string();

        let out = reconcile_scope(&products, &[first, second]);
        assert_eq!(out[0].brand, "second");
    }

    #[test]
    fn empty_scope_demotes_whole_portfolio() {
        let products = vec![product("a", true), product("b", false), product("c", true)];
        let out = reconcile_scope(&products, &[]);
        assert!(out.iter().all(|p| !p.is_company_active));
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn reconciling_unchanged_portfolio_is_identity() {
        let products = vec![product("a", true), product("b", false), product("c", true)];
        let scope = partition(&products).company_portfolio;
        assert_eq!(reconcile_scope(&products, &scope), products);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_products() -> impl Strategy<Value = Vec<Product>> {
            prop::collection::vec(any::<bool>(), 1..40).prop_map(|flags| {
                flags
                    .into_iter()
                    .enumerate()
                    .map(|(i, active)| product(&format!("p-{i}"), active))
                    .collect()
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: dropping one product from the company view demotes it
            /// and never deletes anything.
            #[test]
            fn removal_from_portfolio_demotes(
                products in arb_products(),
                pick in any::<prop::sample::Index>()
            ) {
                let mut scope = partition(&products).company_portfolio;
                prop_assume!(!scope.is_empty());
                let removed = scope.remove(pick.index(scope.len()));

                let out = reconcile_scope(&products, &scope);
                prop_assert_eq!(out.len(), products.len());

                let after = out.iter().find(|p| p.id == removed.id).unwrap();
                prop_assert!(!after.is_company_active);

                for (before, after) in products.iter().zip(out.iter()) {
                    prop_assert_eq!(&before.id, &after.id);
                    if before.id != removed.id {
                        prop_assert_eq!(before, after);
                    }
                }
            }
        }
    }
}
