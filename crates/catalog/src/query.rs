//! Browse filters over the product list.

use serde::{Deserialize, Serialize};

use curio_core::CategoryId;

use crate::model::Product;

/// Which partition a query looks at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    #[default]
    All,
    Company,
    Master,
}

impl Scope {
    pub fn admits(self, product: &Product) -> bool {
        match self {
            Scope::All => true,
            Scope::Company => product.is_company_active,
            Scope::Master => !product.is_company_active,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    /// Case-insensitive substring matched against name, brand, model and SKU codes.
    pub text: Option<String>,
    pub category_id: Option<CategoryId>,
    #[serde(default)]
    pub scope: Scope,
}

impl ProductQuery {
    pub fn matches(&self, product: &Product) -> bool {
        if !self.scope.admits(product) {
            return false;
        }

        if let Some(category_id) = &self.category_id {
            if product.category_id.as_ref() != Some(category_id) {
                return false;
            }
        }

        match self.text.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(text) => {
                let needle = text.to_lowercase();
                let hit = |s: &str| s.to_lowercase().contains(&needle);
                hit(&product.name)
                    || hit(&product.brand)
                    || hit(&product.model)
                    || product.skus.iter().any(|s| hit(&s.sku_code))
            }
        }
    }
}

/// Products matching `query`, in list order.
pub fn filter_products(products: &[Product], query: &ProductQuery) -> Vec<Product> {
    products.iter().filter(|p| query.matches(p)).cloned().collect()
}
