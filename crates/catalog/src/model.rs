//! Catalog records: products, their SKUs, and categories.
//!
//! Records are plain data. Edits never mutate a record in place; they go
//! through [`ProductPatch`] / [`SkuPatch`], which produce a new record.

use serde::{Deserialize, Serialize};

use curio_core::{CategoryId, Entity, ProductId, SkuId};

/// A sellable variant of a product.
///
/// Prices and costs are in the smallest currency unit (e.g. cents).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSku {
    pub id: SkuId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sku_code: String,
    #[serde(default)]
    pub price: u64,
    #[serde(default)]
    pub cost: u64,
    #[serde(default)]
    pub stock: i64,
}

impl ProductSku {
    /// A blank SKU: empty labels, every numeric field at 0.
    pub fn new(id: SkuId) -> Self {
        Self {
            id,
            name: String::new(),
            sku_code: String::new(),
            price: 0,
            cost: 0,
            stock: 0,
        }
    }
}

impl Entity for ProductSku {
    type Id = SkuId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A product in either the company portfolio or the master reference list.
///
/// `price` and `stock` are derived from `skus` at save time
/// (see [`crate::save::prepare_for_save`]); `category` is the display name
/// resolved from `category_id` at that same moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub is_company_active: bool,
    #[serde(default)]
    pub price: u64,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub skus: Vec<ProductSku>,
}

impl Product {
    /// A blank product in the master list with no SKUs.
    pub fn new(id: ProductId) -> Self {
        Self {
            id,
            name: String::new(),
            brand: String::new(),
            model: String::new(),
            category: String::new(),
            category_id: None,
            description: String::new(),
            image_url: String::new(),
            is_company_active: false,
            price: 0,
            stock: 0,
            skus: Vec::new(),
        }
    }

    pub fn sku(&self, id: &SkuId) -> Option<&ProductSku> {
        self.skus.iter().find(|s| &s.id == id)
    }

    /// Copy of this product with the company flag set to `active`.
    pub fn with_company_active(&self, active: bool) -> Self {
        Self {
            is_company_active: active,
            ..self.clone()
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A product category. `icon_name` is carried for presentation only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryItem {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub icon_name: String,
}

impl CategoryItem {
    pub fn new(
        id: impl Into<CategoryId>,
        name: impl Into<String>,
        icon_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon_name: icon_name.into(),
        }
    }
}

impl Entity for CategoryItem {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Partial update of a product's editable fields.
///
/// Identity is not patchable, and neither are the derived fields
/// (`price`, `stock`, `category`); those are recomputed on save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub category_id: Option<CategoryId>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_company_active: Option<bool>,
    pub skus: Option<Vec<ProductSku>>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge the present fields onto `product`, returning a new record.
    pub fn apply_to(&self, product: &Product) -> Product {
        let mut next = product.clone();
        if let Some(name) = &self.name {
            next.name = name.clone();
        }
        if let Some(brand) = &self.brand {
            next.brand = brand.clone();
        }
        if let Some(model) = &self.model {
            next.model = model.clone();
        }
        if let Some(category_id) = &self.category_id {
            next.category_id = Some(category_id.clone());
        }
        if let Some(description) = &self.description {
            next.description = description.clone();
        }
        if let Some(image_url) = &self.image_url {
            next.image_url = image_url.clone();
        }
        if let Some(active) = self.is_company_active {
            next.is_company_active = active;
        }
        if let Some(skus) = &self.skus {
            next.skus = skus.clone();
        }
        next
    }
}

/// Partial update of a SKU's fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkuPatch {
    pub name: Option<String>,
    pub sku_code: Option<String>,
    pub price: Option<u64>,
    pub cost: Option<u64>,
    pub stock: Option<i64>,
}

impl SkuPatch {
    pub fn apply_to(&self, sku: &ProductSku) -> ProductSku {
        ProductSku {
            id: sku.id.clone(),
            name: self.name.clone().unwrap_or_else(|| sku.name.clone()),
            sku_code: self.sku_code.clone().unwrap_or_else(|| sku.sku_code.clone()),
            price: self.price.unwrap_or(sku.price),
            cost: self.cost.unwrap_or(sku.cost),
            stock: self.stock.unwrap_or(sku.stock),
        }
    }
}
