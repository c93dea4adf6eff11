//! Category set lookups and the built-in default set.

use curio_core::CategoryId;

use crate::model::CategoryItem;

/// Built-in category set used when a snapshot carries none.
pub fn default_categories() -> Vec<CategoryItem> {
    vec![
        CategoryItem::new("electronics", "Electronics", "cpu"),
        CategoryItem::new("audio", "Audio", "headphones"),
        CategoryItem::new("home", "Home & Living", "home"),
        CategoryItem::new("office", "Office", "briefcase"),
        CategoryItem::new("sports", "Sports & Outdoors", "bike"),
        CategoryItem::new("apparel", "Apparel", "shirt"),
    ]
}

/// Look up a category by id.
pub fn find_category<'a>(
    categories: &'a [CategoryItem],
    id: &CategoryId,
) -> Option<&'a CategoryItem> {
    categories.iter().find(|c| &c.id == id)
}
