//! Subcommands and their execution against a loaded catalog.

use std::collections::HashSet;

use anyhow::Context;
use clap::{Subcommand, ValueEnum};
use serde_json::{Value, json};

use curio_catalog::{
    Catalog, ProductId, ProductPatch, ProductQuery, Scope, SkuId, SkuPatch, new_company_product,
    new_product,
};

/// Partition selector for `list`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ListScope {
    #[default]
    All,
    Company,
    Master,
}

impl From<ListScope> for Scope {
    fn from(value: ListScope) -> Self {
        match value {
            ListScope::All => Scope::All,
            ListScope::Company => Scope::Company,
            ListScope::Master => Scope::Master,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print product counts, total stock and stock value.
    Summary,
    /// List products, optionally narrowed by scope and search text.
    List {
        #[arg(long, value_enum, default_value_t = ListScope::All)]
        scope: ListScope,
        text: Option<String>,
    },
    /// Move master-list products into the company catalog.
    Import {
        #[arg(required = true)]
        ids: Vec<ProductId>,
    },
    /// Drop products from the company view (they return to the master list).
    Demote {
        #[arg(required = true)]
        ids: Vec<ProductId>,
    },
    Delete { id: ProductId },
    /// Create and save a new product.
    Create {
        name: String,
        /// Create it directly in the company catalog.
        #[arg(long)]
        company: bool,
    },
    /// Add or update one SKU of a product and save it.
    SetSku {
        product: ProductId,
        sku: SkuId,
        price: u64,
        cost: u64,
        #[arg(allow_negative_numbers = true)]
        stock: i64,
    },
}

/// What a command printed and whether the catalog must be written back.
#[derive(Debug)]
pub struct Outcome {
    pub output: Value,
    pub changed: bool,
}

impl Outcome {
    fn read(output: Value) -> Self {
        Self {
            output,
            changed: false,
        }
    }

    fn write(output: Value) -> Self {
        Self {
            output,
            changed: true,
        }
    }
}

pub fn run(catalog: &mut Catalog, command: &Command) -> anyhow::Result<Outcome> {
    match command {
        Command::Summary => Ok(Outcome::read(serde_json::to_value(catalog.summary())?)),
        Command::List { scope, text } => {
            let query = ProductQuery {
                text: text.clone(),
                category_id: None,
                scope: (*scope).into(),
            };
            Ok(Outcome::read(serde_json::to_value(catalog.search(&query))?))
        }
        Command::Import { ids } => {
            let selected: HashSet<ProductId> = ids.iter().cloned().collect();
            let imported = catalog.import_selected(&selected);
            Ok(Outcome::write(json!({ "imported": imported })))
        }
        Command::Demote { ids } => {
            let removed: HashSet<&ProductId> = ids.iter().collect();
            let scope: Vec<_> = catalog
                .partition()
                .company_portfolio
                .into_iter()
                .filter(|p| !removed.contains(&p.id))
                .collect();
            let report = catalog.reconcile_scope(&scope)?;
            Ok(Outcome::write(json!({ "demoted": report.demoted })))
        }
        Command::Delete { id } => {
            let deleted = catalog.delete_product(id);
            Ok(Outcome {
                output: json!({ "deleted": deleted }),
                changed: deleted,
            })
        }
        Command::Create { name, company } => {
            let id = ProductId::generate();
            let draft = if *company {
                new_company_product(id.clone())
            } else {
                new_product(id.clone())
            };
            let draft = ProductPatch {
                name: Some(name.clone()),
                ..ProductPatch::default()
            }
            .apply_to(&draft);

            catalog.create_product(draft)?;
            let session = catalog
                .edit(&id)
                .context("created product missing from catalog")?;
            let saved = catalog.save_edit(&session)?;
            Ok(Outcome::write(serde_json::to_value(saved)?))
        }
        Command::SetSku {
            product,
            sku,
            price,
            cost,
            stock,
        } => {
            let mut session = catalog
                .edit(product)
                .with_context(|| format!("no product with id {product}"))?;
            if session.draft().sku(sku).is_none() {
                session.add_sku(sku.clone())?;
            }
            session.update_sku(
                sku,
                &SkuPatch {
                    price: Some(*price),
                    cost: Some(*cost),
                    stock: Some(*stock),
                    ..SkuPatch::default()
                },
            )?;
            let saved = catalog.save_edit(&session)?;
            Ok(Outcome::write(serde_json::to_value(saved)?))
        }
    }
}
