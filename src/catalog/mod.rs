//! Purchasable-command catalog, as persisted in the shop config file.
//!
//! The catalog is loaded once at startup and never mutated by a purchase;
//! edits happen in the backing file and become visible on reload.

pub mod resolver;

pub use resolver::{Resolution, resolve};

use serde::{Deserialize, Serialize};

/// One purchasable entry: a display name, a price, the capability required
/// to buy it, and the action templates executed after a successful debit.
///
/// Names are not required to be unique; duplicates surface as an ambiguous
/// match at resolve time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandItem {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Price")]
    pub price: i64,

    #[serde(rename = "PurchasePermission", default = "default_purchase_permission")]
    pub purchase_permission: String,

    #[serde(rename = "CommandsToExecute", default)]
    pub commands_to_execute: Vec<String>,
}

fn default_purchase_permission() -> String {
    "commandshop.buy".to_string()
}

/// On-disk catalog shape: `{ "Items": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    #[serde(rename = "Items", default)]
    pub items: Vec<CommandItem>,
}

impl ShopConfig {
    /// Catalog invariants checked at load time: non-blank names,
    /// non-negative prices.
    pub fn validate(&self) -> Result<(), String> {
        for item in &self.items {
            if item.name.trim().is_empty() {
                return Err("Item names cannot be blank".to_string());
            }
            if item.price < 0 {
                return Err(format!("Item '{}' has a negative price", item.name));
            }
        }
        Ok(())
    }
}

impl Default for ShopConfig {
    /// A fresh config ships with one illustrative item so operators have a
    /// working entry to edit.
    fn default() -> Self {
        Self {
            items: vec![CommandItem {
                name: "Sample".to_string(),
                price: 200,
                purchase_permission: "commandshop.buy.something".to_string(),
                commands_to_execute: vec![
                    ".bc ${player} bought ${item}!".to_string(),
                    ".heal".to_string(),
                ],
            }],
        }
    }
}
