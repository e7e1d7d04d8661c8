//! Shopping List Entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{Entity, ListId};
use super::item::Item;
use super::lenient;

/// A named list of items in insertion order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    #[serde(deserialize_with = "lenient::id")]
    pub id: ListId,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
}

impl ShoppingList {
    pub fn new(id: ListId, name: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            items: Vec::new(),
            created_at,
        }
    }

    /// Sum of the item totals
    pub fn total_cost(&self) -> f64 {
        self.items.iter().fold(0.0, |sum, item| sum + item.total_price)
    }
}

impl Entity for ShoppingList {
    type Id = ListId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
