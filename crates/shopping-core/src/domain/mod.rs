//! Domain Layer
//!
//! Lists, items and the rules that keep item prices consistent.
//! No storage or platform dependencies live here.

mod entity;
mod item;
mod list;
pub(crate) mod lenient;

pub use entity::{find_by_id, find_by_id_mut, Entity, IdGenerator, ItemId, ListId, MAX_ID};
pub use item::{Item, ItemEdit, ItemField, Unit};
pub use lenient::{parse_amount, parse_people_count};
pub use list::ShoppingList;
