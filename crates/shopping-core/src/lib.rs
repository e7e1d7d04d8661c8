//! Shopping List Core
//!
//! Layered architecture:
//! - domain: lists, items, units and the derived price rule
//! - state: the owned application state and its operations
//! - transfer: JSON export/import and the shareable text report
//! - repository: key-value persistence of the whole list collection
//! - session: state + repository, persisting after every change

pub mod config;
pub mod domain;
pub mod error;
pub mod repository;
pub mod session;
pub mod state;
pub mod transfer;

pub use config::Config;
pub use domain::{Item, ItemEdit, ItemField, ItemId, ListId, ShoppingList, Unit};
pub use error::{Result, ShoppingError};
pub use repository::{KeyValueStore, ListRepository, MemoryStore};
pub use session::Session;
pub use state::{compute_cost_per_person, compute_total_cost, AppState, NameDraft};
pub use transfer::{export_file_name, format_money, export_structured, export_text, import_structured, ImportedList, ListExport};
