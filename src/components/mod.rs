//! UI Components
//!
//! Reusable Leptos components.

mod app_header;
mod delete_list_button;
mod empty_state;
mod item_row;
mod item_table;
mod list_sidebar;
mod list_summary;
mod new_list_modal;
mod notice;

pub use app_header::AppHeader;
pub use delete_list_button::DeleteListButton;
pub use empty_state::EmptyState;
pub use item_row::ItemRow;
pub use item_table::ItemTable;
pub use list_sidebar::ListSidebar;
pub use list_summary::ListSummary;
pub use new_list_modal::NewListModal;
pub use notice::Notice;
