//! Application State
//!
//! The owned state of the list editor: all lists, the active selection,
//! the rename draft and the people count. Every operation is a method on
//! [`AppState`]; nothing is global, so the whole editor can be driven from
//! unit tests.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};

use crate::config::IMPORT_SUFFIX;
use crate::domain::{
    find_by_id, find_by_id_mut, parse_people_count, IdGenerator, Item, ItemEdit, ItemId, ListId,
    ShoppingList,
};
use crate::error::Result;
use crate::transfer::import_structured;

/// In-progress rename of a list. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameDraft {
    pub list_id: ListId,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct AppState {
    lists: Vec<ShoppingList>,
    active_list_id: Option<ListId>,
    editing: Option<NameDraft>,
    people_count: u32,
    ids: IdGenerator,
    /// Bumped whenever the persisted list collection changes
    revision: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            lists: Vec::new(),
            active_list_id: None,
            editing: None,
            people_count: 1,
            ids: IdGenerator::default(),
            revision: 0,
        }
    }

    /// State restored from storage; the first list becomes active.
    ///
    /// Missing, out-of-range and repeated ids are replaced so every list and
    /// every item within a list stays addressable.
    pub fn from_lists(mut lists: Vec<ShoppingList>) -> Self {
        let mut ids = IdGenerator::default();
        for list in &lists {
            ids.observe(list.id);
            for item in &list.items {
                ids.observe(item.id);
            }
        }

        let mut list_ids = HashSet::new();
        for list in &mut lists {
            if !IdGenerator::accepts(list.id) || !list_ids.insert(list.id) {
                list.id = ids.next_unused();
                list_ids.insert(list.id);
                warn!("list {:?} had an unusable id, reassigned {}", list.name, list.id);
            }
            let mut item_ids = HashSet::new();
            for item in &mut list.items {
                if !IdGenerator::accepts(item.id) || !item_ids.insert(item.id) {
                    item.id = ids.next_unused();
                    item_ids.insert(item.id);
                }
            }
        }
        Self {
            active_list_id: lists.first().map(|list| list.id),
            lists,
            ids,
            ..Self::new()
        }
    }

    // ========================
    // Accessors
    // ========================

    pub fn lists(&self) -> &[ShoppingList] {
        &self.lists
    }

    pub fn find_list(&self, id: ListId) -> Option<&ShoppingList> {
        find_by_id(&self.lists, id)
    }

    pub fn active_list_id(&self) -> Option<ListId> {
        self.active_list_id
    }

    pub fn active_list(&self) -> Option<&ShoppingList> {
        self.active_list_id.and_then(|id| self.find_list(id))
    }

    pub fn editing(&self) -> Option<&NameDraft> {
        self.editing.as_ref()
    }

    pub fn people_count(&self) -> u32 {
        self.people_count
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Total of the active list
    pub fn total_cost(&self) -> f64 {
        compute_total_cost(self.active_list())
    }

    /// Share of the active list's total per person
    pub fn cost_per_person(&self) -> f64 {
        compute_cost_per_person(self.active_list(), self.people_count)
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    fn active_list_mut(&mut self) -> Option<&mut ShoppingList> {
        let id = self.active_list_id?;
        find_by_id_mut(&mut self.lists, id)
    }

    // ========================
    // List Operations
    // ========================

    /// Append a new empty list and make it active.
    /// Blank names are ignored.
    pub fn create_list(&mut self, name: &str, now: DateTime<Utc>) -> Option<ListId> {
        if name.trim().is_empty() {
            return None;
        }
        let id = self.ids.next(now);
        self.lists.push(ShoppingList::new(id, name.to_string(), now));
        self.active_list_id = Some(id);
        self.touch();
        debug!("created list {} ({:?})", id, name);
        Some(id)
    }

    /// Remove a list and all its items. If it was active, the first
    /// remaining list (if any) becomes active.
    pub fn delete_list(&mut self, id: ListId) -> bool {
        let before = self.lists.len();
        self.lists.retain(|list| list.id != id);
        if self.lists.len() == before {
            return false;
        }
        if self.active_list_id == Some(id) {
            self.active_list_id = self.lists.first().map(|list| list.id);
        }
        if self.editing.as_ref().is_some_and(|draft| draft.list_id == id) {
            self.editing = None;
        }
        self.touch();
        debug!("deleted list {}", id);
        true
    }

    pub fn rename_list(&mut self, id: ListId, new_name: &str) -> bool {
        let name = new_name.trim();
        if name.is_empty() {
            return false;
        }
        let Some(list) = find_by_id_mut(&mut self.lists, id) else {
            return false;
        };
        if list.name == name {
            return false;
        }
        list.name = name.to_string();
        self.touch();
        true
    }

    pub fn select_list(&mut self, id: ListId) -> bool {
        if self.find_list(id).is_none() {
            return false;
        }
        self.active_list_id = Some(id);
        true
    }

    // ========================
    // Rename Toggle
    // ========================

    /// Start editing a list name, seeded with the current name
    pub fn begin_rename(&mut self, id: ListId) -> bool {
        let Some(list) = self.find_list(id) else {
            return false;
        };
        self.editing = Some(NameDraft {
            list_id: id,
            text: list.name.clone(),
        });
        true
    }

    pub fn set_rename_draft(&mut self, text: &str) {
        if let Some(draft) = self.editing.as_mut() {
            draft.text = text.to_string();
        }
    }

    /// Apply the draft and leave editing mode. A blank draft is dropped.
    pub fn commit_rename(&mut self) -> bool {
        match self.editing.take() {
            Some(draft) => self.rename_list(draft.list_id, &draft.text),
            None => false,
        }
    }

    pub fn cancel_rename(&mut self) {
        self.editing = None;
    }

    // ========================
    // Item Operations
    // ========================

    /// Append a blank item to the active list
    pub fn add_item(&mut self, now: DateTime<Utc>) -> Option<ItemId> {
        self.active_list_id?;
        let id = self.ids.next(now);
        self.active_list_mut()?.items.push(Item::new(id));
        self.touch();
        Some(id)
    }

    /// Edit one field of an item in the active list
    pub fn update_item(&mut self, item_id: ItemId, edit: ItemEdit) -> bool {
        let Some(list) = self.active_list_mut() else {
            return false;
        };
        let Some(item) = find_by_id_mut(&mut list.items, item_id) else {
            return false;
        };
        item.apply(edit);
        self.touch();
        true
    }

    pub fn delete_item(&mut self, item_id: ItemId) -> bool {
        let Some(list) = self.active_list_mut() else {
            return false;
        };
        let before = list.items.len();
        list.items.retain(|item| item.id != item_id);
        if list.items.len() == before {
            return false;
        }
        self.touch();
        true
    }

    // ========================
    // People
    // ========================

    /// Set the people count from raw input; anything below 1 becomes 1
    pub fn set_people_count(&mut self, raw: &str) {
        self.people_count = parse_people_count(raw);
    }

    // ========================
    // Import
    // ========================

    /// Add a list from a structured export and make it active.
    ///
    /// Nothing changes when the bytes are not a structured export.
    pub fn import_list(&mut self, bytes: &[u8], now: DateTime<Utc>) -> Result<ListId> {
        let imported = import_structured(bytes)?;
        let id = self.ids.next(now);

        let mut seen = HashSet::new();
        let mut items = imported.items;
        for item in &mut items {
            if !IdGenerator::accepts(item.id) || !seen.insert(item.id) {
                item.id = self.ids.next(now);
                seen.insert(item.id);
            } else {
                self.ids.observe(item.id);
            }
        }

        let mut list = ShoppingList::new(id, format!("{}{}", imported.name, IMPORT_SUFFIX), now);
        list.items = items;
        info!("imported list {:?} with {} items", list.name, list.items.len());
        self.lists.push(list);
        self.active_list_id = Some(id);
        self.touch();
        Ok(id)
    }
}

/// Sum of all item totals; 0 without a list
pub fn compute_total_cost(list: Option<&ShoppingList>) -> f64 {
    list.map(ShoppingList::total_cost).unwrap_or(0.0)
}

/// Total split across `people_count`; 0 when nobody is counted
pub fn compute_cost_per_person(list: Option<&ShoppingList>, people_count: u32) -> f64 {
    if people_count == 0 {
        return 0.0;
    }
    compute_total_cost(list) / f64::from(people_count)
}
