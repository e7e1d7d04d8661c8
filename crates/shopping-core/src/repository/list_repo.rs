//! List Repository
//!
//! Loads and saves the full list collection. There is no versioning:
//! the stored value is the plain JSON array of lists.

use log::debug;

use super::traits::KeyValueStore;
use crate::domain::ShoppingList;
use crate::error::Result;

pub struct ListRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ListRepository<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// All stored lists; empty when nothing was saved yet
    pub fn load(&self) -> Result<Vec<ShoppingList>> {
        match self.store.get(&self.key)? {
            Some(raw) => {
                let lists: Vec<ShoppingList> = serde_json::from_str(&raw)?;
                debug!("loaded {} lists from {:?}", lists.len(), self.key);
                Ok(lists)
            }
            None => Ok(Vec::new()),
        }
    }

    /// Overwrite the stored collection
    pub fn save(&self, lists: &[ShoppingList]) -> Result<()> {
        let raw = serde_json::to_string(lists)?;
        self.store.set(&self.key, &raw)?;
        debug!("saved {} lists to {:?}", lists.len(), self.key);
        Ok(())
    }

    /// Key that receives a copy of an unreadable collection
    pub fn backup_key(&self) -> String {
        format!("{}.corrupt", self.key)
    }

    /// Copy the raw stored value to [`backup_key`](Self::backup_key) so the
    /// next save cannot destroy it. Returns the backup key, or `None` when
    /// nothing is stored.
    pub fn quarantine(&self) -> Result<Option<String>> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        let backup = self.backup_key();
        self.store.set(&backup, &raw)?;
        Ok(Some(backup))
    }

    /// Drop the stored collection
    pub fn clear(&self) -> Result<()> {
        self.store.remove(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Item;
    use crate::error::ShoppingError;
    use crate::repository::MemoryStore;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_load_missing_key_is_empty() {
        let repo = ListRepository::new(MemoryStore::new(), "lists");
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let repo = ListRepository::new(MemoryStore::new(), "lists");
        let mut list = ShoppingList::new(1, "A".to_string(), Utc.timestamp_millis_opt(0).unwrap());
        list.items.push(Item::new(2));

        repo.save(&[list.clone()]).unwrap();
        assert_eq!(repo.load().unwrap(), vec![list]);
    }

    #[test]
    fn test_stored_value_is_json_array() {
        let store = MemoryStore::new();
        let repo = ListRepository::new(&store, "lists");
        repo.save(&[]).unwrap();
        assert_eq!(store.get("lists").unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn test_corrupt_value_is_json_error() {
        let store = MemoryStore::new();
        store.set("lists", "{oops").unwrap();
        let repo = ListRepository::new(&store, "lists");
        assert!(matches!(repo.load(), Err(ShoppingError::Json(_))));
    }

    #[test]
    fn test_quarantine_copies_raw_value() {
        let store = MemoryStore::new();
        store.set("lists", "{oops").unwrap();
        let repo = ListRepository::new(&store, "lists");

        assert_eq!(repo.quarantine().unwrap(), Some("lists.corrupt".to_string()));
        assert_eq!(store.get("lists.corrupt").unwrap(), Some("{oops".to_string()));
        assert_eq!(store.get("lists").unwrap(), Some("{oops".to_string()));
    }

    #[test]
    fn test_quarantine_without_value() {
        let store = MemoryStore::new();
        let repo = ListRepository::new(&store, "lists");
        assert_eq!(repo.quarantine().unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_clear() {
        let store = MemoryStore::new();
        let repo = ListRepository::new(&store, "lists");
        repo.save(&[]).unwrap();
        repo.clear().unwrap();
        assert!(store.is_empty());
    }
}
