//! Session
//!
//! Couples the application state with its repository: every operation that
//! changes the list collection is followed by a full save.

use log::{error, info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::repository::{KeyValueStore, ListRepository};
use crate::state::AppState;

pub struct Session<S> {
    state: AppState,
    repo: ListRepository<S>,
    saved_revision: u64,
}

impl<S: KeyValueStore> Session<S> {
    /// Restore the saved lists. Unreadable data is copied aside under
    /// [`ListRepository::backup_key`] and the editor opens empty.
    pub fn open(store: S, config: &Config) -> Self {
        let repo = ListRepository::new(store, config.storage_key.clone());
        let lists = match repo.load() {
            Ok(lists) => lists,
            Err(e) => {
                warn!("unreadable lists under {:?}: {}", repo.key(), e);
                match repo.quarantine() {
                    Ok(Some(backup)) => warn!("kept the unreadable value under {:?}", backup),
                    Ok(None) => {}
                    Err(e) => error!("could not back up {:?}: {}", repo.key(), e),
                }
                Vec::new()
            }
        };
        info!("opened session with {} lists", lists.len());
        let state = AppState::from_lists(lists);
        Self {
            saved_revision: state.revision(),
            state,
            repo,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run an operation, then save if the list collection changed.
    /// A failed save is logged; the in-memory change is kept.
    pub fn apply<T>(&mut self, op: impl FnOnce(&mut AppState) -> T) -> T {
        let result = op(&mut self.state);
        if let Err(e) = self.sync() {
            error!("failed to save lists: {}", e);
        }
        result
    }

    /// Save the collection if it changed since the last successful save
    pub fn sync(&mut self) -> Result<()> {
        if self.state.revision() == self.saved_revision {
            return Ok(());
        }
        self.repo.save(self.state.lists())?;
        self.saved_revision = self.state.revision();
        Ok(())
    }

    pub fn is_dirty(&self) -> bool {
        self.state.revision() != self.saved_revision
    }
}
