//! Domain Layer - Core Entity Trait
//!
//! Every list and item carries a numeric id. Ids are millisecond timestamps,
//! which keeps them compatible with data written by earlier versions.

use chrono::{DateTime, Utc};

pub type ListId = u64;
pub type ItemId = u64;

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// First entity with the given id
pub fn find_by_id<T: Entity>(entities: &[T], id: T::Id) -> Option<&T> {
    entities.iter().find(|entity| entity.id() == id)
}

/// First entity with the given id, mutable
pub fn find_by_id_mut<T: Entity>(entities: &mut [T], id: T::Id) -> Option<&mut T> {
    entities.iter_mut().find(|entity| entity.id() == id)
}

/// Largest id handed out or kept: ids must stay exact as JavaScript numbers.
pub const MAX_ID: u64 = (1 << 53) - 1;

/// Hands out strictly increasing ids derived from the wall clock.
///
/// Two ids requested within the same millisecond (or after the clock moved
/// backwards) get `last + 1` instead of a duplicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn next(&mut self, now: DateTime<Utc>) -> u64 {
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let id = millis.max(self.last + 1).min(MAX_ID);
        self.last = id;
        id
    }

    /// Next id after everything issued or observed so far
    pub fn next_unused(&mut self) -> u64 {
        self.last = (self.last + 1).min(MAX_ID);
        self.last
    }

    /// Whether `id` can be kept as is. Zero means "missing" and anything at
    /// or above [`MAX_ID`] would leave no room for later ids.
    pub fn accepts(id: u64) -> bool {
        id != 0 && id < MAX_ID
    }

    /// Make sure every future id is greater than `id`. Ids that
    /// [`accepts`](Self::accepts) rejects are ignored.
    pub fn observe(&mut self, id: u64) {
        if Self::accepts(id) {
            self.last = self.last.max(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_ids_follow_clock() {
        let mut ids = IdGenerator::default();
        let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        assert_eq!(ids.next(now), 1_700_000_000_000);
    }

    #[test]
    fn test_same_millisecond_does_not_collide() {
        let mut ids = IdGenerator::default();
        let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let a = ids.next(now);
        let b = ids.next(now);
        assert_eq!(b, a + 1);
    }

    #[test]
    fn test_observe_skips_past_loaded_ids() {
        let mut ids = IdGenerator::default();
        ids.observe(5_000);
        let early = Utc.timestamp_millis_opt(10).unwrap();
        assert_eq!(ids.next(early), 5_001);
    }

    #[test]
    fn test_out_of_range_ids_are_not_observed() {
        let mut ids = IdGenerator::default();
        ids.observe(u64::MAX);
        ids.observe(MAX_ID);
        let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        assert_eq!(ids.next(now), 1_700_000_000_000);
        assert!(!IdGenerator::accepts(0));
        assert!(!IdGenerator::accepts(u64::MAX));
        assert!(IdGenerator::accepts(MAX_ID - 1));
    }

    #[test]
    fn test_generator_never_exceeds_max_id() {
        let mut ids = IdGenerator::default();
        ids.observe(MAX_ID - 1);
        let now = Utc.timestamp_millis_opt(0).unwrap();
        assert_eq!(ids.next(now), MAX_ID);
        assert_eq!(ids.next(now), MAX_ID);
        assert_eq!(ids.next_unused(), MAX_ID);
    }

    #[test]
    fn test_next_unused_follows_observed() {
        let mut ids = IdGenerator::default();
        ids.observe(41);
        assert_eq!(ids.next_unused(), 42);
        assert_eq!(ids.next_unused(), 43);
    }
}
