use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use super::ItemRepository;
use crate::core::{Item, ItemId};

const FIRST_ID: ItemId = 1;

#[derive(Debug)]
struct Items {
    next_id: ItemId,
    // Ids are monotonic and never reused, so key order is insertion order.
    by_id: BTreeMap<ItemId, Item>,
}

impl Default for Items {
    fn default() -> Self {
        Self {
            next_id: FIRST_ID,
            by_id: BTreeMap::new(),
        }
    }
}

/// Process-local item store guarded by a single lock.
///
/// Id assignment and the append happen under one write guard, so concurrent
/// inserts always get distinct, strictly increasing ids.
#[derive(Debug, Default)]
pub struct InMemoryItemRepository {
    items: RwLock<Items>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the guard cannot leave `Items` half-written:
    // every mutation is a single map call plus a counter bump.
    fn read(&self) -> RwLockReadGuard<'_, Items> {
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Items> {
        self.items.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ItemRepository for InMemoryItemRepository {
    fn list_all(&self) -> Vec<Item> {
        self.read().by_id.values().cloned().collect()
    }

    fn get_by_id(&self, id: ItemId) -> Option<Item> {
        self.read().by_id.get(&id).cloned()
    }

    fn insert(&self, item: Item) -> Item {
        let mut items = self.write();
        let id = items.next_id;
        items.next_id += 1;

        let stored = item.with_id(id);
        items.by_id.insert(id, stored.clone());
        debug!(id, "item inserted");
        stored
    }

    fn update(&self, item: Item) {
        let mut items = self.write();
        if let Some(existing) = items.by_id.get_mut(&item.id) {
            debug!(id = item.id, "item replaced");
            *existing = item;
        }
    }

    fn delete(&self, id: ItemId) {
        if self.write().by_id.remove(&id).is_some() {
            debug!(id, "item deleted");
        }
    }

    fn len(&self) -> usize {
        self.read().by_id.len()
    }
}
