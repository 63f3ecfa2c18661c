pub mod memory;

pub use memory::InMemoryItemRepository;

use crate::core::{Item, ItemId};

/// Owner of the item collection and of id assignment.
///
/// Implementations never fail. Absence is reported in two different ways,
/// and callers rely on the difference:
///
/// - [`get_by_id`](Self::get_by_id) returns `None` for an unknown id.
/// - [`update`](Self::update) and [`delete`](Self::delete) silently do nothing
///   for an unknown id. A caller that needs a not-found outcome for those
///   operations has to check with `get_by_id` first.
pub trait ItemRepository: Send + Sync {
    /// All items in insertion order.
    fn list_all(&self) -> Vec<Item>;

    fn get_by_id(&self, id: ItemId) -> Option<Item>;

    /// Stores `item` under the next id, ignoring whatever id it carries.
    /// Ids start at 1, grow by exactly one per call and are never reused.
    fn insert(&self, item: Item) -> Item;

    /// Replaces the item with the same id wholesale, keeping its position.
    /// No-op when the id is unknown.
    fn update(&self, item: Item);

    /// No-op when the id is unknown.
    fn delete(&self, id: ItemId);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
