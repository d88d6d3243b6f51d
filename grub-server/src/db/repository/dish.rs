//! Dish Repository

use crate::db::Table;
use shared::models::{Dish, DishFields};
use shared::next_id;

/// Dish store. Dishes are never deleted.
#[derive(Debug, Clone, Default)]
pub struct DishRepository {
    table: Table<Dish>,
}

impl DishRepository {
    /// All dishes in insertion order
    pub fn find_all(&self) -> Vec<Dish> {
        self.table.all()
    }

    pub fn find_by_id(&self, id: &str) -> Option<Dish> {
        self.table.find(id)
    }

    pub fn count(&self) -> usize {
        self.table.count()
    }

    /// Create a dish with a freshly generated id
    pub fn create(&self, fields: DishFields) -> Dish {
        self.table.insert(Dish::new(next_id(), fields))
    }

    /// Run `f` against the stored dish under the write lock
    ///
    /// Returns `None` if no dish has this id.
    pub fn update_with<R>(&self, id: &str, f: impl FnOnce(&mut Dish) -> R) -> Option<R> {
        self.table.modify(id, f)
    }

    pub(crate) fn reset(&self, dishes: Vec<Dish>) {
        self.table.replace_all(dishes);
    }
}
