//! Order Repository

use crate::db::Table;
use shared::models::{Order, OrderFields};
use shared::next_id;

/// Order store
#[derive(Debug, Clone, Default)]
pub struct OrderRepository {
    table: Table<Order>,
}

impl OrderRepository {
    /// All orders in insertion order
    pub fn find_all(&self) -> Vec<Order> {
        self.table.all()
    }

    pub fn find_by_id(&self, id: &str) -> Option<Order> {
        self.table.find(id)
    }

    pub fn count(&self) -> usize {
        self.table.count()
    }

    /// Create an order with a freshly generated id (status defaults to pending)
    pub fn create(&self, fields: OrderFields) -> Order {
        self.table.insert(Order::new(next_id(), fields))
    }

    /// Run `f` against the stored order under the write lock
    ///
    /// Returns `None` if no order has this id.
    pub fn update_with<R>(&self, id: &str, f: impl FnOnce(&mut Order) -> R) -> Option<R> {
        self.table.modify(id, f)
    }

    /// Delete the first order with `id` once `guard` accepts it
    ///
    /// Returns `None` if no order has this id. A rejected order is left
    /// untouched.
    pub fn delete_if<E>(
        &self,
        id: &str,
        guard: impl FnOnce(&Order) -> Result<(), E>,
    ) -> Option<Result<Order, E>> {
        self.table.remove_if(id, guard)
    }

    pub(crate) fn reset(&self, orders: Vec<Order>) {
        self.table.replace_all(orders);
    }
}
