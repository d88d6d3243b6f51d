//! Database Module
//!
//! In-process storage: every resource lives in an ordered `Vec` behind a
//! lock. Nothing is persisted; contents are lost when the process exits.

pub mod repository;
pub mod seed;

use parking_lot::RwLock;
use std::sync::Arc;

/// A stored record addressable by its string id
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
}

impl Record for shared::models::Dish {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for shared::models::Order {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Ordered in-memory table
///
/// Clones share the same rows. Lookups are linear scans by id, insertion
/// order is preserved. Closure-taking methods run under a single write lock,
/// so a check-then-mutate sequence cannot interleave with another request.
#[derive(Debug)]
pub struct Table<T> {
    rows: Arc<RwLock<Vec<T>>>,
}

impl<T> Clone for Table<T> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
        }
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<T: Record> Table<T> {
    /// Snapshot of all rows in insertion order
    pub fn all(&self) -> Vec<T> {
        self.rows.read().clone()
    }

    pub fn count(&self) -> usize {
        self.rows.read().len()
    }

    pub fn find(&self, id: &str) -> Option<T> {
        self.rows.read().iter().find(|row| row.id() == id).cloned()
    }

    /// Append a row and return a copy of it
    pub fn insert(&self, row: T) -> T {
        self.rows.write().push(row.clone());
        row
    }

    /// Run `f` on the first row with `id`, in place
    ///
    /// Returns `None` when no row matches.
    pub fn modify<R>(&self, id: &str, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let mut rows = self.rows.write();
        rows.iter_mut().find(|row| row.id() == id).map(f)
    }

    /// Remove the first row with `id` if `guard` accepts it
    ///
    /// Returns `None` when no row matches; the row stays in place when the
    /// guard fails.
    pub fn remove_if<E>(
        &self,
        id: &str,
        guard: impl FnOnce(&T) -> Result<(), E>,
    ) -> Option<Result<T, E>> {
        let mut rows = self.rows.write();
        let index = rows.iter().position(|row| row.id() == id)?;
        Some(guard(&rows[index]).map(|()| rows.remove(index)))
    }

    /// Replace the whole content (used for seeding)
    pub fn replace_all(&self, rows: Vec<T>) {
        *self.rows.write() = rows;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        value: i32,
    }

    impl Record for Row {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn row(id: &str, value: i32) -> Row {
        Row {
            id: id.to_string(),
            value,
        }
    }

    fn table(rows: Vec<Row>) -> Table<Row> {
        let table = Table::default();
        table.replace_all(rows);
        table
    }

    #[test]
    fn test_insert_preserves_order() {
        let table = Table::default();
        table.insert(row("b", 1));
        table.insert(row("a", 2));
        let ids: Vec<String> = table.all().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_clones_share_rows() {
        let table = Table::default();
        let other = table.clone();
        table.insert(row("a", 1));
        assert_eq!(other.count(), 1);
        assert_eq!(other.find("a"), Some(row("a", 1)));
    }

    #[test]
    fn test_modify_in_place() {
        let table = table(vec![row("a", 1), row("b", 2)]);
        let result = table.modify("b", |r| {
            r.value = 20;
            r.value
        });
        assert_eq!(result, Some(20));
        assert_eq!(table.find("b"), Some(row("b", 20)));
        assert_eq!(table.count(), 2);
    }

    #[test]
    fn test_modify_missing() {
        let table: Table<Row> = Table::default();
        assert_eq!(table.modify("x", |r| r.value), None);
    }

    #[test]
    fn test_remove_if_guard() {
        let table = table(vec![row("a", 1), row("b", 2)]);

        let rejected = table.remove_if("a", |r| if r.value > 1 { Ok(()) } else { Err("small") });
        assert_eq!(rejected, Some(Err("small")));
        assert_eq!(table.count(), 2);

        let removed = table.remove_if("b", |_| Ok::<(), ()>(()));
        assert_eq!(removed, Some(Ok(row("b", 2))));
        assert_eq!(table.all(), vec![row("a", 1)]);

        assert_eq!(table.remove_if("zzz", |_| Ok::<(), ()>(())), None);
    }
}
