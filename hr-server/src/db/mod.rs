//! Database Module
//!
//! In-memory store: the entire application state lives here for the
//! lifetime of the process. One [`Table`] per entity, each a locked
//! id-ordered map with its own monotonically increasing id sequence.
//! A restart discards all data — there is no persistence layer.

pub mod models;
pub mod repository;

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

use models::{
    Activity, Announcement, Attendance, Document, Employee, Event, Leave, Payroll, Performance,
    Task, User, UserCreate,
};

/// Generic in-memory table.
///
/// Ids start at 1 and are never reused in-process. Iteration order is id
/// order, which (ids being assigned monotonically) equals insertion order.
/// Mutations run their closure under the write lock, so id assignment and
/// read-modify-write merges are atomic per table.
pub struct Table<T> {
    inner: RwLock<TableInner<T>>,
}

struct TableInner<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T: Clone> Table<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(TableInner {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Assign the next id, build the row with it, and store it
    pub fn insert_with(&self, build: impl FnOnce(i64) -> T) -> T {
        let mut inner = self.inner.write();
        let id = inner.next_id;
        inner.next_id += 1;
        let row = build(id);
        inner.rows.insert(id, row.clone());
        row
    }

    pub fn get(&self, id: i64) -> Option<T> {
        self.inner.read().rows.get(&id).cloned()
    }

    /// Apply a mutation to the row if it exists, returning the new value
    pub fn update_with(&self, id: i64, apply: impl FnOnce(&mut T)) -> Option<T> {
        let mut inner = self.inner.write();
        let row = inner.rows.get_mut(&id)?;
        apply(row);
        Some(row.clone())
    }

    /// Remove a row, reporting whether it existed
    pub fn remove(&self, id: i64) -> bool {
        self.inner.write().rows.remove(&id).is_some()
    }

    /// All rows in insertion order
    pub fn all(&self) -> Vec<T> {
        self.inner.read().rows.values().cloned().collect()
    }

    /// Rows matching the predicate, in insertion order
    pub fn filter(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.inner
            .read()
            .rows
            .values()
            .filter(|row| pred(row))
            .cloned()
            .collect()
    }

    /// First row matching the predicate
    pub fn find(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        self.inner.read().rows.values().find(|row| pred(row)).cloned()
    }
}

impl<T: Clone> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Storage service — owns every entity table
///
/// Constructed once at process start and injected into the server state;
/// clones share the same underlying tables.
#[derive(Clone)]
pub struct Store {
    inner: Arc<Tables>,
}

#[derive(Default)]
struct Tables {
    users: Table<User>,
    employees: Table<Employee>,
    documents: Table<Document>,
    attendances: Table<Attendance>,
    leaves: Table<Leave>,
    payrolls: Table<Payroll>,
    performances: Table<Performance>,
    activities: Table<Activity>,
    tasks: Table<Task>,
    announcements: Table<Announcement>,
    events: Table<Event>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Tables::default()),
        }
    }

    pub(crate) fn users(&self) -> &Table<User> {
        &self.inner.users
    }

    pub(crate) fn employees(&self) -> &Table<Employee> {
        &self.inner.employees
    }

    pub(crate) fn documents(&self) -> &Table<Document> {
        &self.inner.documents
    }

    pub(crate) fn attendances(&self) -> &Table<Attendance> {
        &self.inner.attendances
    }

    pub(crate) fn leaves(&self) -> &Table<Leave> {
        &self.inner.leaves
    }

    pub(crate) fn payrolls(&self) -> &Table<Payroll> {
        &self.inner.payrolls
    }

    pub(crate) fn performances(&self) -> &Table<Performance> {
        &self.inner.performances
    }

    pub(crate) fn activities(&self) -> &Table<Activity> {
        &self.inner.activities
    }

    pub(crate) fn tasks(&self) -> &Table<Task> {
        &self.inner.tasks
    }

    pub(crate) fn announcements(&self) -> &Table<Announcement> {
        &self.inner.announcements
    }

    pub(crate) fn events(&self) -> &Table<Event> {
        &self.inner.events
    }

    /// Seed the store with the bootstrap accounts (admin + HR manager)
    pub async fn seed_sample_data(&self) {
        let users = repository::UserRepository::new(self.clone());

        users
            .create(UserCreate {
                username: "admin".to_string(),
                password: "admin123".to_string(),
                email: "admin@company.com".to_string(),
                first_name: "Admin".to_string(),
                last_name: "User".to_string(),
                role: "admin".to_string(),
            })
            .await;

        users
            .create(UserCreate {
                username: "hrmanager".to_string(),
                password: "hr123".to_string(),
                email: "hr@company.com".to_string(),
                first_name: "HR".to_string(),
                last_name: "Manager".to_string(),
                role: "hr".to_string(),
            })
            .await;

        tracing::info!("Sample users seeded (admin, hrmanager)");
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_monotonic_from_one() {
        let table: Table<i64> = Table::new();
        let a = table.insert_with(|id| id);
        let b = table.insert_with(|id| id);
        let c = table.insert_with(|id| id);
        assert_eq!((a, b, c), (1, 2, 3));
    }

    #[test]
    fn test_removed_ids_are_not_reused() {
        let table: Table<i64> = Table::new();
        table.insert_with(|id| id);
        assert!(table.remove(1));
        let next = table.insert_with(|id| id);
        assert_eq!(next, 2);
    }

    #[test]
    fn test_all_returns_insertion_order() {
        let table: Table<String> = Table::new();
        table.insert_with(|id| format!("row-{id}"));
        table.insert_with(|id| format!("row-{id}"));
        table.insert_with(|id| format!("row-{id}"));
        assert_eq!(table.all(), vec!["row-1", "row-2", "row-3"]);
    }

    #[test]
    fn test_missing_ids_never_error() {
        let table: Table<i64> = Table::new();
        assert_eq!(table.get(99), None);
        assert_eq!(table.update_with(99, |_| {}), None);
        assert!(!table.remove(99));
    }

    #[test]
    fn test_update_with_applies_in_place() {
        let table: Table<i64> = Table::new();
        table.insert_with(|_| 10);
        let updated = table.update_with(1, |v| *v += 5);
        assert_eq!(updated, Some(15));
        assert_eq!(table.get(1), Some(15));
    }
}
