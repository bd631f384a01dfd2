//! Repository Module
//!
//! One repository per entity, wrapping the in-memory [`Store`]. The
//! operation surface is uniform where the entities are uniform (find_all,
//! find_by_id, create, update) plus the handful of specialized operations
//! (status transitions, completion toggling, recency queries).
//!
//! Missing ids are values, not errors: lookups return `Option`, deletes
//! return `bool`. Creation stamps the id and any server-set timestamps;
//! updates merge the supplied fields and re-stamp `updated_at` where the
//! entity carries one.

// People
pub mod employee;
pub mod user;

// Records
pub mod attendance;
pub mod document;
pub mod leave;
pub mod payroll;
pub mod performance;

// Dashboard
pub mod activity;
pub mod announcement;
pub mod event;
pub mod task;

// Re-exports
pub use activity::ActivityRepository;
pub use announcement::AnnouncementRepository;
pub use attendance::AttendanceRepository;
pub use document::DocumentRepository;
pub use employee::EmployeeRepository;
pub use event::EventRepository;
pub use leave::LeaveRepository;
pub use payroll::PayrollRepository;
pub use performance::PerformanceRepository;
pub use task::TaskRepository;
pub use user::UserRepository;

use super::Store;

/// Base repository with store reference
#[derive(Clone)]
pub struct BaseRepository {
    store: Store,
}

impl BaseRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }
}
