//! Activity Repository

use chrono::Utc;

use super::BaseRepository;
use crate::db::Store;
use crate::db::models::{Activity, ActivityCreate, ActivityStatus};

#[derive(Clone)]
pub struct ActivityRepository {
    base: BaseRepository,
}

impl ActivityRepository {
    pub fn new(store: Store) -> Self {
        Self {
            base: BaseRepository::new(store),
        }
    }

    /// Find activity by id
    pub async fn find_by_id(&self, id: i64) -> Option<Activity> {
        self.base.store().activities().get(id)
    }

    /// All activities for an employee
    pub async fn find_by_employee_id(&self, employee_id: i64) -> Vec<Activity> {
        self.base
            .store()
            .activities()
            .filter(|a| a.employee_id == employee_id)
    }

    /// Most recent activities across all employees, newest first
    pub async fn find_recent(&self, limit: usize) -> Vec<Activity> {
        let mut activities = self.base.store().activities().all();
        activities.sort_by(|a, b| b.date.cmp(&a.date));
        activities.truncate(limit);
        activities
    }

    /// Create a new activity; `date` is stamped here and never changes
    pub async fn create(&self, data: ActivityCreate) -> Activity {
        let date = Utc::now();
        self.base.store().activities().insert_with(|id| Activity {
            id,
            employee_id: data.employee_id,
            activity_type: data.activity_type,
            description: data.description,
            date,
            status: data.status,
        })
    }

    /// Single-field status update. Any declared status value is accepted
    /// regardless of the current one.
    pub async fn update_status(&self, id: i64, status: ActivityStatus) -> Option<Activity> {
        self.base
            .store()
            .activities()
            .update_with(id, |activity| activity.status = status)
    }
}
