//! Leave Repository

use chrono::Utc;

use super::BaseRepository;
use crate::db::Store;
use crate::db::models::{Leave, LeaveCreate, LeaveStatus};

#[derive(Clone)]
pub struct LeaveRepository {
    base: BaseRepository,
}

impl LeaveRepository {
    pub fn new(store: Store) -> Self {
        Self {
            base: BaseRepository::new(store),
        }
    }

    /// Find leave request by id
    pub async fn find_by_id(&self, id: i64) -> Option<Leave> {
        self.base.store().leaves().get(id)
    }

    /// All leave requests for an employee
    pub async fn find_by_employee_id(&self, employee_id: i64) -> Vec<Leave> {
        self.base
            .store()
            .leaves()
            .filter(|l| l.employee_id == employee_id)
    }

    /// Create a new leave request
    pub async fn create(&self, data: LeaveCreate) -> Leave {
        let now = Utc::now();
        self.base.store().leaves().insert_with(|id| Leave {
            id,
            employee_id: data.employee_id,
            start_date: data.start_date,
            end_date: data.end_date,
            leave_type: data.leave_type,
            reason: data.reason,
            status: data.status,
            approved_by: data.approved_by,
            created_at: now,
            updated_at: now,
        })
    }

    /// Set the status and record the approver.
    ///
    /// `approved_by` always overwrites the stored value — passing `None`
    /// clears a previously recorded approver.
    pub async fn update_status(
        &self,
        id: i64,
        status: LeaveStatus,
        approved_by: Option<i64>,
    ) -> Option<Leave> {
        self.base.store().leaves().update_with(id, |leave| {
            leave.status = status;
            leave.approved_by = approved_by;
            leave.updated_at = Utc::now();
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::LeaveType;
    use chrono::NaiveDate;

    fn payload(employee_id: i64) -> LeaveCreate {
        LeaveCreate {
            employee_id,
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
            leave_type: LeaveType::Annual,
            reason: Some("Summer break".to_string()),
            status: LeaveStatus::default(),
            approved_by: None,
        }
    }

    #[tokio::test]
    async fn test_create_defaults_to_pending() {
        let repo = LeaveRepository::new(Store::new());
        let leave = repo.create(payload(1)).await;
        assert_eq!(leave.status, LeaveStatus::Pending);
        assert!(leave.approved_by.is_none());
    }

    #[tokio::test]
    async fn test_update_status_records_approver() {
        let repo = LeaveRepository::new(Store::new());
        let leave = repo.create(payload(1)).await;

        let approved = repo
            .update_status(leave.id, LeaveStatus::Approved, Some(2))
            .await
            .unwrap();
        assert_eq!(approved.status, LeaveStatus::Approved);
        assert_eq!(approved.approved_by, Some(2));
        assert!(approved.updated_at >= leave.updated_at);
    }

    #[tokio::test]
    async fn test_update_status_without_approver_clears_it() {
        let repo = LeaveRepository::new(Store::new());
        let leave = repo.create(payload(1)).await;
        assert!(
            repo.update_status(leave.id, LeaveStatus::Approved, Some(2))
                .await
                .is_some()
        );

        let reverted = repo
            .update_status(leave.id, LeaveStatus::Rejected, None)
            .await
            .unwrap();
        assert_eq!(reverted.status, LeaveStatus::Rejected);
        assert_eq!(reverted.approved_by, None);
    }

    #[tokio::test]
    async fn test_update_status_missing_id_is_none() {
        let repo = LeaveRepository::new(Store::new());
        assert!(
            repo.update_status(99, LeaveStatus::Approved, None)
                .await
                .is_none()
        );
    }
}
