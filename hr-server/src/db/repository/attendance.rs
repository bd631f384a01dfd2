//! Attendance Repository

use chrono::NaiveDate;

use super::BaseRepository;
use crate::db::Store;
use crate::db::models::{Attendance, AttendanceCreate, AttendanceUpdate};

#[derive(Clone)]
pub struct AttendanceRepository {
    base: BaseRepository,
}

impl AttendanceRepository {
    pub fn new(store: Store) -> Self {
        Self {
            base: BaseRepository::new(store),
        }
    }

    /// Find attendance record by id
    pub async fn find_by_id(&self, id: i64) -> Option<Attendance> {
        self.base.store().attendances().get(id)
    }

    /// All attendance records for an employee
    pub async fn find_by_employee_id(&self, employee_id: i64) -> Vec<Attendance> {
        self.base
            .store()
            .attendances()
            .filter(|a| a.employee_id == employee_id)
    }

    /// All records on a calendar date, across employees.
    /// Time-of-day on check-in/out plays no part in the match.
    pub async fn find_by_date(&self, date: NaiveDate) -> Vec<Attendance> {
        self.base.store().attendances().filter(|a| a.date == date)
    }

    /// Create a new attendance record
    pub async fn create(&self, data: AttendanceCreate) -> Attendance {
        self.base.store().attendances().insert_with(|id| Attendance {
            id,
            employee_id: data.employee_id,
            date: data.date,
            check_in: data.check_in,
            check_out: data.check_out,
            status: data.status,
            notes: data.notes,
        })
    }

    /// Merge the supplied fields onto an existing record (no timestamps
    /// on this entity, plain merge)
    pub async fn update(&self, id: i64, data: AttendanceUpdate) -> Option<Attendance> {
        self.base.store().attendances().update_with(id, |attendance| {
            if let Some(v) = data.employee_id {
                attendance.employee_id = v;
            }
            if let Some(v) = data.date {
                attendance.date = v;
            }
            if let Some(v) = data.check_in {
                attendance.check_in = Some(v);
            }
            if let Some(v) = data.check_out {
                attendance.check_out = Some(v);
            }
            if let Some(v) = data.status {
                attendance.status = v;
            }
            if let Some(v) = data.notes {
                attendance.notes = Some(v);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn payload(employee_id: i64, date: NaiveDate) -> AttendanceCreate {
        AttendanceCreate {
            employee_id,
            date,
            check_in: None,
            check_out: None,
            status: "present".to_string(),
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_find_by_date_matches_calendar_date_across_employees() {
        let repo = AttendanceRepository::new(Store::new());
        let may_2 = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        let may_3 = NaiveDate::from_ymd_opt(2024, 5, 3).unwrap();

        repo.create(payload(1, may_2)).await;
        repo.create(payload(2, may_2)).await;
        repo.create(payload(1, may_3)).await;

        let records = repo.find_by_date(may_2).await;
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|a| a.date == may_2));
    }

    #[tokio::test]
    async fn test_update_adds_check_out_without_clobbering() {
        let repo = AttendanceRepository::new(Store::new());
        let date = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        let check_in = Utc.with_ymd_and_hms(2024, 5, 2, 9, 0, 0).unwrap();
        let check_out = Utc.with_ymd_and_hms(2024, 5, 2, 17, 30, 0).unwrap();

        let created = repo
            .create(AttendanceCreate {
                check_in: Some(check_in),
                ..payload(1, date)
            })
            .await;

        let updated = repo
            .update(
                created.id,
                AttendanceUpdate {
                    employee_id: None,
                    date: None,
                    check_in: None,
                    check_out: Some(check_out),
                    status: None,
                    notes: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.check_in, Some(check_in));
        assert_eq!(updated.check_out, Some(check_out));
        assert_eq!(updated.status, "present");
    }
}
