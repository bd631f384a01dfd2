//! Employee Repository

use chrono::Utc;

use super::BaseRepository;
use crate::db::Store;
use crate::db::models::{Employee, EmployeeCreate, EmployeeUpdate};

#[derive(Clone)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(store: Store) -> Self {
        Self {
            base: BaseRepository::new(store),
        }
    }

    /// Find all employees in insertion order
    pub async fn find_all(&self) -> Vec<Employee> {
        self.base.store().employees().all()
    }

    /// Find employee by id
    pub async fn find_by_id(&self, id: i64) -> Option<Employee> {
        self.base.store().employees().get(id)
    }

    /// Find the employee record owned by a user (first match)
    pub async fn find_by_user_id(&self, user_id: i64) -> Option<Employee> {
        self.base.store().employees().find(|e| e.user_id == user_id)
    }

    /// Create a new employee
    pub async fn create(&self, data: EmployeeCreate) -> Employee {
        let now = Utc::now();
        self.base.store().employees().insert_with(|id| Employee {
            id,
            user_id: data.user_id,
            employee_id: data.employee_id,
            date_of_birth: data.date_of_birth,
            hire_date: data.hire_date,
            department: data.department,
            position: data.position,
            employment_type: data.employment_type,
            manager: data.manager,
            phone: data.phone,
            address: data.address,
            emergency_contact: data.emergency_contact,
            salary: data.salary,
            created_at: now,
            updated_at: now,
        })
    }

    /// Merge the supplied fields onto an existing employee
    pub async fn update(&self, id: i64, data: EmployeeUpdate) -> Option<Employee> {
        self.base.store().employees().update_with(id, |employee| {
            if let Some(v) = data.user_id {
                employee.user_id = v;
            }
            if let Some(v) = data.employee_id {
                employee.employee_id = v;
            }
            if let Some(v) = data.date_of_birth {
                employee.date_of_birth = Some(v);
            }
            if let Some(v) = data.hire_date {
                employee.hire_date = v;
            }
            if let Some(v) = data.department {
                employee.department = v;
            }
            if let Some(v) = data.position {
                employee.position = v;
            }
            if let Some(v) = data.employment_type {
                employee.employment_type = v;
            }
            if let Some(v) = data.manager {
                employee.manager = Some(v);
            }
            if let Some(v) = data.phone {
                employee.phone = Some(v);
            }
            if let Some(v) = data.address {
                employee.address = Some(v);
            }
            if let Some(v) = data.emergency_contact {
                employee.emergency_contact = Some(v);
            }
            if let Some(v) = data.salary {
                employee.salary = Some(v);
            }
            employee.updated_at = Utc::now();
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{Department, EmploymentType};
    use chrono::NaiveDate;

    fn payload(user_id: i64, code: &str) -> EmployeeCreate {
        EmployeeCreate {
            user_id,
            employee_id: code.to_string(),
            date_of_birth: None,
            hire_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            department: Department::Hr,
            position: "Recruiter".to_string(),
            employment_type: EmploymentType::FullTime,
            manager: None,
            phone: None,
            address: None,
            emergency_contact: None,
            salary: None,
        }
    }

    #[tokio::test]
    async fn test_find_by_user_id_returns_first_match() {
        let repo = EmployeeRepository::new(Store::new());
        repo.create(payload(7, "EMP-1")).await;
        repo.create(payload(8, "EMP-2")).await;

        assert_eq!(repo.find_by_user_id(8).await.unwrap().employee_id, "EMP-2");
        assert!(repo.find_by_user_id(99).await.is_none());
    }

    #[tokio::test]
    async fn test_partial_update_keeps_other_fields() {
        let repo = EmployeeRepository::new(Store::new());
        let created = repo.create(payload(7, "EMP-1")).await;

        let updated = repo
            .update(
                created.id,
                EmployeeUpdate {
                    user_id: None,
                    employee_id: None,
                    date_of_birth: None,
                    hire_date: None,
                    department: Some(Department::Finance),
                    position: None,
                    employment_type: None,
                    manager: Some(3),
                    phone: None,
                    address: None,
                    emergency_contact: None,
                    salary: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.department, Department::Finance);
        assert_eq!(updated.manager, Some(3));
        assert_eq!(updated.position, "Recruiter");
        assert_eq!(updated.employee_id, "EMP-1");
    }
}
