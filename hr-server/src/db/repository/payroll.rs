//! Payroll Repository

use super::BaseRepository;
use crate::db::Store;
use crate::db::models::{Payroll, PayrollCreate, PayrollUpdate};

#[derive(Clone)]
pub struct PayrollRepository {
    base: BaseRepository,
}

impl PayrollRepository {
    pub fn new(store: Store) -> Self {
        Self {
            base: BaseRepository::new(store),
        }
    }

    /// Find payroll record by id
    pub async fn find_by_id(&self, id: i64) -> Option<Payroll> {
        self.base.store().payrolls().get(id)
    }

    /// All payroll records for an employee, in pay-cycle order
    pub async fn find_by_employee_id(&self, employee_id: i64) -> Vec<Payroll> {
        self.base
            .store()
            .payrolls()
            .filter(|p| p.employee_id == employee_id)
    }

    /// Create a new payroll record
    pub async fn create(&self, data: PayrollCreate) -> Payroll {
        self.base.store().payrolls().insert_with(|id| Payroll {
            id,
            employee_id: data.employee_id,
            period: data.period,
            base_salary: data.base_salary,
            bonus: data.bonus,
            deductions: data.deductions,
            net_salary: data.net_salary,
            payment_date: data.payment_date,
            status: data.status,
            notes: data.notes,
        })
    }

    /// Merge the supplied fields onto an existing record
    pub async fn update(&self, id: i64, data: PayrollUpdate) -> Option<Payroll> {
        self.base.store().payrolls().update_with(id, |payroll| {
            if let Some(v) = data.employee_id {
                payroll.employee_id = v;
            }
            if let Some(v) = data.period {
                payroll.period = v;
            }
            if let Some(v) = data.base_salary {
                payroll.base_salary = v;
            }
            if let Some(v) = data.bonus {
                payroll.bonus = v;
            }
            if let Some(v) = data.deductions {
                payroll.deductions = v;
            }
            if let Some(v) = data.net_salary {
                payroll.net_salary = v;
            }
            if let Some(v) = data.payment_date {
                payroll.payment_date = v;
            }
            if let Some(v) = data.status {
                payroll.status = v;
            }
            if let Some(v) = data.notes {
                payroll.notes = Some(v);
            }
        })
    }
}
