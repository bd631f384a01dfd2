//! Performance Repository

use chrono::Utc;

use super::BaseRepository;
use crate::db::Store;
use crate::db::models::{Performance, PerformanceCreate, PerformanceUpdate};

#[derive(Clone)]
pub struct PerformanceRepository {
    base: BaseRepository,
}

impl PerformanceRepository {
    pub fn new(store: Store) -> Self {
        Self {
            base: BaseRepository::new(store),
        }
    }

    /// Find review by id
    pub async fn find_by_id(&self, id: i64) -> Option<Performance> {
        self.base.store().performances().get(id)
    }

    /// All reviews for an employee
    pub async fn find_by_employee_id(&self, employee_id: i64) -> Vec<Performance> {
        self.base
            .store()
            .performances()
            .filter(|p| p.employee_id == employee_id)
    }

    /// Create a new review
    pub async fn create(&self, data: PerformanceCreate) -> Performance {
        let now = Utc::now();
        self.base.store().performances().insert_with(|id| Performance {
            id,
            employee_id: data.employee_id,
            reviewer_id: data.reviewer_id,
            period: data.period,
            rating: data.rating,
            comments: data.comments,
            goals: data.goals,
            review_date: data.review_date,
            created_at: now,
            updated_at: now,
        })
    }

    /// Merge the supplied fields onto an existing review
    pub async fn update(&self, id: i64, data: PerformanceUpdate) -> Option<Performance> {
        self.base.store().performances().update_with(id, |review| {
            if let Some(v) = data.employee_id {
                review.employee_id = v;
            }
            if let Some(v) = data.reviewer_id {
                review.reviewer_id = v;
            }
            if let Some(v) = data.period {
                review.period = v;
            }
            if let Some(v) = data.rating {
                review.rating = Some(v);
            }
            if let Some(v) = data.comments {
                review.comments = Some(v);
            }
            if let Some(v) = data.goals {
                review.goals = Some(v);
            }
            if let Some(v) = data.review_date {
                review.review_date = v;
            }
            review.updated_at = Utc::now();
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_rating_set_later_by_partial_update() {
        let repo = PerformanceRepository::new(Store::new());
        let created = repo
            .create(PerformanceCreate {
                employee_id: 1,
                reviewer_id: 2,
                period: "2024-H1".to_string(),
                rating: None,
                comments: None,
                goals: Some("Ship the new portal".to_string()),
                review_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
            })
            .await;
        assert!(created.rating.is_none());

        let updated = repo
            .update(
                created.id,
                PerformanceUpdate {
                    employee_id: None,
                    reviewer_id: None,
                    period: None,
                    rating: Some(Decimal::new(45, 1)),
                    comments: Some("Strong half".to_string()),
                    goals: None,
                    review_date: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.rating, Some(Decimal::new(45, 1)));
        assert_eq!(updated.goals.as_deref(), Some("Ship the new portal"));
    }
}
