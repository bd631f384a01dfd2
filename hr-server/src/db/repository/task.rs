//! Task Repository

use chrono::Utc;

use super::BaseRepository;
use crate::db::Store;
use crate::db::models::{Task, TaskCreate, TaskUpdate};

#[derive(Clone)]
pub struct TaskRepository {
    base: BaseRepository,
}

impl TaskRepository {
    pub fn new(store: Store) -> Self {
        Self {
            base: BaseRepository::new(store),
        }
    }

    /// Find task by id
    pub async fn find_by_id(&self, id: i64) -> Option<Task> {
        self.base.store().tasks().get(id)
    }

    /// All tasks owned by a user
    pub async fn find_by_user_id(&self, user_id: i64) -> Vec<Task> {
        self.base.store().tasks().filter(|t| t.user_id == user_id)
    }

    /// Create a new task
    pub async fn create(&self, data: TaskCreate) -> Task {
        let now = Utc::now();
        self.base.store().tasks().insert_with(|id| Task {
            id,
            user_id: data.user_id,
            title: data.title,
            description: data.description,
            due_date: data.due_date,
            priority: data.priority,
            completed: data.completed,
            created_at: now,
            updated_at: now,
        })
    }

    /// Merge the supplied fields onto an existing task
    pub async fn update(&self, id: i64, data: TaskUpdate) -> Option<Task> {
        self.base.store().tasks().update_with(id, |task| {
            if let Some(v) = data.user_id {
                task.user_id = v;
            }
            if let Some(v) = data.title {
                task.title = v;
            }
            if let Some(v) = data.description {
                task.description = Some(v);
            }
            if let Some(v) = data.due_date {
                task.due_date = Some(v);
            }
            if let Some(v) = data.priority {
                task.priority = v;
            }
            if let Some(v) = data.completed {
                task.completed = v;
            }
            task.updated_at = Utc::now();
        })
    }

    /// Flip the completion flag
    pub async fn toggle_completion(&self, id: i64) -> Option<Task> {
        self.base.store().tasks().update_with(id, |task| {
            task.completed = !task.completed;
            task.updated_at = Utc::now();
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::TaskPriority;

    fn payload(user_id: i64, title: &str) -> TaskCreate {
        TaskCreate {
            user_id,
            title: title.to_string(),
            description: None,
            due_date: None,
            priority: TaskPriority::default(),
            completed: false,
        }
    }

    #[tokio::test]
    async fn test_toggle_flips_back_and_forth() {
        let repo = TaskRepository::new(Store::new());
        let task = repo.create(payload(1, "Review CVs")).await;
        assert!(!task.completed);

        assert!(repo.toggle_completion(task.id).await.unwrap().completed);
        assert!(!repo.toggle_completion(task.id).await.unwrap().completed);
    }

    #[tokio::test]
    async fn test_toggle_missing_id_is_none() {
        let repo = TaskRepository::new(Store::new());
        assert!(repo.toggle_completion(42).await.is_none());
    }

    #[tokio::test]
    async fn test_partial_update_keeps_priority() {
        let repo = TaskRepository::new(Store::new());
        let task = repo
            .create(TaskCreate {
                priority: TaskPriority::High,
                ..payload(1, "Prepare payroll run")
            })
            .await;

        let updated = repo
            .update(
                task.id,
                TaskUpdate {
                    user_id: None,
                    title: Some("Prepare May payroll run".to_string()),
                    description: None,
                    due_date: None,
                    priority: None,
                    completed: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "Prepare May payroll run");
        assert_eq!(updated.priority, TaskPriority::High);
        assert!(!updated.completed);
    }
}
