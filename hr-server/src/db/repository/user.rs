//! User Repository

use chrono::Utc;

use super::BaseRepository;
use crate::db::Store;
use crate::db::models::{User, UserCreate, UserUpdate};

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(store: Store) -> Self {
        Self {
            base: BaseRepository::new(store),
        }
    }

    /// Find all users in insertion order
    pub async fn find_all(&self) -> Vec<User> {
        self.base.store().users().all()
    }

    /// Find user by id
    pub async fn find_by_id(&self, id: i64) -> Option<User> {
        self.base.store().users().get(id)
    }

    /// Find user by username (first match; uniqueness is a convention)
    pub async fn find_by_username(&self, username: &str) -> Option<User> {
        self.base.store().users().find(|u| u.username == username)
    }

    /// Find user by email (first match)
    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        self.base.store().users().find(|u| u.email == email)
    }

    /// Create a new user
    pub async fn create(&self, data: UserCreate) -> User {
        let now = Utc::now();
        self.base.store().users().insert_with(|id| User {
            id,
            username: data.username,
            password: data.password,
            email: data.email,
            first_name: data.first_name,
            last_name: data.last_name,
            role: data.role,
            created_at: now,
            updated_at: now,
        })
    }

    /// Merge the supplied fields onto an existing user
    pub async fn update(&self, id: i64, data: UserUpdate) -> Option<User> {
        self.base.store().users().update_with(id, |user| {
            if let Some(v) = data.username {
                user.username = v;
            }
            if let Some(v) = data.password {
                user.password = v;
            }
            if let Some(v) = data.email {
                user.email = v;
            }
            if let Some(v) = data.first_name {
                user.first_name = v;
            }
            if let Some(v) = data.last_name {
                user.last_name = v;
            }
            if let Some(v) = data.role {
                user.role = v;
            }
            user.updated_at = Utc::now();
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(username: &str, email: &str) -> UserCreate {
        UserCreate {
            username: username.to_string(),
            password: "secret".to_string(),
            email: email.to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            role: "employee".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = UserRepository::new(Store::new());
        let a = repo.create(payload("a", "a@x.com")).await;
        let b = repo.create(payload("b", "b@x.com")).await;
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn test_create_then_get_round_trips() {
        let repo = UserRepository::new(Store::new());
        let created = repo.create(payload("ana", "ana@x.com")).await;
        let fetched = repo.find_by_id(created.id).await.unwrap();
        assert_eq!(fetched.username, "ana");
        assert_eq!(fetched.email, "ana@x.com");
        assert_eq!(fetched.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_lookup_by_username_and_email() {
        let repo = UserRepository::new(Store::new());
        repo.create(payload("ana", "ana@x.com")).await;
        repo.create(payload("bob", "bob@x.com")).await;

        assert_eq!(repo.find_by_username("bob").await.unwrap().id, 2);
        assert_eq!(repo.find_by_email("ana@x.com").await.unwrap().id, 1);
        assert!(repo.find_by_username("nobody").await.is_none());
    }

    #[tokio::test]
    async fn test_partial_update_preserves_untouched_fields() {
        let repo = UserRepository::new(Store::new());
        let created = repo.create(payload("ana", "ana@x.com")).await;

        let updated = repo
            .update(
                created.id,
                UserUpdate {
                    username: None,
                    password: None,
                    email: Some("new@x.com".to_string()),
                    first_name: None,
                    last_name: None,
                    role: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.email, "new@x.com");
        assert_eq!(updated.username, "ana");
        assert_eq!(updated.first_name, "Test");
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_update_missing_id_returns_none() {
        let repo = UserRepository::new(Store::new());
        let result = repo
            .update(
                42,
                UserUpdate {
                    username: None,
                    password: None,
                    email: None,
                    first_name: None,
                    last_name: None,
                    role: None,
                },
            )
            .await;
        assert!(result.is_none());
    }
}
