//! Announcement Repository

use chrono::Utc;

use super::BaseRepository;
use crate::db::Store;
use crate::db::models::{Announcement, AnnouncementCreate};

#[derive(Clone)]
pub struct AnnouncementRepository {
    base: BaseRepository,
}

impl AnnouncementRepository {
    pub fn new(store: Store) -> Self {
        Self {
            base: BaseRepository::new(store),
        }
    }

    /// Find announcement by id
    pub async fn find_by_id(&self, id: i64) -> Option<Announcement> {
        self.base.store().announcements().get(id)
    }

    /// All announcements in posting order
    pub async fn find_all(&self) -> Vec<Announcement> {
        self.base.store().announcements().all()
    }

    /// Most recently posted announcements, newest first
    pub async fn find_recent(&self, limit: usize) -> Vec<Announcement> {
        let mut announcements = self.base.store().announcements().all();
        announcements.sort_by(|a, b| b.post_date.cmp(&a.post_date));
        announcements.truncate(limit);
        announcements
    }

    /// Post a new announcement
    pub async fn create(&self, data: AnnouncementCreate) -> Announcement {
        let post_date = Utc::now();
        self.base
            .store()
            .announcements()
            .insert_with(|id| Announcement {
                id,
                created_by: data.created_by,
                title: data.title,
                content: data.content,
                post_date,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[tokio::test]
    async fn test_recent_sorts_by_post_date_descending() {
        let repo = AnnouncementRepository::new(Store::new());
        for (i, title) in ["first", "second", "third"].iter().enumerate() {
            let posted = repo
                .create(AnnouncementCreate {
                    created_by: 1,
                    title: title.to_string(),
                    content: "…".to_string(),
                })
                .await;
            // Backdate so ordering does not depend on wall-clock resolution
            let _ = repo.base.store().announcements().update_with(posted.id, |a| {
                a.post_date = Utc.with_ymd_and_hms(2024, 5, i as u32 + 1, 9, 0, 0).unwrap();
            });
        }

        let recent = repo.find_recent(2).await;
        let titles: Vec<_> = recent.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["third", "second"]);
    }
}
