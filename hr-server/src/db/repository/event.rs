//! Event Repository

use chrono::Utc;

use super::BaseRepository;
use crate::db::Store;
use crate::db::models::{Event, EventCreate};

#[derive(Clone)]
pub struct EventRepository {
    base: BaseRepository,
}

impl EventRepository {
    pub fn new(store: Store) -> Self {
        Self {
            base: BaseRepository::new(store),
        }
    }

    /// Find event by id
    pub async fn find_by_id(&self, id: i64) -> Option<Event> {
        self.base.store().events().get(id)
    }

    /// All events in creation order
    pub async fn find_all(&self) -> Vec<Event> {
        self.base.store().events().all()
    }

    /// Events starting strictly after "now", soonest first
    pub async fn find_upcoming(&self, limit: usize) -> Vec<Event> {
        let now = Utc::now();
        let mut events = self.base.store().events().filter(|e| e.start_date > now);
        events.sort_by(|a, b| a.start_date.cmp(&b.start_date));
        events.truncate(limit);
        events
    }

    /// Create a new event
    pub async fn create(&self, data: EventCreate) -> Event {
        let created_at = Utc::now();
        self.base.store().events().insert_with(|id| Event {
            id,
            title: data.title,
            description: data.description,
            start_date: data.start_date,
            end_date: data.end_date,
            location: data.location,
            created_by: data.created_by,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn payload(title: &str, start_offset_hours: i64) -> EventCreate {
        let start = Utc::now() + Duration::hours(start_offset_hours);
        EventCreate {
            title: title.to_string(),
            description: None,
            start_date: start,
            end_date: start + Duration::hours(1),
            location: None,
            created_by: 1,
        }
    }

    #[tokio::test]
    async fn test_upcoming_excludes_past_and_sorts_ascending() {
        let repo = EventRepository::new(Store::new());
        repo.create(payload("yesterday", -24)).await;
        repo.create(payload("next week", 24 * 7)).await;
        repo.create(payload("tomorrow", 24)).await;

        let upcoming = repo.find_upcoming(5).await;
        let titles: Vec<_> = upcoming.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["tomorrow", "next week"]);
    }

    #[tokio::test]
    async fn test_upcoming_respects_limit() {
        let repo = EventRepository::new(Store::new());
        for i in 1..=4 {
            repo.create(payload(&format!("e{i}"), i)).await;
        }
        assert_eq!(repo.find_upcoming(2).await.len(), 2);
    }
}
