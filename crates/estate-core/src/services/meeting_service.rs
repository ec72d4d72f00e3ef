//! Meeting service

use chrono::{DateTime, Utc};

use crate::domain::Meeting;
use crate::dto::MeetingDto;
use crate::repositories::{Filter, SharedRepository};

use super::crud_service::{CrudService, EntityService};
use super::response::ServiceResponse;

pub struct MeetingService {
    crud: CrudService<Meeting>,
}

impl MeetingService {
    pub fn new(repo: SharedRepository<Meeting>) -> Self {
        Self {
            crud: CrudService::new(repo),
        }
    }

    /// Meetings of the building at or after `now`, soonest first.
    pub async fn upcoming(&self, building_id: i64, now: DateTime<Utc>) -> ServiceResponse<Vec<Meeting>> {
        let filter = Filter::eq("building_id", building_id).and(Filter::ge("scheduled_at", now));
        let result = self.crud.find(&filter).await.map(|mut meetings| {
            meetings.sort_by_key(|m| m.scheduled_at);
            meetings
        });
        let count = result.as_ref().map(Vec::len).unwrap_or_default();
        ServiceResponse::from_result(result, format!("{} upcoming meeting(s)", count))
    }
}

impl EntityService for MeetingService {
    type Entity = Meeting;
    type Dto = MeetingDto;

    fn crud(&self) -> &CrudService<Meeting> {
        &self.crud
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::TimeZone;

    use super::*;
    use crate::repositories::MemoryRepository;

    #[tokio::test]
    async fn test_upcoming_sorted_by_time() {
        let at = |d, h| Utc.with_ymd_and_hms(2024, 11, d, h, 0, 0).unwrap();
        let service = MeetingService::new(Arc::new(MemoryRepository::new()));
        for (title, when) in [("Budget review", at(20, 19)), ("Past meeting", at(1, 19)), ("Elections", at(12, 10))] {
            service
                .create(MeetingDto {
                    building_id: 1,
                    title: title.into(),
                    agenda: String::new(),
                    scheduled_at: when,
                    location: "Lobby".into(),
                })
                .await;
        }

        let response = service.upcoming(1, at(5, 0)).await;
        assert_eq!(response.message, "2 upcoming meeting(s)");
        let titles: Vec<_> = response.data.unwrap().into_iter().map(|m| m.title).collect();
        assert_eq!(titles, vec!["Elections", "Budget review"]);
    }
}
