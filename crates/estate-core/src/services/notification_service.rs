//! Notification service

use crate::domain::Notification;
use crate::dto::NotificationDto;
use crate::repositories::{Filter, SharedRepository};

use super::crud_service::{CrudService, EntityService};
use super::response::ServiceResponse;

pub struct NotificationService {
    crud: CrudService<Notification>,
}

impl NotificationService {
    pub fn new(repo: SharedRepository<Notification>) -> Self {
        Self {
            crud: CrudService::new(repo),
        }
    }

    pub async fn for_building(&self, building_id: i64) -> ServiceResponse<Vec<Notification>> {
        self.crud.list(&Filter::eq("building_id", building_id)).await
    }

    pub async fn unread(&self, building_id: i64) -> ServiceResponse<Vec<Notification>> {
        let filter = Filter::eq("building_id", building_id).and(Filter::eq("is_read", false));
        self.crud.list(&filter).await
    }

    /// Idempotent.
    pub async fn mark_read(&self, id: i64) -> ServiceResponse<Notification> {
        let result = self
            .crud
            .modify(id, |n| {
                n.is_read = true;
                Ok(())
            })
            .await;
        ServiceResponse::from_result(result, "Notification marked as read")
    }
}

impl EntityService for NotificationService {
    type Entity = Notification;
    type Dto = NotificationDto;

    fn crud(&self) -> &CrudService<Notification> {
        &self.crud
    }
}
