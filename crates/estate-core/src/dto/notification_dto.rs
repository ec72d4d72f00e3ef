use serde::{Deserialize, Serialize};
use validator::Validate;

use super::EntityDto;
use crate::domain::{timestamp_now, Notification};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NotificationDto {
    #[validate(range(min = 1, message = "Building is required"))]
    pub building_id: i64,

    #[validate(length(min = 1, max = 120, message = "Title must be between 1 and 120 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 2000, message = "Message must be between 1 and 2000 characters"))]
    pub message: String,
}

impl EntityDto for NotificationDto {
    type Entity = Notification;

    fn apply_to(self, notification: &mut Notification) {
        notification.building_id = self.building_id;
        notification.title = self.title.trim().to_string();
        notification.message = self.message;
    }

    fn into_new(self) -> Notification {
        let mut notification = Notification {
            created_at: timestamp_now(),
            ..Notification::default()
        };
        self.apply_to(&mut notification);
        notification
    }
}
