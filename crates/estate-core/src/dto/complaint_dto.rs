use serde::{Deserialize, Serialize};
use validator::Validate;

use super::EntityDto;
use crate::domain::{timestamp_now, Complaint};

/// Status and timestamps are managed through the complaint workflow, not
/// through this payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ComplaintDto {
    #[validate(range(min = 1, message = "Apartment is required"))]
    pub apartment_id: i64,

    #[validate(range(min = 1, message = "User is required"))]
    pub user_id: i64,

    #[validate(length(min = 3, max = 120, message = "Title must be between 3 and 120 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 2000, message = "Description must be between 1 and 2000 characters"))]
    pub description: String,
}

impl EntityDto for ComplaintDto {
    type Entity = Complaint;

    fn apply_to(self, complaint: &mut Complaint) {
        complaint.apartment_id = self.apartment_id;
        complaint.user_id = self.user_id;
        complaint.title = self.title.trim().to_string();
        complaint.description = self.description;
    }

    fn into_new(self) -> Complaint {
        let mut complaint = Complaint {
            created_at: timestamp_now(),
            ..Complaint::default()
        };
        self.apply_to(&mut complaint);
        complaint
    }
}
