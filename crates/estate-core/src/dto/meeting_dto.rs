use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::EntityDto;
use crate::domain::Meeting;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MeetingDto {
    #[validate(range(min = 1, message = "Building is required"))]
    pub building_id: i64,

    #[validate(length(min = 3, max = 120, message = "Title must be between 3 and 120 characters"))]
    pub title: String,

    #[validate(length(max = 4000, message = "Agenda cannot exceed 4000 characters"))]
    #[serde(default)]
    pub agenda: String,

    pub scheduled_at: DateTime<Utc>,

    #[validate(length(min = 1, max = 200, message = "Location must be between 1 and 200 characters"))]
    pub location: String,
}

impl EntityDto for MeetingDto {
    type Entity = Meeting;

    fn apply_to(self, meeting: &mut Meeting) {
        meeting.building_id = self.building_id;
        meeting.title = self.title.trim().to_string();
        meeting.agenda = self.agenda;
        // stored timestamps carry microseconds
        meeting.scheduled_at = self.scheduled_at.trunc_subsecs(6);
        meeting.location = self.location.trim().to_string();
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    #[test]
    fn test_schedule_truncated_to_microseconds() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 19, 0, 0).unwrap() + Duration::nanoseconds(987_654_321);
        let meeting = MeetingDto {
            building_id: 1,
            title: " Annual meeting ".into(),
            agenda: String::new(),
            scheduled_at: at,
            location: "Hall".into(),
        }
        .into_new();
        assert_eq!(meeting.scheduled_at.timestamp_subsec_nanos(), 987_654_000);
        assert_eq!(meeting.title, "Annual meeting");
    }
}
