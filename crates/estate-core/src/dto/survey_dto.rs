use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::EntityDto;
use crate::domain::Survey;
use crate::validation::rule_violation;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_window"))]
pub struct SurveyDto {
    #[validate(range(min = 1, message = "Building is required"))]
    pub building_id: i64,

    #[validate(length(min = 3, max = 120, message = "Title must be between 3 and 120 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 1000, message = "Question must be between 1 and 1000 characters"))]
    pub question: String,

    pub starts_on: NaiveDate,

    pub ends_on: NaiveDate,
}

fn validate_window(dto: &SurveyDto) -> Result<(), ValidationError> {
    if dto.ends_on < dto.starts_on {
        return Err(rule_violation(
            "ends_before_start",
            "Survey cannot end before it starts",
        ));
    }
    Ok(())
}

impl EntityDto for SurveyDto {
    type Entity = Survey;

    fn apply_to(self, survey: &mut Survey) {
        survey.building_id = self.building_id;
        survey.title = self.title.trim().to_string();
        survey.question = self.question;
        survey.starts_on = self.starts_on;
        survey.ends_on = self.ends_on;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_dto;

    #[test]
    fn test_single_day_survey_allowed() {
        let day = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
        let mut dto = SurveyDto {
            building_id: 1,
            title: "Parking rules".into(),
            question: "Should visitor parking be limited to two hours?".into(),
            starts_on: day,
            ends_on: day,
        };
        assert!(validate_dto(&dto).is_ok());
        dto.ends_on = day.pred_opt().unwrap();
        assert!(validate_dto(&dto).is_err());
    }
}
