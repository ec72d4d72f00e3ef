//! Survey service

use chrono::NaiveDate;

use crate::domain::Survey;
use crate::dto::SurveyDto;
use crate::repositories::{Filter, SharedRepository};

use super::crud_service::{CrudService, EntityService};
use super::response::ServiceResponse;

pub struct SurveyService {
    crud: CrudService<Survey>,
}

impl SurveyService {
    pub fn new(repo: SharedRepository<Survey>) -> Self {
        Self {
            crud: CrudService::new(repo),
        }
    }

    /// Surveys of the building accepting answers on `date` (bounds inclusive).
    pub async fn open_on(&self, building_id: i64, date: NaiveDate) -> ServiceResponse<Vec<Survey>> {
        let filter = Filter::eq("building_id", building_id)
            .and(Filter::le("starts_on", date))
            .and(Filter::ge("ends_on", date));
        self.crud.list(&filter).await
    }
}

impl EntityService for SurveyService {
    type Entity = Survey;
    type Dto = SurveyDto;

    fn crud(&self) -> &CrudService<Survey> {
        &self.crud
    }
}
