//! Data-transfer shapes accepted at the API boundary.
//!
//! One DTO per entity, used for both create and full update. Field rules are
//! declared with `validator` and checked by the services before anything is
//! persisted.

use validator::Validate;

use crate::repositories::Entity;

pub mod user_dto;
pub mod building_dto;
pub mod apartment_dto;
pub mod owner_dto;
pub mod tenant_dto;
pub mod contract_dto;
pub mod payment_dto;
pub mod complaint_dto;
pub mod survey_dto;
pub mod meeting_dto;
pub mod notification_dto;
pub mod staff_dto;

pub use user_dto::UserDto;
pub use building_dto::BuildingDto;
pub use apartment_dto::ApartmentDto;
pub use owner_dto::OwnerDto;
pub use tenant_dto::TenantDto;
pub use contract_dto::ContractDto;
pub use payment_dto::PaymentDto;
pub use complaint_dto::ComplaintDto;
pub use survey_dto::SurveyDto;
pub use meeting_dto::MeetingDto;
pub use notification_dto::NotificationDto;
pub use staff_dto::StaffDto;

/// Maps a validated payload onto its entity.
pub trait EntityDto: Validate + Send + Sync + 'static {
    type Entity: Entity + Default;

    /// Copies the client-editable fields onto `entity`.
    fn apply_to(self, entity: &mut Self::Entity);

    /// Builds a new, not yet persisted entity. Server-managed fields take
    /// their defaults unless the DTO overrides this.
    fn into_new(self) -> Self::Entity
    where
        Self: Sized,
    {
        let mut entity = Self::Entity::default();
        self.apply_to(&mut entity);
        entity
    }
}

pub(crate) fn default_true() -> bool {
    true
}
