//! Domain services (business logic)
//!
//! Every public service call returns a [`ServiceResponse`]; failures are
//! logged and folded into the envelope here rather than in the stores.

pub mod response;
pub mod crud_service;
pub mod user_service;
pub mod building_service;
pub mod apartment_service;
pub mod owner_service;
pub mod tenant_service;
pub mod contract_service;
pub mod payment_service;
pub mod complaint_service;
pub mod survey_service;
pub mod meeting_service;
pub mod notification_service;
pub mod staff_service;

pub use response::{FailureKind, ServiceResponse};
pub use crud_service::{CrudService, EntityService};
pub use user_service::UserService;
pub use building_service::BuildingService;
pub use apartment_service::ApartmentService;
pub use owner_service::OwnerService;
pub use tenant_service::TenantService;
pub use contract_service::ContractService;
pub use payment_service::{PaymentService, PenaltyQuote};
pub use complaint_service::ComplaintService;
pub use survey_service::SurveyService;
pub use meeting_service::MeetingService;
pub use notification_service::NotificationService;
pub use staff_service::StaffService;
