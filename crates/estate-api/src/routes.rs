//! Router assembly

use axum::{
    routing::{get, post},
    Router,
};

use estate_core::services::{
    ApartmentService, BuildingService, ComplaintService, ContractService, MeetingService,
    NotificationService, OwnerService, PaymentService, StaffService, SurveyService, TenantService,
    UserService,
};
use estate_shared::constants::API_PREFIX;

use crate::handlers::{
    apartments, buildings, complaints, contracts, crud, health, notifications, payments, tenants,
    users,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let users = crud::routes::<UserService>()
        .route("/by-email", get(users::by_email))
        .route("/{id}/deactivate", post(users::deactivate));

    let buildings = crud::routes::<BuildingService>()
        .route("/{id}/apartments", get(buildings::apartments))
        .route("/{id}/meetings/upcoming", get(buildings::upcoming_meetings))
        .route("/{id}/surveys/open", get(buildings::open_surveys));

    let apartments = crud::routes::<ApartmentService>().route("/vacant", get(apartments::vacant));

    let tenants = crud::routes::<TenantService>().route("/{id}/move-out", post(tenants::move_out));

    let contracts = crud::routes::<ContractService>()
        .route("/active", get(contracts::active))
        .route("/{id}/terminate", post(contracts::terminate));

    let payments = crud::routes::<PaymentService>()
        .route("/overdue", get(payments::overdue))
        .route("/{id}/penalty", get(payments::penalty))
        .route("/{id}/pay", post(payments::pay));

    let complaints = crud::routes::<ComplaintService>()
        .route("/{id}/start", post(complaints::start))
        .route("/{id}/resolve", post(complaints::resolve));

    let notifications = crud::routes::<NotificationService>()
        .route("/{id}/read", post(notifications::mark_read));

    let api = Router::new()
        .nest("/users", users)
        .nest("/buildings", buildings)
        .nest("/apartments", apartments)
        .nest("/owners", crud::routes::<OwnerService>())
        .nest("/tenants", tenants)
        .nest("/contracts", contracts)
        .nest("/payments", payments)
        .nest("/complaints", complaints)
        .nest("/surveys", crud::routes::<SurveyService>())
        .nest("/meetings", crud::routes::<MeetingService>())
        .nest("/notifications", notifications)
        .nest("/staff", crud::routes::<StaffService>());

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .nest(API_PREFIX, api)
        .with_state(state)
}
