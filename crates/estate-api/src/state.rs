use std::sync::Arc;

use axum::extract::FromRef;

use estate_core::repositories::RepositorySet;
use estate_core::services::{
    ApartmentService, BuildingService, ComplaintService, ContractService, MeetingService,
    NotificationService, OwnerService, PaymentService, StaffService, SurveyService, TenantService,
    UserService,
};
use estate_shared::config::BillingSettings;

/// Every service, each extractable on its own as `State<Arc<...>>`.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub users: Arc<UserService>,
    pub buildings: Arc<BuildingService>,
    pub apartments: Arc<ApartmentService>,
    pub owners: Arc<OwnerService>,
    pub tenants: Arc<TenantService>,
    pub contracts: Arc<ContractService>,
    pub payments: Arc<PaymentService>,
    pub complaints: Arc<ComplaintService>,
    pub surveys: Arc<SurveyService>,
    pub meetings: Arc<MeetingService>,
    pub notifications: Arc<NotificationService>,
    pub staff: Arc<StaffService>,
}

impl AppState {
    pub fn new(repos: RepositorySet, billing: &BillingSettings) -> Self {
        Self {
            users: Arc::new(UserService::new(repos.users)),
            buildings: Arc::new(BuildingService::new(repos.buildings)),
            tenants: Arc::new(TenantService::new(repos.tenants, repos.apartments.clone())),
            apartments: Arc::new(ApartmentService::new(repos.apartments)),
            owners: Arc::new(OwnerService::new(repos.owners)),
            contracts: Arc::new(ContractService::new(repos.contracts)),
            payments: Arc::new(PaymentService::new(
                repos.payments,
                billing.default_daily_penalty_rate,
            )),
            complaints: Arc::new(ComplaintService::new(repos.complaints)),
            surveys: Arc::new(SurveyService::new(repos.surveys)),
            meetings: Arc::new(MeetingService::new(repos.meetings)),
            notifications: Arc::new(NotificationService::new(repos.notifications)),
            staff: Arc::new(StaffService::new(repos.staff)),
        }
    }
}
