//! # Estate Core - Domain Module
//!
//! Entities of the apartment management platform. Every entity is a plain
//! record with an integer `id`; relations are foreign-key columns only.

pub mod user;
pub mod building;
pub mod apartment;
pub mod owner;
pub mod tenant;
pub mod contract;
pub mod payment;
pub mod complaint;
pub mod survey;
pub mod meeting;
pub mod notification;
pub mod staff;

// Re-export all entities and enums
pub use user::{User, UserRole};
pub use building::Building;
pub use apartment::Apartment;
pub use owner::Owner;
pub use tenant::Tenant;
pub use contract::Contract;
pub use payment::{Payment, PaymentKind};
pub use complaint::{Complaint, ComplaintStatus};
pub use survey::Survey;
pub use meeting::Meeting;
pub use notification::Notification;
pub use staff::{Staff, StaffDuty};

use chrono::{DateTime, SubsecRound, Utc};

/// Current time at the precision the stores keep (microseconds).
pub fn timestamp_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}
