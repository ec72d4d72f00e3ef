//! Complaint domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::{entity, text_enum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
}

text_enum!(ComplaintStatus {
    Open => "open",
    InProgress => "in_progress",
    Resolved => "resolved",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Complaint {
    pub id: i64,
    pub apartment_id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub status: ComplaintStatus,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

entity!(Complaint, name = "Complaint", table = "complaints", {
    apartment_id: i64 => "apartments",
    user_id: i64 => "users",
    title: String,
    description: String,
    status: ComplaintStatus,
    created_at: DateTime<Utc>,
    resolved_at: Option<DateTime<Utc>>,
});

impl Complaint {
    pub fn start_progress(&mut self) -> Result<(), DomainError> {
        match self.status {
            ComplaintStatus::Open => {
                self.status = ComplaintStatus::InProgress;
                Ok(())
            }
            other => Err(DomainError::ValidationError(format!(
                "Complaint {} is {} and cannot be started",
                self.id,
                other.as_str()
            ))),
        }
    }

    pub fn resolve(&mut self, at: DateTime<Utc>) -> Result<(), DomainError> {
        if self.status == ComplaintStatus::Resolved {
            return Err(DomainError::ValidationError(format!(
                "Complaint {} is already resolved",
                self.id
            )));
        }
        self.status = ComplaintStatus::Resolved;
        self.resolved_at = Some(at);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_transitions() {
        let mut c = Complaint::default();
        c.start_progress().unwrap();
        assert_eq!(c.status, ComplaintStatus::InProgress);
        assert!(c.start_progress().is_err());

        let at = Utc::now();
        c.resolve(at).unwrap();
        assert_eq!(c.resolved_at, Some(at));
        assert!(matches!(c.resolve(at), Err(DomainError::ValidationError(_))));
    }

    #[test]
    fn test_in_progress_text() {
        assert_eq!(ComplaintStatus::InProgress.as_str(), "in_progress");
        assert_eq!(ComplaintStatus::parse("in_progress"), Some(ComplaintStatus::InProgress));
    }
}
