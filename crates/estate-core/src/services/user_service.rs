//! User service

use estate_shared::utils::mask_email;
use tracing::debug;

use crate::domain::{User, UserRole};
use crate::dto::UserDto;
use crate::repositories::{Filter, SharedRepository};

use super::crud_service::{CrudService, EntityService};
use super::response::{FailureKind, ServiceResponse};

pub struct UserService {
    crud: CrudService<User>,
}

impl UserService {
    pub fn new(repo: SharedRepository<User>) -> Self {
        Self {
            crud: CrudService::new(repo),
        }
    }

    /// Emails are stored lowercased, so the lookup is case-insensitive.
    pub async fn by_email(&self, email: &str) -> ServiceResponse<User> {
        let email = email.trim().to_lowercase();
        debug!("Looking up user by email {}", mask_email(&email));
        match self.crud.find_one(&Filter::eq("email", email.as_str())).await {
            Ok(Some(user)) => ServiceResponse::ok(user, "User retrieved"),
            Ok(None) => ServiceResponse::failure(
                FailureKind::NotFound,
                format!("User not found: {}", email),
            ),
            Err(e) => e.into(),
        }
    }

    pub async fn by_role(&self, role: UserRole) -> ServiceResponse<Vec<User>> {
        self.crud.list(&Filter::eq("role", role)).await
    }

    pub async fn deactivate(&self, id: i64) -> ServiceResponse<User> {
        let result = self
            .crud
            .modify(id, |user| {
                user.deactivate();
                Ok(())
            })
            .await;
        ServiceResponse::from_result(result, "User deactivated")
    }
}

impl EntityService for UserService {
    type Entity = User;
    type Dto = UserDto;

    fn crud(&self) -> &CrudService<User> {
        &self.crud
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::repositories::MemoryRepository;

    fn dto(email: &str, role: UserRole) -> UserDto {
        UserDto {
            full_name: "Siti Rahma".into(),
            email: email.into(),
            phone: "+628111222333".into(),
            role,
            is_active: true,
        }
    }

    #[tokio::test]
    async fn test_lookup_by_email_and_role() {
        let service = UserService::new(Arc::new(MemoryRepository::new()));
        service.create(dto("siti@example.com", UserRole::Owner)).await;
        service.create(dto("guard@example.com", UserRole::Security)).await;

        let found = service.by_email("  SITI@example.com").await;
        assert_eq!(found.data.map(|u| u.role), Some(UserRole::Owner));

        let missing = service.by_email("nobody@example.com").await;
        assert_eq!(missing.failure, Some(FailureKind::NotFound));
        assert_eq!(missing.message, "User not found: nobody@example.com");

        let guards = service.by_role(UserRole::Security).await.data.unwrap();
        assert_eq!(guards.len(), 1);
        assert_eq!(guards[0].email, "guard@example.com");
    }

    #[tokio::test]
    async fn test_deactivate() {
        let service = UserService::new(Arc::new(MemoryRepository::new()));
        let user = service.create(dto("a@example.com", UserRole::Tenant)).await.data.unwrap();
        assert!(user.is_active);

        let response = service.deactivate(user.id).await;
        assert_eq!(response.message, "User deactivated");
        assert!(!response.data.unwrap().is_active);
        assert!(!service.get(user.id).await.data.unwrap().is_active);
    }
}
