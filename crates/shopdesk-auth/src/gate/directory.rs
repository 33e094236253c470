//! Lookup of user records for authentication.

use async_trait::async_trait;

use shopdesk_client::{ClientError, ResourceClient};
use shopdesk_core::types::Resource;
use shopdesk_entity::User;

/// Source of truth for user records.
#[async_trait]
pub trait SubjectDirectory: Send + Sync + std::fmt::Debug {
    /// Fetch every user. `None` means the source returned no content.
    async fn list_subjects(&self) -> Result<Option<Vec<User>>, ClientError>;

    /// Fetch one user by id.
    async fn find_subject(&self, id: i64) -> Result<Option<User>, ClientError> {
        Ok(self
            .list_subjects()
            .await?
            .and_then(|users| users.into_iter().find(|u| u.id == id)))
    }
}

#[async_trait]
impl SubjectDirectory for ResourceClient {
    async fn list_subjects(&self) -> Result<Option<Vec<User>>, ClientError> {
        self.fetch_collection(Resource::Users).await
    }

    async fn find_subject(&self, id: i64) -> Result<Option<User>, ClientError> {
        match self.fetch_one(Resource::Users, id).await {
            Err(e) if e.is_not_found() => Ok(None),
            other => other,
        }
    }
}
