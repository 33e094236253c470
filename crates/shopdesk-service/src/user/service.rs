//! User administration: listing, editing, activation and deletion.

use std::sync::Arc;

use tracing::info;
use validator::Validate;

use shopdesk_client::ResourceClient;
use shopdesk_core::error::AppError;
use shopdesk_core::types::{PageRequest, PageResponse, Resource};
use shopdesk_entity::{Order, User, UserDraft, UserStatus};

use crate::catalog::{decode_created, load_all, load_one};
use crate::context::AdminContext;
use crate::dashboard::service::sort_newest_first;
use crate::filter::UserFilter;

/// Handles user administration.
#[derive(Debug, Clone)]
pub struct UserService {
    /// API client.
    client: Arc<ResourceClient>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(client: Arc<ResourceClient>) -> Self {
        Self { client }
    }

    /// Lists users matching `filter`, one page at a time.
    pub async fn list(
        &self,
        ctx: &AdminContext,
        filter: &UserFilter,
        page: &PageRequest,
    ) -> Result<PageResponse<User>, AppError> {
        ctx.require_admin()?;
        let users: Vec<User> = load_all(&self.client, Resource::Users).await?;
        let matching: Vec<User> = users.into_iter().filter(|u| filter.matches(u)).collect();
        Ok(PageResponse::paginate(matching, page))
    }

    /// Gets a single user by ID.
    pub async fn get(&self, ctx: &AdminContext, user_id: i64) -> Result<User, AppError> {
        ctx.require_admin()?;
        load_one(&self.client, Resource::Users, user_id, "User").await
    }

    /// Creates a new user. A secret is mandatory.
    ///
    /// Returns the created record when the API echoes it back.
    pub async fn create(&self, ctx: &AdminContext, draft: UserDraft) -> Result<Option<User>, AppError> {
        ctx.require_admin()?;
        draft.validate()?;
        if draft.new_secret().is_none() {
            return Err(AppError::validation("Password is required for new users"));
        }

        let created: Option<serde_json::Value> =
            self.client.create(Resource::Users, &draft).await?;

        info!(admin_id = ctx.user_id, email = %draft.email, "User created");
        Ok(decode_created(Resource::Users, created))
    }

    /// Updates a user's editable fields.
    ///
    /// The current record is fetched first and written back whole, so fields
    /// this console does not edit survive. The secret only changes when the
    /// draft carries a non-blank one.
    pub async fn update(
        &self,
        ctx: &AdminContext,
        user_id: i64,
        draft: UserDraft,
    ) -> Result<User, AppError> {
        ctx.require_admin()?;
        draft.validate()?;

        let mut user = self.get(ctx, user_id).await?;
        draft.apply_to(&mut user);
        self.put(&user).await?;

        info!(admin_id = ctx.user_id, user_id, "User updated");
        Ok(user)
    }

    /// Sets a user's account status.
    pub async fn set_status(
        &self,
        ctx: &AdminContext,
        user_id: i64,
        status: UserStatus,
    ) -> Result<User, AppError> {
        let mut user = self.get(ctx, user_id).await?;
        user.status = status;
        self.put(&user).await?;

        info!(admin_id = ctx.user_id, user_id, status = %user.status.as_str(), "User status changed");
        Ok(user)
    }

    /// Activates a user account.
    pub async fn activate(&self, ctx: &AdminContext, user_id: i64) -> Result<User, AppError> {
        self.set_status(ctx, user_id, UserStatus::Active).await
    }

    /// Deactivates a user account.
    pub async fn deactivate(&self, ctx: &AdminContext, user_id: i64) -> Result<User, AppError> {
        self.set_status(ctx, user_id, UserStatus::Inactive).await
    }

    /// Deletes a user.
    pub async fn delete(&self, ctx: &AdminContext, user_id: i64) -> Result<(), AppError> {
        ctx.require_admin()?;
        self.client.delete(Resource::Users, user_id).await?;
        info!(admin_id = ctx.user_id, user_id, "User deleted");
        Ok(())
    }

    /// Orders placed by a user, newest first.
    pub async fn purchase_history(
        &self,
        ctx: &AdminContext,
        user_id: i64,
    ) -> Result<Vec<Order>, AppError> {
        ctx.require_admin()?;
        let orders: Vec<Order> = load_all(&self.client, Resource::Orders).await?;
        let mut mine: Vec<&Order> = orders.iter().filter(|o| o.user_id == user_id).collect();
        sort_newest_first(&mut mine);
        Ok(mine.into_iter().cloned().collect())
    }

    async fn put(&self, user: &User) -> Result<(), AppError> {
        self.client
            .update::<User, serde_json::Value>(Resource::Users, user.id, user)
            .await?;
        Ok(())
    }
}
