//! # User Client
//!
//! The identity provider seen by the screens: the phone + code sign-in flow
//! and profile edits.

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Address, OtpCode, Phone, User, UserCreate, UserId, UserRole, UserUpdate};
use crate::user_actor::UserError;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
    latency: Duration,
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => UserError::NotFound(id),
            other => other
                .into_entity_error::<UserError>()
                .unwrap_or_else(|e| UserError::ActorCommunicationError(e.to_string())),
        }
    }
}

impl UserClient {
    /// `latency` is waited before each login or registration, standing in for
    /// the round trip to a real identity backend.
    pub fn new(inner: ResourceClient<User>, latency: Duration) -> Self {
        Self { inner, latency }
    }

    #[instrument(skip(self))]
    pub async fn create_user(&self, params: UserCreate) -> Result<UserId, UserError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self, phone), fields(phone = %phone))]
    pub async fn find_by_phone(&self, phone: &Phone) -> Result<Option<User>, UserError> {
        let users = self.list().await?;
        Ok(users.into_iter().find(|user| &user.phone == phone))
    }

    /// Decides which branch of the sign-in flow follows the phone step.
    pub async fn is_registered(&self, raw_phone: &str) -> Result<bool, UserError> {
        let phone = Phone::parse(raw_phone)?;
        Ok(self.find_by_phone(&phone).await?.is_some())
    }

    /// Signs in an existing customer.
    #[instrument(skip(self, code))]
    pub async fn login(&self, raw_phone: &str, code: &str) -> Result<User, UserError> {
        let phone = Phone::parse(raw_phone)?;
        OtpCode::parse(code)?;
        tokio::time::sleep(self.latency).await;

        let user = self
            .find_by_phone(&phone)
            .await?
            .ok_or_else(|| UserError::NotRegistered(phone.to_string()))?;
        info!(user_id = %user.id, "Logged in");
        Ok(user)
    }

    /// Creates a customer account for a phone that has none yet.
    #[instrument(skip(self, code))]
    pub async fn register(&self, name: &str, raw_phone: &str, code: &str) -> Result<User, UserError> {
        let phone = Phone::parse(raw_phone)?;
        OtpCode::parse(code)?;
        tokio::time::sleep(self.latency).await;

        if self.find_by_phone(&phone).await?.is_some() {
            return Err(UserError::AlreadyExists(phone.to_string()));
        }
        let id = self
            .create_user(UserCreate {
                name: name.to_string(),
                phone,
                role: UserRole::Customer,
            })
            .await?;
        info!(user_id = %id, "Registered");
        self.get(id)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn update_user(&self, id: UserId, update: UserUpdate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    pub async fn set_default_address(&self, id: UserId, address: Address) -> Result<User, UserError> {
        self.update_user(
            id,
            UserUpdate {
                default_address: Some(address),
                ..UserUpdate::default()
            },
        )
        .await
    }
}
