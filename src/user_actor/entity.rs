//! [`ActorEntity`] implementation for [`User`].

use super::UserError;
use crate::framework::ActorEntity;
use crate::model::{User, UserCreate, UserId, UserUpdate};
use async_trait::async_trait;

fn require_name(name: &str) -> Result<String, UserError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(UserError::ValidationError("name must not be blank".into()));
    }
    Ok(name.to_string())
}

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = UserError;

    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, UserError> {
        Ok(Self {
            id,
            name: require_name(&params.name)?,
            phone: params.phone,
            role: params.role,
            default_address: None,
        })
    }

    /// # Fields Updated
    /// - `name`: must not be blank
    /// - `default_address`: replaces the previous one
    async fn on_update(&mut self, update: UserUpdate, _ctx: &()) -> Result<(), UserError> {
        if let Some(name) = update.name {
            self.name = require_name(&name)?;
        }
        if let Some(address) = update.default_address {
            self.default_address = Some(address);
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), UserError> {
        Ok(())
    }
}
