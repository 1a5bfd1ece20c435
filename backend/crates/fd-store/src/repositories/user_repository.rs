use crate::{JsonFile, Result as StoreResult, StoreError};

use fd_core::User;

use std::sync::Arc;

use uuid::Uuid;

#[derive(Clone)]
pub struct UserRepository {
    users: Arc<JsonFile<User>>,
}

impl UserRepository {
    pub fn new(users: Arc<JsonFile<User>>) -> Self {
        Self { users }
    }

    pub async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        let users = self.users.read_all().await?;
        Ok(users.into_iter().find(|u| u.id == id))
    }

    /// Case-insensitive lookup by email.
    pub async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let email = User::normalize_email(email);
        let users = self.users.read_all().await?;
        Ok(users.into_iter().find(|u| u.email == email))
    }

    /// Register a new user. Ids and emails are unique.
    pub async fn create(&self, user: &User) -> StoreResult<()> {
        let mut users = self.users.lock().await?;

        if users.iter().any(|u| u.id == user.id) {
            return Err(StoreError::conflict(format!(
                "User {} is already registered",
                user.id
            )));
        }

        if users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::conflict(format!(
                "Email {} is already registered",
                user.email
            )));
        }

        users.push(user.clone());
        users.commit().await
    }

    /// Apply `patch` to the stored profile while the users file is locked.
    ///
    /// Fails with `Conflict` when the patched email belongs to another user.
    pub async fn modify<F, E>(&self, id: Uuid, patch: F) -> Result<User, E>
    where
        F: FnOnce(&mut User) -> Result<(), E>,
        E: From<StoreError>,
    {
        let mut users = self.users.lock().await?;

        let index = users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| StoreError::not_found("User", id))?;
        let mut updated = users[index].clone();
        patch(&mut updated)?;

        if users.iter().any(|u| u.id != id && u.email == updated.email) {
            return Err(StoreError::conflict(format!(
                "Email {} is already registered",
                updated.email
            ))
            .into());
        }

        users[index] = updated.clone();
        users.commit().await?;
        Ok(updated)
    }
}
