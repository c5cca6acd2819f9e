use std::sync::Arc;

use crate::error::TrackerError;
use crate::models::{non_blank, CreateUser, UserResponse};
use crate::storage::TrackerStore;

#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn TrackerStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn TrackerStore>) -> Self {
        Self { store }
    }

    /// Uniqueness is left to the store; a taken name surfaces as a store error.
    pub async fn create_user(&self, user_data: CreateUser) -> Result<UserResponse, TrackerError> {
        let username = user_data
            .username
            .filter(|name| non_blank(Some(name.as_str())).is_some())
            .ok_or(TrackerError::MissingUsername)?;

        let user = self.store.create_user(&username).await?;
        tracing::info!("Created user {} ({})", user.username, user.id);

        Ok(user.into())
    }

    pub async fn list_users(&self) -> Result<Vec<UserResponse>, TrackerError> {
        let users = self.store.list_users().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }
}
