use std::sync::Arc;

use crate::domain::User;
use crate::error::DomainError;
use crate::ports::UserRepository;

/// Read-only user listing.
pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// List users, optionally filtered by name.
    pub async fn get_users(&self, q: Option<&str>) -> Result<Vec<User>, DomainError> {
        let users = self.users.find_users(q).await?;
        Ok(users)
    }
}
