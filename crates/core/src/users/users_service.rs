use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::errors::{Error, Result, ValidationError};
use crate::users::users_model::{NewUser, User};
use crate::users::users_traits::{PasswordHasherTrait, UserRepositoryTrait, UserServiceTrait};

pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
    hasher: Arc<dyn PasswordHasherTrait>,
}

impl UserService {
    pub fn new(
        repository: Arc<dyn UserRepositoryTrait>,
        hasher: Arc<dyn PasswordHasherTrait>,
    ) -> Self {
        Self { repository, hasher }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn register(&self, username: &str, password: &str) -> Result<User> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ValidationError::MissingField("username".to_string()).into());
        }
        if password.is_empty() {
            return Err(ValidationError::MissingField("password".to_string()).into());
        }
        if self.repository.find_by_username(username)?.is_some() {
            return Err(Error::ConstraintViolation(format!(
                "Username '{}' is already taken",
                username
            )));
        }

        let password_hash = self.hasher.hash(password)?;
        let user = self
            .repository
            .create(NewUser {
                username: username.to_string(),
                password_hash,
            })
            .await?;
        debug!("Registered user {} with id {}", user.username, user.id);
        Ok(user)
    }

    fn authenticate(&self, username: &str, password: &str) -> Result<Option<User>> {
        let Some(user) = self.repository.find_by_username(username.trim())? else {
            return Ok(None);
        };
        if self.hasher.verify(password, &user.password_hash)? {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        self.repository.find_by_username(username)
    }

    fn has_users(&self) -> Result<bool> {
        Ok(self.repository.count()? > 0)
    }
}
