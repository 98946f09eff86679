use crate::errors::Result;
use crate::users::users_model::{NewUser, User};
use async_trait::async_trait;

/// Trait for user repository operations
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    fn find_by_username(&self, username: &str) -> Result<Option<User>>;
    fn count(&self) -> Result<i64>;
    async fn create(&self, new_user: NewUser) -> Result<User>;
}

/// Stateless password hashing capability injected into the user service.
pub trait PasswordHasherTrait: Send + Sync {
    fn hash(&self, password: &str) -> Result<String>;
    fn verify(&self, password: &str, password_hash: &str) -> Result<bool>;
}

/// Trait for user service operations
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn register(&self, username: &str, password: &str) -> Result<User>;
    /// Returns `None` when the user is unknown or the password does not match.
    fn authenticate(&self, username: &str, password: &str) -> Result<Option<User>>;
    fn find_by_username(&self, username: &str) -> Result<Option<User>>;
    fn has_users(&self) -> Result<bool>;
}
