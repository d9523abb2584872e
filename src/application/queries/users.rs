use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{UserRepository, Username},
};
use std::sync::Arc;

pub struct GetUserQuery {
    pub username: String,
}

pub struct UserQueryService {
    repo: Arc<dyn UserRepository>,
}

impl UserQueryService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_users(&self) -> ApplicationResult<Vec<UserDto>> {
        let users = self.repo.list().await?;
        Ok(users.into_iter().map(Into::into).collect())
    }

    pub async fn get_user(&self, query: GetUserQuery) -> ApplicationResult<UserDto> {
        let username =
            Username::new(query.username).map_err(|_| ApplicationError::user_not_found())?;
        self.repo
            .find_by_username(&username)
            .await?
            .map(Into::into)
            .ok_or_else(ApplicationError::user_not_found)
    }
}
