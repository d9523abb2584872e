use crate::{
    application::{dto::TopicDto, error::ApplicationResult},
    domain::topic::TopicRepository,
};
use std::sync::Arc;

pub struct TopicQueryService {
    repo: Arc<dyn TopicRepository>,
}

impl TopicQueryService {
    pub fn new(repo: Arc<dyn TopicRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_topics(&self) -> ApplicationResult<Vec<TopicDto>> {
        let topics = self.repo.list().await?;
        Ok(topics.into_iter().map(Into::into).collect())
    }
}
