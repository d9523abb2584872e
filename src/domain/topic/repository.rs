// src/domain/topic/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::topic::entity::{Topic, TopicSlug};
use async_trait::async_trait;

#[async_trait]
pub trait TopicRepository: Send + Sync {
    /// All topics ordered by slug.
    async fn list(&self) -> DomainResult<Vec<Topic>>;
    async fn find_by_slug(&self, slug: &TopicSlug) -> DomainResult<Option<Topic>>;
}
