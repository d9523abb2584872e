// src/domain/article/repository.rs
use crate::domain::article::entity::{Article, ArticleWithCommentCount, NewArticle};
use crate::domain::article::sorting::ArticleListFilter;
use crate::domain::article::value_objects::{ArticleId, VoteDelta};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;

    /// Adds `delta` to the stored vote count and returns the updated row in
    /// one store operation. `None` when no article has this id.
    async fn increment_votes(&self, id: ArticleId, delta: VoteDelta)
    -> DomainResult<Option<Article>>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleWithCommentCount>>;
    async fn exists(&self, id: ArticleId) -> DomainResult<bool>;
    async fn list(&self, filter: &ArticleListFilter) -> DomainResult<Vec<ArticleWithCommentCount>>;
}
