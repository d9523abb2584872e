// tests/support/mocks/failing.rs
use async_trait::async_trait;
use newsroom::domain::article::{
    Article, ArticleId, ArticleListFilter, ArticleReadRepository, ArticleWithCommentCount,
    ArticleWriteRepository, NewArticle, VoteDelta,
};
use newsroom::domain::comment::{Comment, CommentRepository, NewComment};
use newsroom::domain::errors::{DomainError, DomainResult};
use newsroom::domain::topic::{Topic, TopicRepository, TopicSlug};
use newsroom::domain::user::{User, UserRepository, Username};

/// すべての操作が永続化エラーを返すストア
pub struct FailingStore;

fn broken<T>() -> DomainResult<T> {
    Err(DomainError::Persistence(
        "connection to server at \"db\" failed".into(),
    ))
}

#[async_trait]
impl TopicRepository for FailingStore {
    async fn list(&self) -> DomainResult<Vec<Topic>> {
        broken()
    }

    async fn find_by_slug(&self, _slug: &TopicSlug) -> DomainResult<Option<Topic>> {
        broken()
    }
}

#[async_trait]
impl UserRepository for FailingStore {
    async fn list(&self) -> DomainResult<Vec<User>> {
        broken()
    }

    async fn find_by_username(&self, _username: &Username) -> DomainResult<Option<User>> {
        broken()
    }
}

#[async_trait]
impl ArticleReadRepository for FailingStore {
    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<ArticleWithCommentCount>> {
        broken()
    }

    async fn exists(&self, _id: ArticleId) -> DomainResult<bool> {
        broken()
    }

    async fn list(&self, _filter: &ArticleListFilter) -> DomainResult<Vec<ArticleWithCommentCount>> {
        broken()
    }
}

#[async_trait]
impl ArticleWriteRepository for FailingStore {
    async fn insert(&self, _article: NewArticle) -> DomainResult<Article> {
        broken()
    }

    async fn increment_votes(
        &self,
        _id: ArticleId,
        _delta: VoteDelta,
    ) -> DomainResult<Option<Article>> {
        broken()
    }
}

#[async_trait]
impl CommentRepository for FailingStore {
    async fn list_by_article(&self, _article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        broken()
    }

    async fn insert(&self, _comment: NewComment) -> DomainResult<Comment> {
        broken()
    }
}
