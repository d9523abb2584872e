use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
        validation::parse_article_id,
    },
    domain::{article::ArticleReadRepository, comment::CommentRepository},
};
use std::sync::Arc;

pub struct ListCommentsQuery {
    pub article_id: String,
}

pub struct CommentQueryService {
    article_repo: Arc<dyn ArticleReadRepository>,
    comment_repo: Arc<dyn CommentRepository>,
}

impl CommentQueryService {
    pub fn new(
        article_repo: Arc<dyn ArticleReadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            article_repo,
            comment_repo,
        }
    }

    /// A missing article is an error; an article without comments yields an
    /// empty list.
    pub async fn list_comments(
        &self,
        query: ListCommentsQuery,
    ) -> ApplicationResult<Vec<CommentDto>> {
        let article_id = parse_article_id(&query.article_id)?;
        if !self.article_repo.exists(article_id).await? {
            return Err(ApplicationError::article_not_found());
        }

        let comments = self.comment_repo.list_by_article(article_id).await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }
}
