use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
        validation::{parse_article_id, validate_comment_payload},
    },
    domain::{
        article::ArticleReadRepository,
        comment::{CommentBody, CommentRepository, NewComment},
        user::Username,
    },
};
use serde_json::Value;
use std::sync::Arc;

pub struct CreateCommentCommand {
    pub article_id: String,
    pub payload: Value,
}

pub struct CommentCommandService {
    article_repo: Arc<dyn ArticleReadRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        article_repo: Arc<dyn ArticleReadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            article_repo,
            comment_repo,
            clock,
        }
    }

    pub async fn create_comment(
        &self,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let article_id = parse_article_id(&command.article_id)?;
        let fields = validate_comment_payload(&command.payload)?;

        if !self.article_repo.exists(article_id).await? {
            return Err(ApplicationError::article_not_found());
        }

        let new_comment = NewComment {
            article_id,
            author: Username::new(fields.author)?,
            body: CommentBody::new(fields.body)?,
            created_at: self.clock.now(),
        };

        // The article can disappear between the check and the insert; the
        // store's foreign key reports that case as not found as well.
        let created = self.comment_repo.insert(new_comment).await?;
        tracing::info!(
            comment_id = i64::from(created.id),
            article_id = %article_id,
            "comment created"
        );
        Ok(created.into())
    }
}
