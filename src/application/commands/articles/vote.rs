use super::ArticleCommandService;
use crate::application::{
    dto::ArticleDto,
    error::{ApplicationError, ApplicationResult},
    validation::{parse_article_id, validate_vote_delta},
};
use serde_json::Value;

pub struct UpdateArticleVotesCommand {
    pub id: String,
    pub payload: Value,
}

impl ArticleCommandService {
    /// Applies `inc_votes` atomically in the store. The returned article has
    /// no `comment_count` since comments are not re-joined on this path.
    pub async fn update_votes(
        &self,
        command: UpdateArticleVotesCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = parse_article_id(&command.id)?;
        let delta = validate_vote_delta(&command.payload)?;

        tracing::debug!(article_id = %id, delta = delta.get(), "applying vote delta");
        let article = self
            .write_repo
            .increment_votes(id, delta)
            .await?
            .ok_or_else(ApplicationError::article_not_found)?;
        Ok(article.into())
    }
}
