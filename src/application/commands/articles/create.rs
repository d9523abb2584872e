use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        validation::validate_article_payload,
    },
    domain::{
        article::{ArticleBody, ArticleTitle, NewArticle},
        topic::TopicSlug,
        user::Username,
    },
};
use serde_json::Value;

pub struct CreateArticleCommand {
    pub payload: Value,
}

impl ArticleCommandService {
    /// Inserts the article, then reads it back so the response carries the
    /// same shape (including `comment_count`) as the read endpoints.
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let fields = validate_article_payload(&command.payload)?;

        let new_article = NewArticle {
            title: ArticleTitle::new(fields.title)?,
            topic: TopicSlug::new(fields.topic)?,
            author: Username::new(fields.author)?,
            body: ArticleBody::new(fields.body)?,
            created_at: self.clock.now(),
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(article_id = %created.id, topic = %created.topic, "article created");

        let article = self
            .read_repo
            .find_by_id(created.id)
            .await?
            .ok_or_else(ApplicationError::article_not_found)?;
        Ok(article.into())
    }
}
