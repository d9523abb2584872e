use super::ArticleQueryService;
use crate::application::{
    dto::ArticleDto,
    error::{ApplicationError, ApplicationResult},
    validation::parse_article_id,
};

pub struct GetArticleByIdQuery {
    /// Raw path segment; validated before the store is touched.
    pub id: String,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDto> {
        let id = parse_article_id(&query.id)?;
        tracing::debug!(article_id = %id, "fetching article");
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(ApplicationError::article_not_found)?;
        Ok(article.into())
    }
}
