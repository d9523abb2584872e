use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        validation::resolve_sort,
    },
    domain::{article::ArticleListFilter, topic::TopicSlug},
};

#[derive(Debug, Default)]
pub struct ListArticlesQuery {
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub topic: Option<String>,
}

impl ArticleQueryService {
    /// Lists articles with their comment counts. An unknown topic filter is
    /// reported as not found rather than yielding an empty list.
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let sort = resolve_sort(query.sort_by.as_deref(), query.order.as_deref())?;

        let topic = match query.topic {
            Some(raw) => {
                let slug = TopicSlug::new(raw).map_err(|_| ApplicationError::topic_not_found())?;
                self.topic_repo
                    .find_by_slug(&slug)
                    .await?
                    .ok_or_else(ApplicationError::topic_not_found)?;
                Some(slug)
            }
            None => None,
        };

        tracing::debug!(
            sort_by = %sort.column,
            order = sort.order.as_sql(),
            topic = topic.as_ref().map(|t| t.as_str()),
            "listing articles"
        );

        let filter = ArticleListFilter { sort, topic };
        let records = self.read_repo.list(&filter).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
