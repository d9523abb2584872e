use crate::domain::article::{Article, ArticleWithCommentCount};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub article_id: i64,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    /// Aggregated at read time; absent on vote-update responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_count: Option<String>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            article_id: article.id.into(),
            title: article.title.into_inner(),
            topic: article.topic.into_inner(),
            author: article.author.into_inner(),
            body: article.body.into_inner(),
            created_at: article.created_at,
            votes: article.votes,
            comment_count: None,
        }
    }
}

impl From<ArticleWithCommentCount> for ArticleDto {
    fn from(value: ArticleWithCommentCount) -> Self {
        Self {
            comment_count: Some(value.comment_count.into_inner()),
            ..Self::from(value.article)
        }
    }
}
