// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleBody, ArticleId, ArticleTitle, CommentCount};
use crate::domain::topic::TopicSlug;
use crate::domain::user::Username;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub topic: TopicSlug,
    pub author: Username,
    pub body: ArticleBody,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
}

/// An article as returned by read paths, joined with its aggregated
/// comment count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleWithCommentCount {
    pub article: Article,
    pub comment_count: CommentCount,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub topic: TopicSlug,
    pub author: Username,
    pub body: ArticleBody,
    pub created_at: DateTime<Utc>,
}
