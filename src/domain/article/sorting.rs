// src/domain/article/sorting.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::topic::TopicSlug;
use std::{fmt, str::FromStr};

/// Article attributes a listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    #[default]
    CreatedAt,
    Votes,
    Title,
    Topic,
    Author,
    CommentCount,
    ArticleId,
}

impl SortColumn {
    pub const ALL: [SortColumn; 7] = [
        SortColumn::CreatedAt,
        SortColumn::Votes,
        SortColumn::Title,
        SortColumn::Topic,
        SortColumn::Author,
        SortColumn::CommentCount,
        SortColumn::ArticleId,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortColumn::CreatedAt => "created_at",
            SortColumn::Votes => "votes",
            SortColumn::Title => "title",
            SortColumn::Topic => "topic",
            SortColumn::Author => "author",
            SortColumn::CommentCount => "comment_count",
            SortColumn::ArticleId => "article_id",
        }
    }
}

impl FromStr for SortColumn {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        SortColumn::ALL
            .into_iter()
            .find(|column| column.as_str() == s)
            .ok_or_else(|| DomainError::Validation(format!("unsupported sort column: {s}")))
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl FromStr for SortOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(SortOrder::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(SortOrder::Desc)
        } else {
            Err(DomainError::Validation(format!("unsupported sort order: {s}")))
        }
    }
}

/// Resolved ordering for an article listing. Rows with equal sort keys are
/// always ordered by ascending article id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArticleSort {
    pub column: SortColumn,
    pub order: SortOrder,
}

#[derive(Debug, Clone, Default)]
pub struct ArticleListFilter {
    pub sort: ArticleSort,
    pub topic: Option<TopicSlug>,
}
