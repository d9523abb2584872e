// src/infrastructure/repositories/postgres_article.rs
use super::{map_sqlx, stored_row};
use crate::domain::article::{
    Article, ArticleBody, ArticleId, ArticleListFilter, ArticleReadRepository, ArticleSort,
    ArticleTitle, ArticleWithCommentCount, ArticleWriteRepository, CommentCount, NewArticle,
    SortColumn, VoteDelta,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::topic::TopicSlug;
use crate::domain::user::Username;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str = "article_id, title, topic, author, body, created_at, votes";

const ARTICLE_WITH_COUNT_SELECT: &str = "SELECT a.article_id, a.title, a.topic, a.author, a.body, a.created_at, a.votes, \
     COUNT(c.comment_id)::TEXT AS comment_count \
     FROM articles a LEFT JOIN comments c ON c.article_id = a.article_id";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    article_id: i64,
    title: String,
    topic: String,
    author: String,
    body: String,
    created_at: DateTime<Utc>,
    votes: i32,
}

#[derive(Debug, FromRow)]
struct ArticleWithCountRow {
    #[sqlx(flatten)]
    article: ArticleRow,
    comment_count: String,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.article_id).map_err(stored_row)?,
            title: ArticleTitle::new(row.title).map_err(stored_row)?,
            topic: TopicSlug::new(row.topic).map_err(stored_row)?,
            author: Username::new(row.author).map_err(stored_row)?,
            body: ArticleBody::new(row.body).map_err(stored_row)?,
            created_at: row.created_at,
            votes: row.votes,
        })
    }
}

impl TryFrom<ArticleWithCountRow> for ArticleWithCommentCount {
    type Error = DomainError;

    fn try_from(row: ArticleWithCountRow) -> Result<Self, Self::Error> {
        Ok(ArticleWithCommentCount {
            article: Article::try_from(row.article)?,
            comment_count: CommentCount::new(row.comment_count).map_err(stored_row)?,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            topic,
            author,
            body,
            created_at,
        } = article;

        let sql = format!(
            "INSERT INTO articles (title, topic, author, body, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(title.as_str())
            .bind(topic.as_str())
            .bind(author.as_str())
            .bind(body.as_str())
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn increment_votes(
        &self,
        id: ArticleId,
        delta: VoteDelta,
    ) -> DomainResult<Option<Article>> {
        let sql = format!(
            "UPDATE articles SET votes = votes + $1 WHERE article_id = $2 RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(delta.get())
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }
}

/// Fixed SQL expression for each sortable column; request text never
/// reaches the query.
fn sort_expression(column: SortColumn) -> &'static str {
    match column {
        SortColumn::CreatedAt => "a.created_at",
        SortColumn::Votes => "a.votes",
        SortColumn::Title => "a.title",
        SortColumn::Topic => "a.topic",
        SortColumn::Author => "a.author",
        SortColumn::CommentCount => "COUNT(c.comment_id)",
        SortColumn::ArticleId => "a.article_id",
    }
}

impl PostgresArticleReadRepository {
    fn build_list_query(filter: &ArticleListFilter) -> QueryBuilder<'_, Postgres> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(ARTICLE_WITH_COUNT_SELECT);

        if let Some(topic) = &filter.topic {
            builder.push(" WHERE a.topic = ");
            builder.push_bind(topic.as_str());
        }

        builder.push(" GROUP BY a.article_id");
        Self::apply_ordering(&mut builder, filter.sort);
        builder
    }

    fn apply_ordering(builder: &mut QueryBuilder<'_, Postgres>, sort: ArticleSort) {
        builder.push(" ORDER BY ");
        builder.push(sort_expression(sort.column));
        builder.push(" ");
        builder.push(sort.order.as_sql());
        if sort.column != SortColumn::ArticleId {
            builder.push(", a.article_id ASC");
        }
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleWithCommentCount>> {
        let sql = format!("{ARTICLE_WITH_COUNT_SELECT} WHERE a.article_id = $1 GROUP BY a.article_id");
        let row = sqlx::query_as::<_, ArticleWithCountRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(ArticleWithCommentCount::try_from).transpose()
    }

    async fn exists(&self, id: ArticleId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM articles WHERE article_id = $1)")
            .bind(i64::from(id))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn list(&self, filter: &ArticleListFilter) -> DomainResult<Vec<ArticleWithCommentCount>> {
        let mut builder = Self::build_list_query(filter);
        let rows = builder
            .build_query_as::<ArticleWithCountRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter()
            .map(ArticleWithCommentCount::try_from)
            .collect()
    }
}
