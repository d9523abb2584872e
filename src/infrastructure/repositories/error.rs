use crate::domain::errors::DomainError;

const CNT_ARTICLE_TOPIC: &str = "articles_topic_fkey";
const CNT_ARTICLE_AUTHOR: &str = "articles_author_fkey";
const CNT_COMMENT_ARTICLE: &str = "comments_article_id_fkey";
const CNT_COMMENT_AUTHOR: &str = "comments_author_fkey";

const SQLSTATE_FOREIGN_KEY: &str = "23503";
const SQLSTATE_NOT_NULL: &str = "23502";
const SQLSTATE_INVALID_TEXT: &str = "22P02";
const SQLSTATE_OUT_OF_RANGE: &str = "22003";

/// A stored row that fails value-object checks is a server-side data fault,
/// not a bad request.
pub(crate) fn stored_row(err: DomainError) -> DomainError {
    match err {
        DomainError::Validation(msg) => {
            DomainError::Persistence(format!("stored row rejected: {msg}"))
        }
        other => other,
    }
}

/// Reclassify store errors so store-specific text never reaches clients.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                match constraint {
                    CNT_ARTICLE_TOPIC => return DomainError::NotFound("Topic not found".into()),
                    CNT_COMMENT_ARTICLE => {
                        return DomainError::NotFound("Article not found".into());
                    }
                    CNT_ARTICLE_AUTHOR | CNT_COMMENT_AUTHOR => {
                        return DomainError::NotFound("User not found".into());
                    }
                    _ => {}
                }
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    SQLSTATE_FOREIGN_KEY => {
                        tracing::warn!(
                            constraint = db_err.constraint().unwrap_or_default(),
                            "foreign key violation without a resource mapping"
                        );
                        return DomainError::NotFound("Referenced resource not found".into());
                    }
                    SQLSTATE_NOT_NULL | SQLSTATE_INVALID_TEXT | SQLSTATE_OUT_OF_RANGE => {
                        return DomainError::Validation(db_err.message().to_string());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
