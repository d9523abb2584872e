// src/application/validation.rs
//! Pure input checks run before any store access.
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::{ArticleId, ArticleSort, SortColumn, SortOrder, VoteDelta},
};
use serde_json::{Map, Value};

/// True only for a clean positive integer literal that fits an `i64`.
pub fn is_valid_id(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|b| b.is_ascii_digit())
        && value.parse::<i64>().is_ok_and(|id| id > 0)
}

pub fn is_allowed_sort_column(name: &str) -> bool {
    name.parse::<SortColumn>().is_ok()
}

pub fn is_allowed_order(value: &str) -> bool {
    value.parse::<SortOrder>().is_ok()
}

pub fn parse_article_id(raw: &str) -> ApplicationResult<ArticleId> {
    if !is_valid_id(raw) {
        return Err(ApplicationError::InvalidInput);
    }
    let id = raw.parse::<i64>().map_err(|_| ApplicationError::InvalidInput)?;
    Ok(ArticleId::new(id)?)
}

/// Resolve optional `sort_by` / `order` tokens, defaulting to newest first.
pub fn resolve_sort(sort_by: Option<&str>, order: Option<&str>) -> ApplicationResult<ArticleSort> {
    let column = match sort_by {
        Some(name) => name
            .parse::<SortColumn>()
            .map_err(|_| ApplicationError::InvalidInput)?,
        None => SortColumn::default(),
    };
    let order = match order {
        Some(value) => value
            .parse::<SortOrder>()
            .map_err(|_| ApplicationError::InvalidInput)?,
        None => SortOrder::default(),
    };
    Ok(ArticleSort { column, order })
}

/// `inc_votes` must be a JSON integer within the vote column's range.
pub fn validate_vote_delta(payload: &Value) -> ApplicationResult<VoteDelta> {
    let delta = payload
        .get("inc_votes")
        .and_then(Value::as_i64)
        .ok_or(ApplicationError::InvalidInput)?;
    let delta = i32::try_from(delta).map_err(|_| ApplicationError::InvalidInput)?;
    Ok(VoteDelta::new(delta))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentFields {
    pub author: String,
    pub body: String,
}

/// Accepts `username` (or its alias `author`) and `body`.
pub fn validate_comment_payload(payload: &Value) -> ApplicationResult<CommentFields> {
    let object = payload.as_object().ok_or(ApplicationError::InvalidPostInput)?;
    let author_key = if object.contains_key("username") {
        "username"
    } else {
        "author"
    };
    let [author, body] = required_strings(object, [author_key, "body"])?;
    Ok(CommentFields { author, body })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleFields {
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
}

pub fn validate_article_payload(payload: &Value) -> ApplicationResult<ArticleFields> {
    let object = payload.as_object().ok_or(ApplicationError::InvalidPostInput)?;
    let [title, topic, author, body] =
        required_strings(object, ["title", "topic", "author", "body"])?;
    Ok(ArticleFields {
        title,
        topic,
        author,
        body,
    })
}

/// Missing fields are reported before mistyped ones: a payload lacking any
/// required key is `InvalidPostInput` even if another key has the wrong type.
fn required_strings<const N: usize>(
    object: &Map<String, Value>,
    keys: [&str; N],
) -> ApplicationResult<[String; N]> {
    let is_missing = |value: Option<&Value>| match value {
        None | Some(Value::Null) => true,
        Some(Value::String(text)) => text.trim().is_empty(),
        Some(_) => false,
    };
    if keys.iter().any(|key| is_missing(object.get(*key))) {
        return Err(ApplicationError::InvalidPostInput);
    }

    let mut values = Vec::with_capacity(N);
    for key in keys {
        match object.get(key) {
            Some(Value::String(text)) => values.push(text.clone()),
            _ => return Err(ApplicationError::InvalidPostDataType),
        }
    }
    values
        .try_into()
        .map_err(|_| ApplicationError::unhandled("payload field count mismatch"))
}
