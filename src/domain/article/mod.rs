// src/domain/article/mod.rs
pub mod entity;
pub mod repository;
pub mod sorting;
pub mod value_objects;

pub use entity::{Article, ArticleWithCommentCount, NewArticle};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use sorting::{ArticleListFilter, ArticleSort, SortColumn, SortOrder};
pub use value_objects::{ArticleBody, ArticleId, ArticleTitle, CommentCount, VoteDelta};
