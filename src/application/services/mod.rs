// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{articles::ArticleCommandService, comments::CommentCommandService},
        ports::time::Clock,
        queries::{
            articles::ArticleQueryService, comments::CommentQueryService,
            topics::TopicQueryService, users::UserQueryService,
        },
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        comment::CommentRepository,
        topic::TopicRepository,
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub topic_queries: Arc<TopicQueryService>,
    pub user_queries: Arc<UserQueryService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub comment_queries: Arc<CommentQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
}

impl ApplicationServices {
    pub fn new(
        topic_repo: Arc<dyn TopicRepository>,
        user_repo: Arc<dyn UserRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let topic_queries = Arc::new(TopicQueryService::new(Arc::clone(&topic_repo)));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&topic_repo),
        ));
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&clock),
        ));

        let comment_queries = Arc::new(CommentQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&comment_repo),
        ));
        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&comment_repo),
            Arc::clone(&clock),
        ));

        Self {
            topic_queries,
            user_queries,
            article_queries,
            article_commands,
            comment_queries,
            comment_commands,
        }
    }
}
