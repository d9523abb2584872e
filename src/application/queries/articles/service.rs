use std::sync::Arc;

use crate::domain::{article::ArticleReadRepository, topic::TopicRepository};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) topic_repo: Arc<dyn TopicRepository>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        topic_repo: Arc<dyn TopicRepository>,
    ) -> Self {
        Self {
            read_repo,
            topic_repo,
        }
    }
}
