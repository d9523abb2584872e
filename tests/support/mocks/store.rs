// tests/support/mocks/store.rs
use async_trait::async_trait;
use newsroom::domain::article::{
    Article, ArticleId, ArticleListFilter, ArticleReadRepository, ArticleWithCommentCount,
    ArticleWriteRepository, CommentCount, NewArticle, SortColumn, SortOrder, VoteDelta,
};
use newsroom::domain::comment::{Comment, CommentId, CommentRepository, NewComment};
use newsroom::domain::errors::{DomainError, DomainResult};
use newsroom::domain::topic::{Topic, TopicRepository, TopicSlug};
use newsroom::domain::user::{User, UserRepository, Username};
use std::cmp::Ordering;
use std::sync::Mutex;

#[derive(Default)]
struct Tables {
    topics: Vec<Topic>,
    users: Vec<User>,
    articles: Vec<Article>,
    comments: Vec<Comment>,
}

/// メモリ上で外部キー制約を再現するストア
///
/// 各リポジトリ trait を実装し、Postgres 実装と同じ失敗種別を返す。
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_topic(&self, topic: Topic) {
        self.tables.lock().unwrap().topics.push(topic);
    }

    pub fn add_user(&self, user: User) {
        self.tables.lock().unwrap().users.push(user);
    }

    pub fn add_article(&self, article: Article) {
        self.tables.lock().unwrap().articles.push(article);
    }

    pub fn add_comment(&self, comment: Comment) {
        self.tables.lock().unwrap().comments.push(comment);
    }

    pub fn article_votes(&self, id: i64) -> Option<i32> {
        self.tables
            .lock()
            .unwrap()
            .articles
            .iter()
            .find(|a| i64::from(a.id) == id)
            .map(|a| a.votes)
    }

    pub fn comment_total(&self) -> usize {
        self.tables.lock().unwrap().comments.len()
    }
}

impl Tables {
    fn with_count(&self, article: &Article) -> ArticleWithCommentCount {
        let count = self
            .comments
            .iter()
            .filter(|c| c.article_id == article.id)
            .count();
        ArticleWithCommentCount {
            article: article.clone(),
            comment_count: CommentCount::from(count),
        }
    }

    fn user_exists(&self, username: &Username) -> bool {
        self.users.iter().any(|u| &u.username == username)
    }

    fn next_article_id(&self) -> i64 {
        self.articles.iter().map(|a| i64::from(a.id)).max().unwrap_or(0) + 1
    }

    fn next_comment_id(&self) -> i64 {
        self.comments.iter().map(|c| i64::from(c.id)).max().unwrap_or(0) + 1
    }
}

fn compare(column: SortColumn, a: &ArticleWithCommentCount, b: &ArticleWithCommentCount) -> Ordering {
    let (x, y) = (&a.article, &b.article);
    match column {
        SortColumn::CreatedAt => x.created_at.cmp(&y.created_at),
        SortColumn::Votes => x.votes.cmp(&y.votes),
        SortColumn::Title => x.title.as_str().cmp(y.title.as_str()),
        SortColumn::Topic => x.topic.as_str().cmp(y.topic.as_str()),
        SortColumn::Author => x.author.as_str().cmp(y.author.as_str()),
        SortColumn::CommentCount => {
            let count = |v: &ArticleWithCommentCount| v.comment_count.as_str().parse::<u64>().unwrap();
            count(a).cmp(&count(b))
        }
        SortColumn::ArticleId => x.id.cmp(&y.id),
    }
}

#[async_trait]
impl TopicRepository for InMemoryStore {
    async fn list(&self) -> DomainResult<Vec<Topic>> {
        let mut topics = self.tables.lock().unwrap().topics.clone();
        topics.sort_by(|a, b| a.slug.as_str().cmp(b.slug.as_str()));
        Ok(topics)
    }

    async fn find_by_slug(&self, slug: &TopicSlug) -> DomainResult<Option<Topic>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.topics.iter().find(|t| &t.slug == slug).cloned())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn list(&self) -> DomainResult<Vec<User>> {
        let mut users = self.tables.lock().unwrap().users.clone();
        users.sort_by(|a, b| a.username.as_str().cmp(b.username.as_str()));
        Ok(users)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|u| &u.username == username).cloned())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleWithCommentCount>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .articles
            .iter()
            .find(|a| a.id == id)
            .map(|a| tables.with_count(a)))
    }

    async fn exists(&self, id: ArticleId) -> DomainResult<bool> {
        Ok(self.tables.lock().unwrap().articles.iter().any(|a| a.id == id))
    }

    async fn list(&self, filter: &ArticleListFilter) -> DomainResult<Vec<ArticleWithCommentCount>> {
        let tables = self.tables.lock().unwrap();
        let mut rows: Vec<ArticleWithCommentCount> = tables
            .articles
            .iter()
            .filter(|a| filter.topic.as_ref().is_none_or(|t| &a.topic == t))
            .map(|a| tables.with_count(a))
            .collect();

        let sort = filter.sort;
        rows.sort_by(|a, b| {
            let primary = compare(sort.column, a, b);
            let primary = match sort.order {
                SortOrder::Asc => primary,
                SortOrder::Desc => primary.reverse(),
            };
            primary.then_with(|| a.article.id.cmp(&b.article.id))
        });
        Ok(rows)
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.topics.iter().any(|t| t.slug == article.topic) {
            return Err(DomainError::NotFound("Topic not found".into()));
        }
        if !tables.user_exists(&article.author) {
            return Err(DomainError::NotFound("User not found".into()));
        }

        let created = Article {
            id: ArticleId::new(tables.next_article_id())?,
            title: article.title,
            topic: article.topic,
            author: article.author,
            body: article.body,
            created_at: article.created_at,
            votes: 0,
        };
        tables.articles.push(created.clone());
        Ok(created)
    }

    async fn increment_votes(
        &self,
        id: ArticleId,
        delta: VoteDelta,
    ) -> DomainResult<Option<Article>> {
        let mut tables = self.tables.lock().unwrap();
        Ok(tables.articles.iter_mut().find(|a| a.id == id).map(|a| {
            a.votes += delta.get();
            a.clone()
        }))
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        let tables = self.tables.lock().unwrap();
        let mut comments: Vec<Comment> = tables
            .comments
            .iter()
            .filter(|c| c.article_id == article_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| i64::from(a.id).cmp(&i64::from(b.id)))
        });
        Ok(comments)
    }

    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.articles.iter().any(|a| a.id == comment.article_id) {
            return Err(DomainError::NotFound("Article not found".into()));
        }
        if !tables.user_exists(&comment.author) {
            return Err(DomainError::NotFound("User not found".into()));
        }

        let created = Comment {
            id: CommentId::new(tables.next_comment_id())?,
            body: comment.body,
            article_id: comment.article_id,
            author: comment.author,
            votes: 0,
            created_at: comment.created_at,
        };
        tables.comments.push(created.clone());
        Ok(created)
    }
}
