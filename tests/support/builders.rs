// tests/support/builders.rs
use chrono::{DateTime, TimeZone, Utc};
use newsroom::domain::article::*;
use newsroom::domain::comment::{Comment, CommentBody, CommentId};
use newsroom::domain::topic::{Topic, TopicSlug};
use newsroom::domain::user::{User, Username};

use super::mocks::InMemoryStore;

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
}

pub fn topic(slug: &str, description: &str) -> Topic {
    Topic {
        slug: TopicSlug::new(slug).unwrap(),
        description: description.into(),
    }
}

pub fn user(username: &str, name: &str) -> User {
    User {
        username: Username::new(username).unwrap(),
        name: name.into(),
        avatar_url: Some(format!("https://avatars.example/{username}.png")),
    }
}

pub struct ArticleBuilder {
    id: i64,
    title: String,
    topic: String,
    author: String,
    body: String,
    created_at: DateTime<Utc>,
    votes: i32,
}

impl ArticleBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: format!("Article {id}"),
            topic: "mitch".into(),
            author: "butter_bridge".into(),
            body: "I find this existence challenging".into(),
            created_at: at(2020, 1, 1, 0, 0),
            votes: 0,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn votes(mut self, votes: i32) -> Self {
        self.votes = votes;
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            topic: TopicSlug::new(self.topic).unwrap(),
            author: Username::new(self.author).unwrap(),
            body: ArticleBody::new(self.body).unwrap(),
            created_at: self.created_at,
            votes: self.votes,
        }
    }
}

pub fn comment(id: i64, article_id: i64, author: &str, created_at: DateTime<Utc>) -> Comment {
    Comment {
        id: CommentId::new(id).unwrap(),
        body: CommentBody::new(format!("comment {id}")).unwrap(),
        article_id: ArticleId::new(article_id).unwrap(),
        author: Username::new(author).unwrap(),
        votes: 0,
        created_at,
    }
}

/// テスト用の共通データ
///
/// - topics: cats, mitch, paper (paper には記事がない)
/// - articles 1..=6、article 2 にはコメントがない
/// - comments: article 1 に 3 件、article 5 に 2 件、article 3 に 1 件
pub fn seeded_store() -> InMemoryStore {
    let store = InMemoryStore::new();

    store.add_topic(topic("mitch", "The man, the Mitch, the legend"));
    store.add_topic(topic("cats", "Not dogs"));
    store.add_topic(topic("paper", "what books are made of"));

    store.add_user(user("butter_bridge", "jonny"));
    store.add_user(user("icellusedkars", "sam"));
    store.add_user(user("rogersop", "paul"));
    store.add_user(user("lurker", "do_nothing"));

    store.add_article(
        ArticleBuilder::new(1)
            .title("Living in the shadow of a great man")
            .created_at(at(2020, 7, 9, 20, 11))
            .votes(100)
            .build(),
    );
    store.add_article(
        ArticleBuilder::new(2)
            .title("Sony Vaio; or, The Laptop")
            .author("icellusedkars")
            .created_at(at(2020, 10, 16, 5, 3))
            .build(),
    );
    store.add_article(
        ArticleBuilder::new(3)
            .title("Eight pug gifs that remind me of mitch")
            .author("icellusedkars")
            .created_at(at(2020, 11, 3, 9, 12))
            .build(),
    );
    store.add_article(
        ArticleBuilder::new(4)
            .title("Student SUES Mitch!")
            .author("rogersop")
            .created_at(at(2020, 5, 6, 1, 14))
            .build(),
    );
    store.add_article(
        ArticleBuilder::new(5)
            .title("UNCOVERED: catspiracy to bring down democracy")
            .topic("cats")
            .author("rogersop")
            .created_at(at(2020, 8, 3, 13, 14))
            .build(),
    );
    store.add_article(
        ArticleBuilder::new(6)
            .title("A")
            .author("icellusedkars")
            .created_at(at(2020, 10, 18, 1, 0))
            .votes(5)
            .build(),
    );

    store.add_comment(comment(1, 1, "butter_bridge", at(2020, 4, 6, 12, 17)));
    store.add_comment(comment(2, 1, "icellusedkars", at(2020, 10, 31, 3, 3)));
    store.add_comment(comment(3, 1, "rogersop", at(2020, 3, 1, 1, 13)));
    store.add_comment(comment(4, 5, "icellusedkars", at(2020, 6, 9, 5, 0)));
    store.add_comment(comment(5, 5, "butter_bridge", at(2020, 6, 9, 5, 0)));
    store.add_comment(comment(6, 3, "lurker", at(2020, 9, 19, 23, 10)));

    store
}
