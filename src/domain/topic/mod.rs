// src/domain/topic/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{Topic, TopicSlug};
pub use repository::TopicRepository;
