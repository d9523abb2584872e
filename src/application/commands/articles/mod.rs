mod create;
mod service;
mod vote;

pub use create::CreateArticleCommand;
pub use service::ArticleCommandService;
pub use vote::UpdateArticleVotesCommand;
