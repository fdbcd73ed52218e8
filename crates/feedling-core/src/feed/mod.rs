pub mod fetcher;
pub mod models;
pub mod parser;
pub mod sanitizer;

pub use fetcher::Fetcher;
pub use models::{FeedDocument, FeedEntry, FeedItem};
pub use parser::parse;
pub use sanitizer::clean;
