mod config;
mod crawler;
mod errors;


pub use config::CrawlConfig;
pub use crawler::Crawler;
pub use errors::{FetchError, FetchResult};
