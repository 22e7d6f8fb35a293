pub mod crawl;
pub mod page;
pub mod parser;
pub mod report;
pub mod sources;
pub mod stats;

pub use crawl::{CrawlConfig, Crawler, FetchError, FetchResult};
pub use page::Page;
pub use parser::extract_links;
pub use report::{CrawlEvent, JsonReporter, RecordingReporter, Reporter, TextReporter};
pub use sources::{ContentMode, HttpSource, MockSource, PageSource};
pub use stats::StatsTracker;
