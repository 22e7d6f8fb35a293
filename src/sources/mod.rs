pub mod http_source;
pub mod mock_source;

mod source;

pub use http_source::{ContentMode, HttpSource};
pub use mock_source::MockSource;
pub use source::PageSource;
