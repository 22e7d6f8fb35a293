use async_trait::async_trait;

use crate::crawl::FetchResult;
use crate::page::Page;

/// Capability for retrieving a resource and the outbound links found on it.
///
/// One external retrieval per call; implementations do not cache and do not
/// retry. Failures are per-address: the caller decides what a failed fetch
/// means for the rest of its work.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch(&self, address: &str) -> FetchResult<Page>;
}
