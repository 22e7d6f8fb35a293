use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use super::PageSource;
use crate::crawl::{FetchError, FetchResult};
use crate::page::Page;

/// Canned fetch result for a single address.
#[derive(Debug, Clone)]
pub struct MockPage {
    pub content: String,
    pub links: Vec<String>,
}

/// Deterministic in-memory page source over a fixture link graph. Addresses
/// missing from the graph fail the way an unreachable resource would. The
/// fetch counter is shared across clones so callers can hand one clone to a
/// crawler and keep another for assertions.
#[derive(Clone, Default)]
pub struct MockSource {
    pages: HashMap<String, MockPage>,
    fetch_count: Arc<AtomicUsize>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, address: &str, content: &str, links: &[&str]) -> Self {
        self.pages.insert(
            address.to_string(),
            MockPage {
                content: content.to_string(),
                links: links.iter().map(|link| link.to_string()).collect(),
            },
        );
        self
    }

    /// Number of fetch calls made so far, successes and failures both.
    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageSource for MockSource {
    async fn fetch(&self, address: &str) -> FetchResult<Page> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);

        match self.pages.get(address) {
            Some(page) => Ok(Page {
                address: address.to_string(),
                status: 200,
                content: page.content.clone(),
                links: page.links.clone(),
                timestamp: Utc::now(),
            }),
            None => Err(FetchError::NotFound(address.to_string())),
        }
    }
}
