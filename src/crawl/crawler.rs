use std::collections::HashSet;

use log::{debug, info, warn};

use super::CrawlConfig;
use crate::report::Reporter;
use crate::sources::PageSource;
use crate::stats::StatsTracker;

/// One unit of traversal work: an address plus the hops remaining below it.
#[derive(Debug)]
struct Visit {
    address: String,
    budget: usize,
}

/// Depth-bounded traverser over the link graph reachable from a start
/// address. Fetches through the configured [`PageSource`] and emits one
/// record per fetch attempt through the supplied [`Reporter`].
pub struct Crawler {
    source: Box<dyn PageSource>,
    config: CrawlConfig,
    stats: StatsTracker,
}

impl Crawler {
    pub fn new(source: Box<dyn PageSource>) -> Self {
        info!("Initializing crawler");
        Self {
            source,
            config: CrawlConfig::default(),
            stats: StatsTracker::new(),
        }
    }

    pub fn with_config(mut self, config: CrawlConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &CrawlConfig {
        &self.config
    }

    pub fn stats(&self) -> &StatsTracker {
        &self.stats
    }

    /// Walks the link graph from `start`, depth-first, visiting each page's
    /// links in the order the source returned them. The budget strictly
    /// decreases per hop, so the walk terminates even on cyclic graphs. A
    /// failed fetch is reported and abandons its own subtree only; sibling
    /// branches are unaffected.
    pub async fn crawl(&self, start: &str, reporter: &mut dyn Reporter) {
        info!(
            "Starting crawl at {} (max depth {})",
            start, self.config.max_depth
        );

        let mut visited = HashSet::new();
        let mut pending = vec![Visit {
            address: start.to_string(),
            budget: self.config.max_depth,
        }];

        while let Some(visit) = pending.pop() {
            if visit.budget == 0 {
                debug!("Skipping {} - depth budget exhausted", visit.address);
                continue;
            }

            if !self.config.allow_revisit {
                if visited.contains(&visit.address) {
                    debug!("Skipping {} - already visited", visit.address);
                    self.stats.record_skip();
                    continue;
                }
                visited.insert(visit.address.clone());
            }

            debug!("Visiting {} (budget {})", visit.address, visit.budget);
            match self.source.fetch(&visit.address).await {
                Ok(page) => {
                    self.stats.record_page(page.status, page.links.len());
                    reporter.page(&page);

                    // Reversed push keeps the page's first link on top of
                    // the stack, preserving pre-order.
                    for link in page.links.iter().rev() {
                        pending.push(Visit {
                            address: link.clone(),
                            budget: visit.budget - 1,
                        });
                    }
                }
                Err(err) => {
                    warn!("Fetch failed for {}: {}", visit.address, err);
                    self.stats.record_error();
                    reporter.error(&err.to_string());
                }
            }
        }

        self.stats.finish();
        let stats = self.stats.snapshot();
        info!(
            "Crawl completed: {} pages fetched, {} errors",
            stats.pages_fetched, stats.fetch_errors
        );
    }
}
