use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

/// Counters accumulated over a single crawl.
#[derive(Debug, Clone, Serialize)]
pub struct CrawlStats {
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub pages_fetched: usize,
    pub fetch_errors: usize,
    pub links_discovered: usize,
    pub revisits_skipped: usize,
    pub status_codes: HashMap<u16, usize>,
}

#[derive(Debug, Clone)]
pub struct StatsTracker {
    stats: Arc<RwLock<CrawlStats>>,
}

impl StatsTracker {
    pub fn new() -> Self {
        Self {
            stats: Arc::new(RwLock::new(CrawlStats {
                start_time: Utc::now(),
                end_time: None,
                pages_fetched: 0,
                fetch_errors: 0,
                links_discovered: 0,
                revisits_skipped: 0,
                status_codes: HashMap::new(),
            })),
        }
    }

    pub fn record_page(&self, status: u16, links: usize) {
        let mut stats = self.stats.write();
        stats.pages_fetched += 1;
        stats.links_discovered += links;
        *stats.status_codes.entry(status).or_insert(0) += 1;
    }

    pub fn record_error(&self) {
        self.stats.write().fetch_errors += 1;
    }

    pub fn record_skip(&self) {
        self.stats.write().revisits_skipped += 1;
    }

    pub fn finish(&self) {
        self.stats.write().end_time = Some(Utc::now());
    }

    pub fn snapshot(&self) -> CrawlStats {
        self.stats.read().clone()
    }

    pub fn print_summary(&self) {
        let stats = self.stats.read();
        let duration = stats
            .end_time
            .unwrap_or_else(Utc::now)
            .signed_duration_since(stats.start_time);

        println!("\nCrawl Statistics:");
        println!("=================");
        println!("Duration: {} ms", duration.num_milliseconds());
        println!("Pages Fetched: {}", stats.pages_fetched);
        println!("Fetch Errors: {}", stats.fetch_errors);
        println!("Links Discovered: {}", stats.links_discovered);
        if stats.revisits_skipped > 0 {
            println!("Revisits Skipped: {}", stats.revisits_skipped);
        }

        if !stats.status_codes.is_empty() {
            println!("\nStatus Codes:");
            for (code, count) in &stats.status_codes {
                println!("  {}: {}", code, count);
            }
        }
    }
}

impl Default for StatsTracker {
    fn default() -> Self {
        Self::new()
    }
}
