use std::io::{self, Stdout, Write};

use chrono::{DateTime, Utc};
use log::warn;
use serde::Serialize;

use crate::page::Page;

/// One emission of a crawl, in traversal order: a fetched page or a failed
/// fetch.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CrawlEvent {
    Found {
        address: String,
        status: u16,
        content: String,
        links: Vec<String>,
        timestamp: DateTime<Utc>,
    },
    Failed {
        message: String,
    },
}

impl CrawlEvent {
    fn found(page: &Page) -> Self {
        CrawlEvent::Found {
            address: page.address.clone(),
            status: page.status,
            content: page.content.clone(),
            links: page.links.clone(),
            timestamp: page.timestamp,
        }
    }
}

/// Sink for crawl emissions: exactly one call per fetch attempt.
pub trait Reporter: Send {
    fn page(&mut self, page: &Page);
    fn error(&mut self, message: &str);
}

/// Line-oriented text output: `found: <address> "<content>"` per page, the
/// error's own description per failure.
pub struct TextReporter<W: Write = Stdout> {
    out: W,
}

impl TextReporter {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TextReporter<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> Reporter for TextReporter<W> {
    fn page(&mut self, page: &Page) {
        let _ = writeln!(self.out, "found: {} {:?}", page.address, page.content);
    }

    fn error(&mut self, message: &str) {
        let _ = writeln!(self.out, "{}", message);
    }
}

/// One serialized [`CrawlEvent`] per line.
pub struct JsonReporter<W: Write = Stdout> {
    out: W,
}

impl JsonReporter {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> JsonReporter<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, event: &CrawlEvent) {
        match serde_json::to_string(event) {
            Ok(line) => {
                let _ = writeln!(self.out, "{}", line);
            }
            Err(err) => warn!("Failed to serialize crawl event: {}", err),
        }
    }
}

impl<W: Write + Send> Reporter for JsonReporter<W> {
    fn page(&mut self, page: &Page) {
        self.emit(&CrawlEvent::found(page));
    }

    fn error(&mut self, message: &str) {
        self.emit(&CrawlEvent::Failed {
            message: message.to_string(),
        });
    }
}

/// Captures events in memory; tests assert on emission order and content.
#[derive(Default)]
pub struct RecordingReporter {
    pub events: Vec<CrawlEvent>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reporter for RecordingReporter {
    fn page(&mut self, page: &Page) {
        self.events.push(CrawlEvent::found(page));
    }

    fn error(&mut self, message: &str) {
        self.events.push(CrawlEvent::Failed {
            message: message.to_string(),
        });
    }
}
