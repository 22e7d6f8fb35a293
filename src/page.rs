use chrono::{DateTime, Utc};

/// A successfully retrieved resource together with the outbound links
/// discovered on it.
///
/// Addresses are opaque strings; nothing outside the concrete source
/// interprets them.
#[derive(Debug, Clone)]
pub struct Page {
    pub address: String,
    pub status: u16,
    /// Page body, or an empty string when the source discards bodies.
    pub content: String,
    /// Outbound links in the order they appear on the page.
    pub links: Vec<String>,
    pub timestamp: DateTime<Utc>,
}
