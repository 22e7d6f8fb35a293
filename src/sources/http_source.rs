use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use reqwest::{Client, ClientBuilder};
use url::Url;

use super::PageSource;
use crate::crawl::{FetchError, FetchResult};
use crate::page::Page;
use crate::parser::extract_links;

/// What a fetched page reports as its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentMode {
    /// Report an empty string; links are still extracted from the real body.
    #[default]
    Discard,
    /// Report the decoded body as-is.
    Keep,
}

/// Network-backed page source. Issues one plain GET per address: no custom
/// headers, no timeout, no retry; redirects follow the client defaults. A
/// non-success status is a fetch failure.
pub struct HttpSource {
    client: Client,
    content_mode: ContentMode,
}

impl HttpSource {
    pub fn new() -> FetchResult<Self> {
        let client = ClientBuilder::new().build()?;
        Ok(Self {
            client,
            content_mode: ContentMode::default(),
        })
    }

    pub fn with_content_mode(mut self, mode: ContentMode) -> Self {
        self.content_mode = mode;
        self
    }
}

#[async_trait]
impl PageSource for HttpSource {
    async fn fetch(&self, address: &str) -> FetchResult<Page> {
        let url = Url::parse(address).map_err(|source| FetchError::Address {
            address: address.to_string(),
            source,
        })?;

        debug!("Fetching {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        let status = response.status().as_u16();
        let timestamp = Utc::now();
        let body = response.text().await?;

        let links = extract_links(&body);
        debug!("Extracted {} links from {}", links.len(), address);

        let content = match self.content_mode {
            ContentMode::Keep => body,
            ContentMode::Discard => String::new(),
        };

        Ok(Page {
            address: address.to_string(),
            status,
            content,
            links,
            timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn serve(server: &MockServer, route: &str, body: &str) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(body)
                    .insert_header("content-type", "text/html"),
            )
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn fetch_extracts_absolute_links() {
        let server = MockServer::start().await;
        let body = format!(
            r#"<html><body><a href="{0}/one">one</a><a href="/rel">rel</a></body></html>"#,
            server.uri()
        );
        serve(&server, "/", &body).await;

        let source = HttpSource::new().unwrap();
        let page = source.fetch(&server.uri()).await.unwrap();

        assert_eq!(page.status, 200);
        assert_eq!(page.address, server.uri());
        assert_eq!(page.links, vec![format!("{}/one", server.uri())]);
    }

    #[tokio::test]
    async fn content_is_discarded_by_default() {
        let server = MockServer::start().await;
        serve(&server, "/", "<p>hello</p>").await;

        let source = HttpSource::new().unwrap();
        let page = source.fetch(&server.uri()).await.unwrap();

        assert_eq!(page.content, "");
    }

    #[tokio::test]
    async fn keep_mode_reports_the_body() {
        let server = MockServer::start().await;
        let body = r#"<p>hello</p><a href="http://a.example">a</a>"#;
        serve(&server, "/", body).await;

        let source = HttpSource::new()
            .unwrap()
            .with_content_mode(ContentMode::Keep);
        let page = source.fetch(&server.uri()).await.unwrap();

        assert_eq!(page.content, body);
        assert_eq!(page.links, vec!["http://a.example"]);
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
            .mount(&server)
            .await;

        let source = HttpSource::new().unwrap();
        let err = source
            .fetch(&format!("{}/missing", server.uri()))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Http(_)));
    }

    #[tokio::test]
    async fn unparseable_address_is_an_error() {
        let source = HttpSource::new().unwrap();

        let err = source.fetch("httpzzz").await.unwrap_err();

        match err {
            FetchError::Address { address, .. } => assert_eq!(address, "httpzzz"),
            other => panic!("expected address error, got {:?}", other),
        }
    }
}
