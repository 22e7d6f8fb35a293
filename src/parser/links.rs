use html5ever::tendril::StrTendril;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use log::trace;

/// Anything beginning with this prefix counts as a followable link. This is
/// a textual filter, not a scheme parse: it admits values like "httpzzz".
const LINK_PREFIX: &str = "http";

#[derive(Default)]
struct AnchorSink {
    links: Vec<String>,
}

impl TokenSink for AnchorSink {
    type Handle = ();

    // Only anchor start tags matter; parse-error tokens get the same
    // treatment as end of input.
    fn process_token(&mut self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        if let Token::TagToken(tag) = token {
            if tag.kind == TagKind::StartTag && &*tag.name == "a" {
                if let Some(href) = last_href(&tag) {
                    if href.starts_with(LINK_PREFIX) {
                        self.links.push(href);
                    } else {
                        trace!("Dropping non-http href: {}", href);
                    }
                }
            }
        }
        TokenSinkResult::Continue
    }
}

/// Linear scan over the tag's attribute list; a later `href` wins over an
/// earlier one.
fn last_href(tag: &Tag) -> Option<String> {
    let mut href = None;
    for attr in &tag.attrs {
        if &*attr.name.local == "href" {
            href = Some(attr.value.to_string());
        }
    }
    href
}

/// Extracts followable links from an HTML body by streaming it through the
/// tokenizer; no parse tree is materialized. Links come back in the order
/// their anchor tags appear. A page without anchors yields an empty list,
/// and a page that breaks the tokenizer yields whatever was collected before
/// the break.
pub fn extract_links(body: &str) -> Vec<String> {
    let mut input = BufferQueue::new();
    input.push_back(StrTendril::from(body));

    let mut tokenizer = Tokenizer::new(AnchorSink::default(), TokenizerOpts::default());
    let _ = tokenizer.feed(&mut input);
    tokenizer.end();

    tokenizer.sink.links
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_http_prefixed_hrefs() {
        let body = r#"<a href="http://a">a</a><a href="ftp://b">b</a><a href="httpzzz">c</a>"#;
        assert_eq!(extract_links(body), vec!["http://a", "httpzzz"]);
    }

    #[test]
    fn returns_links_in_document_order() {
        let body = r#"
            <html><body>
                <p><a href="http://third.example/z">z</a></p>
                <div><a href="http://first.example/a">a</a></div>
                <a href="http://second.example/m">m</a>
            </body></html>
        "#;
        assert_eq!(
            extract_links(body),
            vec![
                "http://third.example/z",
                "http://first.example/a",
                "http://second.example/m"
            ]
        );
    }

    #[test]
    fn page_without_anchors_yields_empty_list() {
        assert!(extract_links("<p>no links here</p>").is_empty());
        assert!(extract_links("").is_empty());
    }

    #[test]
    fn anchors_without_href_are_ignored() {
        let body = r#"<a name="top">anchor</a><a href="http://a">a</a>"#;
        assert_eq!(extract_links(body), vec!["http://a"]);
    }

    #[test]
    fn href_on_non_anchor_tags_is_ignored() {
        let body = r#"<link href="http://style.example"><area href="http://map.example"><a href="http://a">a</a>"#;
        assert_eq!(extract_links(body), vec!["http://a"]);
    }

    #[test]
    fn tag_and_attribute_names_are_case_insensitive() {
        let body = r#"<A HREF="http://caps.example">caps</A>"#;
        assert_eq!(extract_links(body), vec!["http://caps.example"]);
    }

    #[test]
    fn relative_links_are_dropped() {
        let body = r#"<a href="/docs">docs</a><a href="https://a.example">a</a>"#;
        assert_eq!(extract_links(body), vec!["https://a.example"]);
    }

    #[test]
    fn truncated_markup_keeps_links_seen_before_the_break() {
        let body = r#"<a href="http://a">a</a><a href="http://b"#;
        assert_eq!(extract_links(body), vec!["http://a"]);
    }
}
