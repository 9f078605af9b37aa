use log::debug;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use scraper::{Html, Selector};

use crate::error::{Error, Result};

/// Selector of the download button on a MediaFire landing page.
pub const MEDIAFIRE_SELECTOR: &str = ".input.popsok";

/// Resolves a landing page into a direct download URL.
pub trait LinkExtractor {
    fn extract(&self, page_url: &str) -> Result<String>;
}

/// Fetches a landing page and reads the `href` of the first element matching
/// a CSS selector.
pub struct SelectorExtractor {
    client: Client,
    selector: Selector,
}

impl SelectorExtractor {
    pub fn new(client: Client, selector: &str) -> Result<Self> {
        let parsed = Selector::parse(selector).map_err(|err| Error::Selector {
            selector: selector.to_string(),
            reason: err.to_string(),
        })?;
        Ok(Self {
            client,
            selector: parsed,
        })
    }

    pub fn mediafire(client: Client) -> Result<Self> {
        Self::new(client, MEDIAFIRE_SELECTOR)
    }

    fn find_link(&self, html: &str) -> Option<String> {
        let document = Html::parse_document(html);
        document
            .select(&self.selector)
            .next()
            .and_then(|element| element.value().attr("href"))
            .map(str::to_string)
    }
}

impl LinkExtractor for SelectorExtractor {
    fn extract(&self, page_url: &str) -> Result<String> {
        debug!("GET {page_url}");
        let response = self.client.get(page_url).send()?;
        if response.status() != StatusCode::OK {
            return Err(Error::status(response.status()));
        }
        let body = response.text().map_err(Error::Parse)?;
        self.find_link(&body).ok_or(Error::LinkNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::utils::build_client;
    use crate::test_helpers::{refused_url, serve_once};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const LANDING_PAGE: &str = r#"<html><body>
        <a class="input" href="https://wrong.example/a">nope</a>
        <a class="input popsok" aria-label="Download file"
           href="https://download2390.mediafire.com/x1y2/abc/My File.zip">Download (12MB)</a>
        </body></html>"#;

    fn extractor() -> SelectorExtractor {
        SelectorExtractor::mediafire(build_client().unwrap()).unwrap()
    }

    async fn extract_blocking(url: String) -> Result<String> {
        tokio::task::spawn_blocking(move || extractor().extract(&url))
            .await
            .unwrap()
    }

    #[test]
    fn finds_href_with_both_classes() {
        let link = extractor().find_link(LANDING_PAGE);
        assert_eq!(
            link.as_deref(),
            Some("https://download2390.mediafire.com/x1y2/abc/My File.zip")
        );
    }

    #[test]
    fn href_is_returned_untrimmed() {
        let html = r#"<a class="popsok input" href="  http://h/f.bin ">x</a>"#;
        assert_eq!(extractor().find_link(html).as_deref(), Some("  http://h/f.bin "));
    }

    #[test]
    fn single_class_does_not_match() {
        let html = r#"<a class="popsok" href="http://h/f.bin">x</a>"#;
        assert_eq!(extractor().find_link(html), None);
    }

    #[test]
    fn matching_element_without_href_is_not_found() {
        let html = r#"<div class="input popsok">no link</div>"#;
        assert_eq!(extractor().find_link(html), None);
    }

    #[test]
    fn invalid_selector_is_rejected() {
        let err = SelectorExtractor::new(build_client().unwrap(), "..[").err().unwrap();
        assert!(matches!(err, Error::Selector { .. }));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn extracts_link_from_served_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/file/abc/My_File.zip/file"))
            .respond_with(ResponseTemplate::new(200).set_body_string(LANDING_PAGE))
            .expect(1)
            .mount(&server)
            .await;

        let url = format!("{}/file/abc/My_File.zip/file", server.uri());
        let link = extract_blocking(url).await.unwrap();
        assert_eq!(link, "https://download2390.mediafire.com/x1y2/abc/My File.zip");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn page_without_button_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string("<html><p>File removed</p></html>"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let err = extract_blocking(format!("{}/file/gone", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::LinkNotFound));
        assert_eq!(err.to_string(), "downloadable URL not found");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn non_200_landing_page_is_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string(LANDING_PAGE))
            .mount(&server)
            .await;

        let err = extract_blocking(format!("{}/file/missing", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Status { code: 404, .. }));
    }

    #[test]
    fn unreachable_host_is_request_error() {
        let err = extractor().extract(&refused_url()).unwrap_err();
        assert!(matches!(err, Error::Request(_)));
    }

    #[test]
    fn truncated_landing_page_is_parse_error() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: 500\r\nConnection: close\r\n\r\n",
            b"<html><body><a class=\"input popsok\"",
        );

        let err = extractor().extract(&url).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }
}
