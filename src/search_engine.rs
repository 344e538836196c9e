use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use scraper::{Html, Selector};
use std::time::Duration;
use log::{info, warn, error};
use url::Url;

use crate::enricher::UrlLookup;

const SEARCH_ENDPOINT: &str = "https://html.duckduckgo.com/html/";
// Fixed query configuration: Japanese region, safe search on, no time range.
const REGION: &str = "jp-jp";
const SAFE_SEARCH_ON: &str = "1";

pub struct SearchEngine {
    client: Client,
}

impl SearchEngine {
    pub fn new() -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"));

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .default_headers(headers)
            .cookie_store(true)
            .build()
            .expect("Failed to build Search Client");

        SearchEngine { client }
    }

    /// One-shot search for a company's website. Only the top result is
    /// consumed; transport errors and empty result pages both come back
    /// as `None`.
    pub fn lookup_company_url(&self, company: &str) -> Option<String> {
        let encoded_query = urlencoding::encode(company);
        let search_url = format!(
            "{}?q={}&kl={}&kp={}",
            SEARCH_ENDPOINT, encoded_query, REGION, SAFE_SEARCH_ON
        );

        info!("Searching for: '{}'", company);

        match self.client.get(&search_url).send() {
            Ok(resp) => {
                if !resp.status().is_success() {
                    warn!("Search failed with status: {}", resp.status());
                    return None;
                }

                let text = match resp.text() {
                    Ok(t) => t,
                    Err(e) => {
                        error!("Failed to read search response: {}", e);
                        return None;
                    }
                };

                self.first_result_url(&text)
            }
            Err(e) => {
                error!("Search request failed: {}", e);
                None
            }
        }
    }

    // DDG HTML uses specific classes. .result__a is the link title.
    fn first_result_url(&self, html: &str) -> Option<String> {
        let document = Html::parse_document(html);
        let selector = Selector::parse(".result__a").unwrap();

        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(resolved) = resolve_result_href(href) {
                    info!("Found top result: {}", resolved);
                    return Some(resolved);
                }
            }
        }

        warn!("No result found in search response.");
        None
    }
}

impl UrlLookup for SearchEngine {
    fn lookup_url(&self, name: &str) -> Option<String> {
        self.lookup_company_url(name)
    }
}

// Result anchors on the HTML endpoint are redirect wrappers of the form
// //duckduckgo.com/l/?uddg=<encoded target>; the real address sits in the
// uddg parameter. Direct http(s) links pass through unchanged.
fn resolve_result_href(href: &str) -> Option<String> {
    let absolute = match href.strip_prefix("//") {
        Some(rest) => format!("https://{}", rest),
        None => href.to_string(),
    };
    let parsed = Url::parse(&absolute).ok()?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return None;
    }

    let is_redirect = parsed
        .host_str()
        .map_or(false, |host| host.ends_with("duckduckgo.com"));
    if is_redirect {
        for (key, value) in parsed.query_pairs() {
            if key == "uddg" {
                return Some(value.into_owned());
            }
        }
        return None;
    }

    Some(String::from(parsed))
}

#[cfg(test)]
mod tests {
    use super::*;

    const REDIRECT_RESULTS: &str = r#"<html><body>
<div class="results">
  <div class="result results_links results_links_deep web-result">
    <h2 class="result__title">
      <a rel="nofollow" class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fwww.example.co.jp%2F&amp;rut=abc123">Example Inc.</a>
    </h2>
  </div>
  <div class="result results_links results_links_deep web-result">
    <h2 class="result__title">
      <a rel="nofollow" class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fsecond.example%2F&amp;rut=def456">Second Inc.</a>
    </h2>
  </div>
</div>
</body></html>"#;

    const DIRECT_RESULTS: &str = r#"<html><body>
<div class="result"><a class="result__a" href="https://direct.example.co.jp/">Direct</a></div>
</body></html>"#;

    const NO_RESULTS: &str = r#"<html><body>
<div class="no-results">If this persists, please try again later.</div>
</body></html>"#;

    #[test]
    fn takes_first_result_and_unwraps_redirect() {
        let engine = SearchEngine::new();
        assert_eq!(
            engine.first_result_url(REDIRECT_RESULTS),
            Some("https://www.example.co.jp/".to_string())
        );
    }

    #[test]
    fn passes_direct_links_through() {
        let engine = SearchEngine::new();
        assert_eq!(
            engine.first_result_url(DIRECT_RESULTS),
            Some("https://direct.example.co.jp/".to_string())
        );
    }

    #[test]
    fn empty_result_page_yields_none() {
        let engine = SearchEngine::new();
        assert_eq!(engine.first_result_url(NO_RESULTS), None);
    }

    #[test]
    fn resolve_decodes_uddg_parameter() {
        let href = "//duckduckgo.com/l/?uddg=https%3A%2F%2Fwww.example.co.jp%2Fabout&rut=xyz";
        assert_eq!(
            resolve_result_href(href),
            Some("https://www.example.co.jp/about".to_string())
        );
    }

    #[test]
    fn resolve_rejects_relative_and_non_http_links() {
        assert_eq!(resolve_result_href("/settings"), None);
        assert_eq!(resolve_result_href("javascript:void(0)"), None);
    }

    #[test]
    fn resolve_rejects_redirects_without_target() {
        assert_eq!(resolve_result_href("//duckduckgo.com/l/?rut=only"), None);
    }
}
