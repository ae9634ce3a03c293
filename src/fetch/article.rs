// Latest-article discovery and body extraction for one news source.
//
// Two-phase, like the sites themselves: the homepage is searched for the
// first node matching the source's link selector, then the linked article
// page is searched for the body selector. A source that yields no link or
// no body produces Ok(None): absence is a reportable outcome, not an
// error, and no text is ever invented for a missing article.
//
// scraper's Html is !Send, so parsing lives in sync helpers that never
// hold a document across an await.

use anyhow::Result;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::client::NewsClient;

/// Where and how to find the latest article on one news site.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceSpec {
    /// Short display name (e.g. "asriran")
    pub name: String,
    /// Homepage URL
    pub base_url: String,
    /// CSS selector for the latest-article link on the homepage
    pub link_selector: String,
    /// CSS selector for the article body on the article page
    pub body_selector: String,
}

/// One fetched article, untouched by normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawArticle {
    /// Source display name
    pub source: String,
    /// Resolved article URL
    pub url: String,
    /// Raw extracted text
    pub text: String,
}

/// Fetch the latest article from one source.
pub async fn fetch_latest(client: &NewsClient, spec: &SourceSpec) -> Result<Option<RawArticle>> {
    let homepage = client.get_html(&spec.base_url).await?;

    let Some(url) = extract_link(&homepage, &spec.link_selector, &spec.base_url)? else {
        warn!(source = %spec.name, selector = %spec.link_selector, "No article link found");
        return Ok(None);
    };

    debug!(source = %spec.name, url = %url, "Resolved latest article");

    let page = client.get_html(&url).await?;
    match extract_text(&page, &spec.body_selector)? {
        Some(text) => Ok(Some(RawArticle {
            source: spec.name.clone(),
            url,
            text,
        })),
        None => {
            warn!(source = %spec.name, selector = %spec.body_selector, "No article body found");
            Ok(None)
        }
    }
}

/// Find the first link matching the selector and resolve it to a full URL.
fn extract_link(html: &str, selector: &str, base_url: &str) -> Result<Option<String>> {
    let document = Html::parse_document(html);
    let link_selector = parse_selector(selector)?;

    let Some(node) = document.select(&link_selector).next() else {
        return Ok(None);
    };
    let Some(href) = node.value().attr("href") else {
        return Ok(None);
    };

    // Root-relative links resolve against the homepage origin.
    let url = if href.starts_with('/') {
        format!("{}{}", base_url.trim_end_matches('/'), href)
    } else {
        href.to_string()
    };

    Ok(Some(url))
}

/// Collect the text content of the first node matching the selector.
fn extract_text(html: &str, selector: &str) -> Result<Option<String>> {
    let document = Html::parse_document(html);
    let body_selector = parse_selector(selector)?;

    Ok(document
        .select(&body_selector)
        .next()
        .map(|node| node.text().collect::<Vec<_>>().join(" ")))
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| anyhow::anyhow!("Invalid CSS selector {selector:?}: {e}"))
}
