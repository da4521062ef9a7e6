use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{StatusCode, Url};
use serde::Deserialize;
use tracing::debug;

use super::error::LookupError;
use super::types::PageLookup;

/// Encyclopedic knowledge source queried by title.
pub trait KnowledgeBase: Send + Sync {
    /// Looks up a page by exact title (no auto-suggest).
    fn lookup(&self, title: &str)
    -> impl Future<Output = Result<PageLookup, LookupError>> + Send;
}

impl<T: KnowledgeBase> KnowledgeBase for Arc<T> {
    fn lookup(
        &self,
        title: &str,
    ) -> impl Future<Output = Result<PageLookup, LookupError>> + Send {
        (**self).lookup(title)
    }
}

#[derive(Debug, Deserialize)]
struct SummaryResponse {
    #[serde(rename = "type", default)]
    page_type: String,
    #[serde(default)]
    extract: String,
}

/// Wikipedia REST API client (`/page/summary/{title}`).
#[derive(Debug, Clone)]
pub struct WikipediaClient {
    http: reqwest::Client,
    base_url: Url,
    timeout: Duration,
}

impl WikipediaClient {
    pub fn new(base_url: &str, user_agent: &str, timeout: Duration) -> Result<Self, LookupError> {
        let base_url = Url::parse(base_url).map_err(|e| LookupError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(LookupError::InvalidUrl {
                url: base_url.to_string(),
                reason: "not a base URL".to_string(),
            });
        }

        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| LookupError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            timeout,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/page/summary/{Title_With_Underscores}`, percent-encoded.
    pub fn summary_url(&self, title: &str) -> Result<Url, LookupError> {
        let page = title.trim().replace(' ', "_");
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| LookupError::InvalidUrl {
                url: self.base_url.to_string(),
                reason: "not a base URL".to_string(),
            })?
            .pop_if_empty()
            .extend(["page", "summary", page.as_str()]);
        Ok(url)
    }
}

impl KnowledgeBase for WikipediaClient {
    async fn lookup(&self, title: &str) -> Result<PageLookup, LookupError> {
        let url = self.summary_url(title)?;
        debug!(title = %title, url = %url, "Querying knowledge base");

        let response = self.http.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                LookupError::Timeout(self.timeout)
            } else {
                LookupError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(PageLookup::Missing);
        }
        if !status.is_success() {
            return Err(LookupError::UnexpectedStatus {
                title: title.to_string(),
                status: status.as_u16(),
            });
        }

        let page: SummaryResponse = response
            .json()
            .await
            .map_err(|e| LookupError::Parse(e.to_string()))?;

        if page.page_type == "disambiguation" {
            return Ok(PageLookup::Ambiguous);
        }
        Ok(PageLookup::Resolved {
            summary: page.extract,
        })
    }
}
