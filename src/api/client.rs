//! HTTP client for the Pages site API
//!
//! Thin wrapper over reqwest that knows the two create endpoints, the
//! list endpoint, and the CSRF contract: the server sets a `csrftoken`
//! cookie on the first GET, and every state-changing same-origin
//! request must echo it back in the `X-CSRFToken` header.

use crate::api::error::{error_for_status, ApiError};
use crate::api::traits::PagesApi;
use crate::state::{Entry, EntryDraft, ReportDraft};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::multipart;
use reqwest::{Method, Url};
use std::sync::Arc;

/// Default site address
const DEFAULT_ADDRESS: &str = "http://127.0.0.1:8000";

const LIST_PATH: &str = "web/v1/data/";
const ENTRY_CREATE_PATH: &str = "web/v1/data/create/";
const REPORT_CREATE_PATH: &str = "web/v1/report/create/";

const CSRF_COOKIE: &str = "csrftoken";
const CSRF_HEADER: &str = "X-CSRFToken";

/// Client for communicating with the Pages site
pub struct ApiClient {
    http: reqwest::Client,
    jar: Arc<Jar>,
    base_url: Url,
    list_url: Url,
    entry_create_url: Url,
    report_create_url: Url,
}

impl ApiClient {
    /// Create a new client for the given site address
    pub fn new(address: Option<&str>) -> Result<Self> {
        let address = address
            .map(str::to_string)
            .or_else(|| std::env::var("PAGES_SERVER_URL").ok())
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string());

        let base_url: Url = address
            .parse()
            .with_context(|| format!("invalid server address: {address}"))?;

        let jar = Arc::new(Jar::default());
        let http = reqwest::Client::builder()
            .cookie_provider(jar.clone())
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http,
            jar,
            list_url: base_url.join(LIST_PATH)?,
            entry_create_url: base_url.join(ENTRY_CREATE_PATH)?,
            report_create_url: base_url.join(REPORT_CREATE_PATH)?,
            base_url,
        })
    }

    async fn post_multipart(&self, url: Url, form: multipart::Form) -> Result<(), ApiError> {
        let mut request = self.http.post(url.clone()).multipart(form);

        if !csrf_safe(&Method::POST) && self.same_origin(&url) {
            if let Some(token) = self.csrf_token() {
                request = request.header(CSRF_HEADER, token);
            } else {
                tracing::warn!("no {CSRF_COOKIE} cookie set; submitting without CSRF header");
            }
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        tracing::debug!(%status, "submission rejected");
        Err(error_for_status(status, &body))
    }

    /// Read the CSRF token out of the shared cookie jar
    fn csrf_token(&self) -> Option<String> {
        let header = self.jar.cookies(&self.base_url)?;
        let cookies = header.to_str().ok()?;
        cookies.split("; ").find_map(|pair| {
            pair.split_once('=')
                .filter(|(name, _)| *name == CSRF_COOKIE)
                .map(|(_, value)| value.to_string())
        })
    }

    fn same_origin(&self, url: &Url) -> bool {
        url.scheme() == self.base_url.scheme()
            && url.host() == self.base_url.host()
            && url.port_or_known_default() == self.base_url.port_or_known_default()
    }
}

#[async_trait]
impl PagesApi for ApiClient {
    /// Fetch entries, optionally filtered by a search query. The first
    /// call doubles as the page load that primes the CSRF cookie.
    async fn list_entries(&self, query: Option<String>) -> Result<Vec<Entry>, ApiError> {
        let mut request = self.http.get(self.list_url.clone());
        if let Some(q) = query {
            request = request.query(&[("q", q)]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_for_status(status, &body));
        }

        Ok(response.json().await?)
    }

    /// Submit a new entry as a multipart form
    async fn create_entry(&self, draft: EntryDraft) -> Result<(), ApiError> {
        let mut form = multipart::Form::new()
            .text("title", draft.title)
            .text("subtitle", draft.subtitle)
            .text("event", draft.event)
            .text("content", draft.content)
            .text("image_caption", draft.image_caption)
            .text("reference", draft.reference)
            .text("author", draft.author);

        if let Some(path) = &draft.image {
            let bytes = tokio::fs::read(path).await?;
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "image".to_string());
            form = form.part("image", multipart::Part::bytes(bytes).file_name(file_name));
        }

        self.post_multipart(self.entry_create_url.clone(), form)
            .await
    }

    /// Submit a report against an existing entry
    async fn create_report(&self, draft: ReportDraft) -> Result<(), ApiError> {
        let form = multipart::Form::new()
            .text("body", draft.body)
            .text("reporter", draft.reporter)
            .text("page", draft.page);

        self.post_multipart(self.report_create_url.clone(), form)
            .await
    }
}

/// Methods that never require the CSRF header
fn csrf_safe(method: &Method) -> bool {
    matches!(method.as_str(), "GET" | "HEAD" | "OPTIONS" | "TRACE")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(Some("http://example.org:8000")).unwrap()
    }

    #[test]
    fn test_new_rejects_garbage_address() {
        assert!(ApiClient::new(Some("not a url")).is_err());
    }

    #[test]
    fn test_endpoint_urls() {
        let client = client();
        assert_eq!(
            client.entry_create_url.as_str(),
            "http://example.org:8000/web/v1/data/create/"
        );
        assert_eq!(
            client.report_create_url.as_str(),
            "http://example.org:8000/web/v1/report/create/"
        );
    }

    #[test]
    fn test_csrf_safe_methods() {
        assert!(csrf_safe(&Method::GET));
        assert!(csrf_safe(&Method::HEAD));
        assert!(csrf_safe(&Method::OPTIONS));
        assert!(csrf_safe(&Method::TRACE));
        assert!(!csrf_safe(&Method::POST));
        assert!(!csrf_safe(&Method::PUT));
        assert!(!csrf_safe(&Method::DELETE));
    }

    #[test]
    fn test_same_origin() {
        let client = client();
        assert!(client.same_origin(&"http://example.org:8000/web/v1/".parse().unwrap()));
        assert!(!client.same_origin(&"https://example.org:8000/".parse().unwrap()));
        assert!(!client.same_origin(&"http://evil.example:8000/".parse().unwrap()));
        assert!(!client.same_origin(&"http://example.org:9999/".parse().unwrap()));
    }

    #[test]
    fn test_csrf_token_read_from_jar() {
        let client = client();
        assert!(client.csrf_token().is_none());

        let url = client.base_url.clone();
        client
            .jar
            .add_cookie_str("csrftoken=tok123; Path=/", &url);
        client.jar.add_cookie_str("sessionid=abc; Path=/", &url);

        assert_eq!(client.csrf_token().as_deref(), Some("tok123"));
    }
}
