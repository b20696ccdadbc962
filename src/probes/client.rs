//! Concurrent retrieval of the four deep-link configuration sources.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::warn;

use super::endpoints::ProbeEndpoints;

/// Reported when a response carries no `content-type` header, or when the
/// request produced no response at all.
const CONTENT_TYPE_NOT_SET: &str = "Not set";

const USER_AGENT: &str = concat!("deeplink-checker/", env!("CARGO_PKG_VERSION"));

/// Outcome of a single configuration lookup.
///
/// `content` is `None` both when the lookup failed and when a present body
/// was not valid JSON; `found` reflects only the HTTP status and is the sole
/// discriminator between the two.
#[derive(Debug, Clone)]
pub struct ProbeOutcome {
    pub found: bool,
    pub content_type: String,
    pub content: Option<Value>,
}

impl ProbeOutcome {
    fn unreachable() -> Self {
        Self {
            found: false,
            content_type: CONTENT_TYPE_NOT_SET.to_string(),
            content: None,
        }
    }
}

/// The four outcomes produced by one fan-out over a domain.
#[derive(Debug, Clone)]
pub struct DomainProbes {
    pub aasa: ProbeOutcome,
    pub aasa_cdn: ProbeOutcome,
    pub assetlinks: ProbeOutcome,
    pub assetlinks_cached: ProbeOutcome,
}

/// Shared outbound HTTP client for configuration lookups.
///
/// Sends a fixed identifying `User-Agent` and `Accept: application/json, */*`
/// on every request.
pub struct ProbeClient {
    client: Client,
    endpoints: ProbeEndpoints,
}

impl ProbeClient {
    /// Creates a client against the production endpoints.
    pub fn new(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        Self::with_endpoints(ProbeEndpoints::default(), timeout)
    }

    /// Creates a client against custom endpoints.
    pub fn with_endpoints(
        endpoints: ProbeEndpoints,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json, */*"));

        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(default_headers);

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoints,
        })
    }

    /// Fetches all four sources concurrently and waits for every lookup to
    /// settle.
    ///
    /// The lookups are independent: a failing or slow probe never cancels the
    /// others, and every failure is reduced to its own outcome rather than
    /// propagated.
    pub async fn check(&self, domain: &str) -> DomainProbes {
        let (aasa, aasa_cdn, assetlinks, assetlinks_cached) = tokio::join!(
            self.probe(self.endpoints.aasa_url(domain)),
            self.probe(self.endpoints.aasa_cdn_url(domain)),
            self.probe(self.endpoints.assetlinks_url(domain)),
            self.probe(self.endpoints.assetlinks_cached_url(domain)),
        );

        DomainProbes {
            aasa,
            aasa_cdn,
            assetlinks,
            assetlinks_cached,
        }
    }

    async fn probe(&self, url: String) -> ProbeOutcome {
        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(url = %url, error = %e, "probe request failed");
                return ProbeOutcome::unreachable();
            }
        };

        let found = response.status().is_success();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(CONTENT_TYPE_NOT_SET)
            .to_string();

        // Bodies of non-2xx responses are never read.
        let content = if found {
            match response.json::<Value>().await {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!(url = %url, error = %e, "probe body is not valid JSON");
                    None
                }
            }
        } else {
            None
        };

        ProbeOutcome {
            found,
            content_type,
            content,
        }
    }
}
