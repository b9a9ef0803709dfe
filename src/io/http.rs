use hyper::ext::ReasonPhrase;
use reqwest::{Client, Response, StatusCode};

use crate::error::{Error, Result};
use crate::search::QueryParameters;
use crate::search::tables::SERVICE_URL;

/// User agent string identifying this client.
const USER_AGENT: &str = concat!("cesmd/", env!("CARGO_PKG_VERSION"));

/// Reason phrase as sent by the server. hyper only records it when it
/// differs from the canonical one for the status.
fn reason_phrase(resp: &Response) -> String {
    match resp.extensions().get::<ReasonPhrase>() {
        Some(phrase) => String::from_utf8_lossy(phrase.as_bytes()).into_owned(),
        None => resp
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_string(),
    }
}

/// HTTP client for the records query service.
///
/// Each [`fetch`](Self::fetch) is a single GET with no retries.
pub struct ServiceClient {
    client: Client,
    endpoint: String,
}

impl ServiceClient {
    /// Create a client for the public records endpoint
    pub fn new() -> Result<Self> {
        Self::with_endpoint(SERVICE_URL)
    }

    /// Create a client for an alternative endpoint, e.g. a mirror or a
    /// local test server
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Send the query and return the raw response body.
    pub async fn fetch(&self, params: &QueryParameters) -> Result<Vec<u8>> {
        let request = self
            .client
            .get(&self.endpoint)
            .query(params.as_pairs())
            .build()?;
        tracing::info!(url = %request.url(), "Requesting records");

        let resp = self.client.execute(request).await?;
        let status = resp.status();
        if status != StatusCode::OK {
            let reason = reason_phrase(&resp);
            tracing::warn!(status = status.as_u16(), %reason, "Records service refused request");
            return Err(Error::Service {
                status: status.as_u16(),
                reason,
            });
        }

        let bytes = resp.bytes().await?;
        tracing::debug!(bytes = bytes.len(), "Received response body");
        Ok(bytes.to_vec())
    }
}
