// Backend HTTP client
//
// Wraps `reqwest::Client` with action-discriminated URL construction,
// bearer-token attachment, and response normalization. Every remote
// call in the workspace goes through this type.

use std::sync::Arc;

use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::error::Error;
use crate::protocol::UploadResponse;
use crate::token::TokenStore;
use crate::transport::TransportConfig;

/// Body shape the backend uses to report failures on non-2xx responses.
#[derive(serde::Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// HTTP client for the Wayfarer content backend.
///
/// All requests target one endpoint and are discriminated by an
/// `action` query parameter. A bearer header is attached when the token
/// store currently holds a token; a 401 response evicts that token as a
/// side effect before the error is returned.
pub struct ApiClient {
    http: reqwest::Client,
    endpoint: Url,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// Create a client from a `TransportConfig`.
    pub fn new(
        endpoint: Url,
        tokens: Arc<dyn TokenStore>,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, endpoint, tokens })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, endpoint: Url, tokens: Arc<dyn TokenStore>) -> Self {
        Self { http, endpoint, tokens }
    }

    /// The backend endpoint this client targets.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// The token store backing this client's auth header.
    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    // ── Request methods ──────────────────────────────────────────────

    /// Issue a read request: `GET {endpoint}?action={action}&{params}`.
    pub async fn get<T: DeserializeOwned>(
        &self,
        action: &str,
        params: &[(&str, &str)],
    ) -> Result<T, Error> {
        let url = self.action_url(action, params);
        debug!(action, "GET {url}");

        let resp = self
            .authorize(self.http.get(url))
            .send()
            .await
            .map_err(Error::Transport)?;

        self.parse_response(resp).await
    }

    /// Issue a write request: `POST {endpoint}?action={action}` with a
    /// JSON body.
    pub async fn post<T: DeserializeOwned>(
        &self,
        action: &str,
        body: &impl Serialize,
    ) -> Result<T, Error> {
        let url = self.action_url(action, &[]);
        debug!(action, "POST {url}");

        let resp = self
            .authorize(self.http.post(url).json(body))
            .send()
            .await
            .map_err(Error::Transport)?;

        self.parse_response(resp).await
    }

    /// Upload a single file as multipart form data under field `file`.
    ///
    /// Returns the resource URL the backend stored the file at.
    pub async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, Error> {
        let url = self.action_url("upload_file", &[]);
        debug!(file_name, "POST {url} (multipart)");

        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_owned());
        let form = reqwest::multipart::Form::new().part("file", part);

        let resp = self
            .authorize(self.http.post(url).multipart(form))
            .send()
            .await
            .map_err(Error::Transport)?;

        let parsed: UploadResponse = self.parse_response(resp).await?;
        match parsed.url {
            Some(url) => Ok(url),
            None => Err(Error::Api {
                status: 200,
                message: parsed.error.unwrap_or_else(|| "upload failed".into()),
            }),
        }
    }

    // ── Internals ────────────────────────────────────────────────────

    /// Build `{endpoint}?action={action}&{params}`.
    fn action_url(&self, action: &str, params: &[(&str, &str)]) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("action", action);
            for (key, value) in params {
                query.append_pair(key, value);
            }
        }
        url
    }

    /// Attach the bearer header if a token is currently stored.
    ///
    /// The token is re-read per request, so an eviction between two
    /// calls makes the second one anonymous.
    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.tokens.load() {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        }
    }

    /// Normalize a response: 401 evicts the token, other non-2xx become
    /// `Error::Api` with the backend's message when one is parseable.
    async fn parse_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            warn!("unauthorized (401) -- evicting stored session token");
            self.tokens.clear();
            return Err(Error::Unauthorized);
        }

        let body = resp.text().await.map_err(Error::Transport)?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|parsed| parsed.error)
                .or_else(|| {
                    let trimmed = body.trim();
                    (!trimmed.is_empty()).then(|| trimmed.to_owned())
                })
                .unwrap_or_else(|| format!("API error: {status}"));

            return Err(Error::Api { status: status.as_u16(), message });
        }

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }
}
