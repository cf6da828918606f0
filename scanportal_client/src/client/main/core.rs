use http::Method;
use http::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::{Mutex, PoisonError};
use url::Url;

use super::abort::AbortSignal;
use crate::client::errors::ApiError;
use crate::config::SCANPORTAL_BACKEND_URL;

/// Response header in which the backend hands out its anti-forgery token.
pub const CSRF_TOKEN_HEADER: &str = "X-CSRF-Token";

/// Authenticated request client for the scan-platform API.
///
/// Every mutating call must carry the backend's CSRF token; the client
/// fetches one on first use via an `OPTIONS` preflight against the target
/// endpoint, caches it, and attaches it to each subsequent request. Session
/// cookies ride in the transport's cookie store, so a client built for a
/// server-rendered context keeps the inbound request's session across the
/// internal origin.
///
/// The client never retries and imposes no timeout of its own; callers
/// abort hung requests through an [`AbortSignal`].
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    csrf_token: Mutex<Option<String>>,
}

impl ApiClient {
    /// Client with its own transport, bound to the given API base URL
    /// (origin plus route prefix, e.g. `https://backend.internal/api`).
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self::from_http(default_http_client(), parse_base_url(base_url)?))
    }

    /// Client bound to the base URL from `SCANPORTAL_BACKEND_URL`.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(&SCANPORTAL_BACKEND_URL)
    }

    /// Client reusing an existing transport.
    ///
    /// Server-rendered contexts construct one client per inbound request,
    /// handing in a transport that carries the requester's cookies, so the
    /// outbound calls run against the internal backend origin with the
    /// caller's session.
    pub fn from_http(http: reqwest::Client, base_url: Url) -> Self {
        Self {
            http,
            base_url,
            csrf_token: Mutex::new(None),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Drop the cached CSRF token so the next call fetches a fresh one.
    ///
    /// Called internally whenever the backend answers 401/403; also public
    /// for callers that learn out-of-band that the token went stale.
    pub fn invalidate_csrf_token(&self) {
        *self
            .csrf_token
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }

    fn cached_csrf_token(&self) -> Option<String> {
        self.csrf_token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn store_csrf_token(&self, token: &str) {
        *self
            .csrf_token
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
    }

    /// Resolve an API path against the configured base, keeping the base's
    /// route prefix (plain `Url::join` would discard it for absolute paths).
    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let joined = format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path);
        Url::parse(&joined).map_err(|e| ApiError::BaseUrl(format!("{joined}: {e}")))
    }

    async fn ensure_csrf_token(
        &self,
        target: &Url,
        abort: Option<&AbortSignal>,
    ) -> Result<String, ApiError> {
        if let Some(token) = self.cached_csrf_token() {
            return Ok(token);
        }

        // Concurrent first use may race to this point and preflight twice;
        // both preflights yield a valid token, so no exclusion is held
        // across the await.
        tracing::debug!("Fetching CSRF token via preflight against {}", target);
        let request = self
            .http
            .request(Method::OPTIONS, target.clone())
            .header(CONTENT_TYPE, "application/json");
        let response = self.dispatch(request, abort).await?;

        let token = response
            .headers()
            .get(CSRF_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string())
            .ok_or_else(|| {
                ApiError::CsrfToken("Preflight response carried no token header".to_string())
            })?;

        self.store_csrf_token(&token);
        Ok(token)
    }

    /// The authenticated transport every endpoint helper runs on.
    ///
    /// Ensures a CSRF token is cached (one `OPTIONS` preflight per uncached
    /// token, against the same target), then issues the real request with
    /// the token attached and the body serialized as JSON. Returns the raw
    /// response without interpreting the status; a 401/403 additionally
    /// invalidates the cached token so the next call starts fresh.
    pub async fn fetch_with_csrf<T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&T>,
        abort: Option<&AbortSignal>,
    ) -> Result<reqwest::Response, ApiError>
    where
        T: Serialize + ?Sized,
    {
        let target = self.endpoint(path)?;
        self.fetch_url_with_csrf(method, target, body, abort).await
    }

    async fn fetch_url_with_csrf<T>(
        &self,
        method: Method,
        target: Url,
        body: Option<&T>,
        abort: Option<&AbortSignal>,
    ) -> Result<reqwest::Response, ApiError>
    where
        T: Serialize + ?Sized,
    {
        let token = self.ensure_csrf_token(&target, abort).await?;

        let mut request = self
            .http
            .request(method, target)
            .header(CSRF_TOKEN_HEADER, token.as_str());
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").json(body);
        }

        let response = self.dispatch(request, abort).await?;

        if matches!(response.status().as_u16(), 401 | 403) {
            tracing::debug!(
                "Discarding cached CSRF token after {} from backend",
                response.status()
            );
            self.invalidate_csrf_token();
        }

        Ok(response)
    }

    async fn dispatch(
        &self,
        request: reqwest::RequestBuilder,
        abort: Option<&AbortSignal>,
    ) -> Result<reqwest::Response, ApiError> {
        let send = request.send();
        let result = match abort {
            Some(signal) => tokio::select! {
                _ = signal.aborted() => return Err(ApiError::Aborted),
                result = send => result,
            },
            None => send.await,
        };
        result.map_err(|e| ApiError::Transport(e.to_string()))
    }

    /// Typed GET against any API endpoint, CSRF middleware included.
    ///
    /// This is the generic surface the resource pages (organizations,
    /// projects, scan targets) run their list/detail calls through.
    pub async fn get_json<T>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        abort: Option<&AbortSignal>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let mut target = self.endpoint(path)?;
        if !query.is_empty() {
            target.query_pairs_mut().extend_pairs(query);
        }
        let response = self
            .fetch_url_with_csrf(Method::GET, target, None::<&()>, abort)
            .await?;
        decode_json_response(response).await
    }

    /// Typed POST against any API endpoint, CSRF middleware included.
    pub async fn post_json<T, B>(
        &self,
        path: &str,
        body: &B,
        abort: Option<&AbortSignal>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self
            .fetch_with_csrf(Method::POST, path, Some(body), abort)
            .await?;
        decode_json_response(response).await
    }
}

/// Decode a JSON response into its typed form, one policy for every
/// endpoint: the body is decoded regardless of HTTP status, so a structured
/// `success: false` error on a 4xx surfaces as a typed value. Only a body
/// that does not parse falls back to a status error.
pub(super) async fn decode_json_response<T>(response: reqwest::Response) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    match serde_json::from_str::<T>(&body) {
        Ok(value) => Ok(value),
        Err(e) if status.is_success() => {
            Err(ApiError::Serde(format!("Failed to decode response body: {e}")))
        }
        Err(e) => {
            tracing::debug!("Unparseable error body for {status}: {e}");
            Err(ApiError::Status(status.as_u16()))
        }
    }
}

/// Raw-bytes counterpart of [`decode_json_response`] for the QR endpoint;
/// non-2xx always fails with a status error here.
pub(super) async fn decode_bytes_response(
    response: reqwest::Response,
) -> Result<Vec<u8>, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }
    let bytes = response
        .bytes()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    Ok(bytes.to_vec())
}

fn default_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create reqwest client")
}

fn parse_base_url(base_url: &str) -> Result<Url, ApiError> {
    let url =
        Url::parse(base_url).map_err(|e| ApiError::BaseUrl(format!("{base_url}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(ApiError::BaseUrl(format!("{base_url}: not a base URL")));
    }
    Ok(url)
}
