//! HTTP client for the management API.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE, LOCATION};
use tokio::sync::RwLock;
use tracing::{debug, instrument, trace};
use url::Url;

use infinity_core::error::{InvalidInputError, ServerError, TransportError};
use infinity_core::{Auth, BaseUrl, BearerToken, Context, Credentials, Error, ResourceUri, Result};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default cap on how much of an error body is read.
pub const DEFAULT_MAX_ERROR_BODY: usize = 64 * 1024;

const APPLICATION_JSON: &str = "application/json";

/// Builder for configuring an [`HttpClient`].
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use infinity_core::{BaseUrl, Credentials};
/// use infinity_http::HttpClient;
///
/// # fn example() -> Result<(), infinity_core::Error> {
/// let base = BaseUrl::new("https://infinity.example.com/api/admin/")?;
/// let client = HttpClient::builder(base)
///     .basic_auth(Credentials::new("admin", "secret"))
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct HttpClientBuilder {
    base_url: BaseUrl,
    auth: Option<Auth>,
    timeout: Duration,
    max_error_body: usize,
    user_agent: String,
    accept_invalid_certs: bool,
    proxy: Option<reqwest::Proxy>,
    http: Option<reqwest::Client>,
}

impl HttpClientBuilder {
    fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            auth: None,
            timeout: DEFAULT_TIMEOUT,
            max_error_body: DEFAULT_MAX_ERROR_BODY,
            user_agent: concat!("infinity-admin/", env!("CARGO_PKG_VERSION")).to_string(),
            accept_invalid_certs: false,
            proxy: None,
            http: None,
        }
    }

    /// Authenticate every request with HTTP Basic credentials.
    pub fn basic_auth(mut self, credentials: Credentials) -> Self {
        self.auth = Some(Auth::Basic(credentials));
        self
    }

    /// Authenticate every request with a bearer token.
    pub fn bearer_token(mut self, token: BearerToken) -> Self {
        self.auth = Some(Auth::Bearer(token));
        self
    }

    /// Set the authentication scheme directly.
    pub fn auth(mut self, auth: Auth) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Default per-request timeout. A [`Context`] deadline can only shorten it.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Maximum number of bytes read from an error response body.
    pub fn max_error_body(mut self, bytes: usize) -> Self {
        self.max_error_body = bytes;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Skip TLS certificate verification (self-signed lab deployments).
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    pub fn proxy(mut self, proxy: reqwest::Proxy) -> Self {
        self.proxy = Some(proxy);
        self
    }

    /// Use a fully configured `reqwest::Client` (custom trust roots, pools).
    ///
    /// The user agent, proxy and certificate settings of this builder are
    /// ignored when a client is supplied.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http = Some(client);
        self
    }

    /// Builds the [`HttpClient`].
    ///
    /// # Errors
    ///
    /// Returns an error if no authentication was configured or the HTTP
    /// client cannot be constructed.
    pub fn build(self) -> Result<HttpClient> {
        let auth = self.auth.ok_or_else(|| InvalidInputError::Other {
            message: "no authentication configured".to_string(),
        })?;

        let http = match self.http {
            Some(client) => client,
            None => {
                let mut builder = reqwest::Client::builder()
                    .user_agent(self.user_agent)
                    .danger_accept_invalid_certs(self.accept_invalid_certs);
                if let Some(proxy) = self.proxy {
                    builder = builder.proxy(proxy);
                }
                builder.build().map_err(|e| TransportError::Client {
                    source: Box::new(e),
                })?
            }
        };

        Ok(HttpClient {
            inner: Arc::new(ClientInner {
                http,
                base_url: self.base_url,
                auth: RwLock::new(auth),
                timeout: self.timeout,
                max_error_body: self.max_error_body,
            }),
        })
    }
}

/// HTTP transport for the management API.
///
/// Holds the base URL, authentication, timeout and a pooled
/// `reqwest::Client`. Cheap to clone (internal `Arc`) and safe to share
/// across tasks; the only lock guards bearer-token replacement.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    http: reqwest::Client,
    base_url: BaseUrl,
    auth: RwLock<Auth>,
    timeout: Duration,
    max_error_body: usize,
}

/// A successful (2xx) exchange.
#[derive(Debug)]
pub(crate) struct RawResponse {
    pub(crate) location: Option<ResourceUri>,
    pub(crate) body: Vec<u8>,
}

impl HttpClient {
    /// Creates a new builder for the given base URL.
    pub fn builder(base_url: BaseUrl) -> HttpClientBuilder {
        HttpClientBuilder::new(base_url)
    }

    /// Returns the base URL this client is configured for.
    pub fn base_url(&self) -> &BaseUrl {
        &self.inner.base_url
    }

    /// Returns the default per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.inner.timeout
    }

    /// Replace the bearer token used for subsequent requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the client was built with Basic credentials; the
    /// authentication scheme is fixed at construction.
    pub async fn set_bearer_token(&self, token: BearerToken) -> Result<()> {
        let mut auth = self.inner.auth.write().await;
        match &mut *auth {
            Auth::Bearer(current) => {
                *current = token;
                debug!("bearer token replaced");
                Ok(())
            }
            Auth::Basic(_) => Err(InvalidInputError::Other {
                message: "client uses basic authentication; no bearer token to replace"
                    .to_string(),
            }
            .into()),
        }
    }

    /// Issue one request and return the 2xx response.
    ///
    /// Nothing is sent when `ctx` is already cancelled or past its deadline.
    #[instrument(skip(self, ctx, body), fields(base = %self.inner.base_url))]
    pub(crate) async fn execute(
        &self,
        ctx: &Context,
        method: Method,
        endpoint: &str,
        query: &str,
        body: Option<Vec<u8>>,
    ) -> Result<RawResponse> {
        if ctx.is_cancelled() {
            debug!("context cancelled, request not sent");
            return Err(Error::Cancelled);
        }

        let timeout = self.effective_timeout(ctx);
        if timeout.is_zero() {
            debug!("deadline passed, request not sent");
            return Err(Error::Timeout { duration_ms: 0 });
        }

        let url = self.inner.base_url.endpoint_url(endpoint, query);
        debug!(%url, "sending request");

        let mut request = self
            .inner
            .http
            .request(method.clone(), &url)
            .header(ACCEPT, APPLICATION_JSON);

        request = match &*self.inner.auth.read().await {
            Auth::Basic(credentials) => {
                request.basic_auth(credentials.username(), Some(credentials.password()))
            }
            Auth::Bearer(token) => request.bearer_auth(token.as_str()),
        };

        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, APPLICATION_JSON).body(body);
        }

        let exchange = self.exchange(request, &method, endpoint, timeout);

        tokio::select! {
            biased;
            _ = ctx.cancelled() => {
                debug!("request cancelled");
                Err(Error::Cancelled)
            }
            outcome = tokio::time::timeout(timeout, exchange) => match outcome {
                Ok(result) => result,
                Err(_) => {
                    debug!(?timeout, "request timed out");
                    Err(Error::Timeout { duration_ms: millis(timeout) })
                }
            },
        }
    }

    async fn exchange(
        &self,
        request: reqwest::RequestBuilder,
        method: &Method,
        endpoint: &str,
        timeout: Duration,
    ) -> Result<RawResponse> {
        let mut response = request
            .send()
            .await
            .map_err(|e| send_error(e, timeout))?;

        let status = response.status();
        trace!(status = %status, "response received");

        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .map(location_uri);

        if !status.is_success() {
            let body = read_capped(&mut response, self.inner.max_error_body).await?;
            return Err(ServerError::new(
                status.as_u16(),
                method.as_str(),
                endpoint,
                String::from_utf8_lossy(&body),
            )
            .into());
        }

        let body = response.bytes().await.map_err(body_error)?.to_vec();
        Ok(RawResponse { location, body })
    }

    fn effective_timeout(&self, ctx: &Context) -> Duration {
        match ctx.remaining() {
            Some(remaining) => remaining.min(self.inner.timeout),
            None => self.inner.timeout,
        }
    }
}

/// Read at most `cap` bytes of the body.
async fn read_capped(response: &mut reqwest::Response, cap: usize) -> Result<Vec<u8>> {
    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await.map_err(body_error)? {
        let room = cap.saturating_sub(body.len());
        body.extend_from_slice(&chunk[..chunk.len().min(room)]);
        if body.len() >= cap {
            break;
        }
    }
    Ok(body)
}

/// The path of an absolute `Location`, or the header verbatim.
fn location_uri(value: &str) -> ResourceUri {
    match Url::parse(value) {
        Ok(url) if url.has_host() => ResourceUri::new(url.path()),
        _ => ResourceUri::new(value),
    }
}

fn send_error(err: reqwest::Error, timeout: Duration) -> Error {
    if err.is_timeout() {
        Error::Timeout {
            duration_ms: millis(timeout),
        }
    } else if err.is_connect() {
        TransportError::Connect {
            source: Box::new(err),
        }
        .into()
    } else {
        TransportError::Request {
            source: Box::new(err),
        }
        .into()
    }
}

fn body_error(err: reqwest::Error) -> Error {
    TransportError::Body {
        source: Box::new(err),
    }
    .into()
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
