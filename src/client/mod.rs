//! Client layer: configuration, request dispatch, and one method per endpoint.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::domain::{ArgumentError, Pagination, Token, Username};
use crate::transport::{ApiFailure, Args, BodyShape, Expect, encode_pagination};

mod account;
mod contacts;
mod lists;
mod messages;
mod numbers;
mod templates;
mod throttle;

use throttle::Throttle;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://rest.textmagic.com/api/v2";
/// Transport timeout applied to the whole request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Minimum gap between two requests sent by the same client.
pub const DEFAULT_MIN_REQUEST_INTERVAL: Duration = Duration::from_millis(500);

const USERNAME_HEADER: &str = "X-TM-Username";
const TOKEN_HEADER: &str = "X-TM-Key";

const ENV_USERNAME: &str = "TEXTMAGIC_USERNAME";
const ENV_TOKEN: &str = "TEXTMAGIC_TOKEN";
const ENV_BASE_URL: &str = "TEXTMAGIC_BASE_URL";
const ENV_USER_AGENT: &str = "TEXTMAGIC_USER_AGENT";

fn default_user_agent() -> String {
    format!("textmagic-rust/{}", env!("CARGO_PKG_VERSION"))
}

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// POST and PUT send arguments as a form body; GET and DELETE as a query string.
    fn carries_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }

    fn as_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        })
    }
}

#[derive(Debug, Clone)]
struct HttpRequest {
    method: Method,
    url: Url,
    headers: Vec<(&'static str, String)>,
    form: Option<Vec<(String, String)>>,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut builder = self
                .client
                .request(request.method.as_reqwest(), request.url);
            for (name, value) in &request.headers {
                builder = builder.header(*name, value);
            }
            if let Some(form) = request.form.as_ref() {
                builder = builder.form(form);
            }
            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`TextmagicClient`].
pub enum TextmagicError {
    /// Missing or invalid credentials or base URL.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Caller-supplied arguments failed local validation; nothing was sent.
    #[error("argument error: {0}")]
    Argument(#[from] ArgumentError),

    /// The server answered with a status the operation does not expect, or with a
    /// body that could not be decoded.
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        message: String,
        /// Field-level details from the error body, if any.
        errors: Option<Value>,
    },

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),
}

impl TextmagicError {
    /// HTTP status of an [`TextmagicError::Api`] failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server rejected the credentials.
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    /// `true` for `404 Not Found` responses.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<ApiFailure> for TextmagicError {
    fn from(value: ApiFailure) -> Self {
        Self::Api {
            status: value.status,
            message: value.message,
            errors: value.errors,
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`TextmagicClient`].
///
/// Use this when you need to customize the base URL, timeout, user agent or the
/// request interval.
pub struct TextmagicClientBuilder {
    username: String,
    token: String,
    base_url: String,
    user_agent: String,
    timeout: Duration,
    min_request_interval: Duration,
}

impl TextmagicClientBuilder {
    /// Create a builder with the production base URL and default settings.
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            user_agent: default_user_agent(),
            timeout: DEFAULT_TIMEOUT,
            min_request_interval: DEFAULT_MIN_REQUEST_INTERVAL,
        }
    }

    /// Read settings from `TEXTMAGIC_USERNAME`, `TEXTMAGIC_TOKEN` and the optional
    /// `TEXTMAGIC_BASE_URL` / `TEXTMAGIC_USER_AGENT`.
    pub fn from_env() -> Result<Self, TextmagicError> {
        let required = |name: &str| {
            std::env::var(name).map_err(|_| {
                TextmagicError::Configuration(format!("{name} environment variable is required"))
            })
        };
        let mut builder = Self::new(required(ENV_USERNAME)?, required(ENV_TOKEN)?);
        if let Ok(base_url) = std::env::var(ENV_BASE_URL) {
            builder = builder.base_url(base_url);
        }
        if let Ok(user_agent) = std::env::var(ENV_USER_AGENT) {
            builder = builder.user_agent(user_agent);
        }
        Ok(builder)
    }

    /// Override the API root (e.g. a sandbox or mock server).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the minimum gap between consecutive requests.
    pub fn min_request_interval(mut self, interval: Duration) -> Self {
        self.min_request_interval = interval;
        self
    }

    /// Validate the settings and build a [`TextmagicClient`].
    pub fn build(self) -> Result<TextmagicClient, TextmagicError> {
        let username = Username::new(self.username)
            .map_err(|err| TextmagicError::Configuration(err.to_string()))?;
        let token =
            Token::new(self.token).map_err(|err| TextmagicError::Configuration(err.to_string()))?;
        parse_base_url(&self.base_url)?;

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|err| TextmagicError::Transport(Box::new(err)))?;

        Ok(TextmagicClient {
            config: ClientConfig {
                base_url: self.base_url,
                username: username.as_str().to_owned(),
                token: token.as_str().to_owned(),
                user_agent: self.user_agent,
            },
            throttle: Throttle::new(self.min_request_interval),
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

fn parse_base_url(base_url: &str) -> Result<Url, TextmagicError> {
    let url = Url::parse(base_url)
        .map_err(|err| TextmagicError::Configuration(format!("invalid base URL: {err}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(TextmagicError::Configuration(format!(
            "base URL must be http(s): {base_url}"
        )));
    }
    Ok(url)
}

#[derive(Debug, Clone)]
struct ClientConfig {
    base_url: String,
    username: String,
    token: String,
    user_agent: String,
}

#[derive(Clone)]
/// High-level TextMagic REST client.
///
/// Every operation validates its arguments, waits until at least the configured
/// interval (500 ms by default) has passed since the previous request on this
/// client, sends one HTTP request and returns the decoded JSON payload. Deletions
/// return `true` on `204 No Content`.
///
/// Clones share the request throttle.
pub struct TextmagicClient {
    config: ClientConfig,
    throttle: Throttle,
    http: Arc<dyn HttpTransport>,
}

impl TextmagicClient {
    /// Create a client against the production API with default settings.
    ///
    /// For more customization, use [`TextmagicClient::builder`].
    pub fn new(
        username: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, TextmagicError> {
        Self::builder(username, token).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(
        username: impl Into<String>,
        token: impl Into<String>,
    ) -> TextmagicClientBuilder {
        TextmagicClientBuilder::new(username, token)
    }

    /// API root every request path is joined to.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Username sent as `X-TM-Username`.
    pub fn username(&self) -> &str {
        &self.config.username
    }

    /// API key sent as `X-TM-Key`.
    pub fn token(&self) -> &str {
        &self.config.token
    }

    /// Value of the `User-Agent` header.
    pub fn user_agent(&self) -> &str {
        &self.config.user_agent
    }

    /// Minimum gap enforced between two requests.
    pub fn min_request_interval(&self) -> Duration {
        self.throttle.interval()
    }

    /// Not validated here; an unusable URL fails the next request with
    /// [`TextmagicError::Configuration`].
    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.config.base_url = base_url.into();
    }

    /// Not validated here; an empty username fails the next request with
    /// [`TextmagicError::Configuration`].
    pub fn set_username(&mut self, username: impl Into<String>) {
        self.config.username = username.into();
    }

    /// Not validated here; an empty token fails the next request with
    /// [`TextmagicError::Configuration`].
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.config.token = token.into();
    }

    /// Replace the `User-Agent` sent with subsequent requests.
    pub fn set_user_agent(&mut self, user_agent: impl Into<String>) {
        self.config.user_agent = user_agent.into();
    }

    /// Send one request and return the raw status and body.
    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        args: Vec<(String, String)>,
    ) -> Result<HttpResponse, TextmagicError> {
        let path = path.trim_matches('/');
        if path.is_empty() {
            return Err(ArgumentError::NoResource.into());
        }

        self.check_credentials()?;
        let mut url = parse_base_url(&format!(
            "{}/{path}",
            self.config.base_url.trim_end_matches('/')
        ))?;
        let form = if args.is_empty() {
            None
        } else if method.carries_body() {
            Some(args)
        } else {
            url.query_pairs_mut().extend_pairs(&args);
            None
        };

        let request = HttpRequest {
            method,
            url,
            headers: self.identity_headers(),
            form,
        };

        self.throttle.acquire().await;
        tracing::debug!(%method, path, "dispatching request");

        let response = self
            .http
            .send(request)
            .await
            .map_err(TextmagicError::Transport)?;

        tracing::debug!(%method, path, status = response.status, "received response");
        Ok(response)
    }

    /// Credentials may have been replaced through a setter since `build`.
    fn check_credentials(&self) -> Result<(), TextmagicError> {
        Username::new(self.config.username.as_str())
            .map_err(|err| TextmagicError::Configuration(err.to_string()))?;
        Token::new(self.config.token.as_str())
            .map_err(|err| TextmagicError::Configuration(err.to_string()))?;
        Ok(())
    }

    fn identity_headers(&self) -> Vec<(&'static str, String)> {
        vec![
            (USERNAME_HEADER, self.config.username.clone()),
            (TOKEN_HEADER, self.config.token.clone()),
            ("User-Agent", self.config.user_agent.clone()),
        ]
    }

    /// Normalize, dispatch and interpret one call.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        args: Args,
        shape: BodyShape,
        expect: Expect,
    ) -> Result<Value, TextmagicError> {
        let args = crate::transport::normalize(args, shape);
        let response = self.dispatch(method, path, args).await?;
        crate::transport::interpret(response.status, &response.body, expect)
            .map_err(TextmagicError::from)
    }

    async fn call(
        &self,
        method: Method,
        path: &str,
        args: Args,
        expect: Expect,
    ) -> Result<Value, TextmagicError> {
        self.execute(method, path, args, BodyShape::Flat, expect)
            .await
    }

    /// GET a single resource expecting 200.
    async fn fetch(&self, path: &str) -> Result<Value, TextmagicError> {
        self.call(Method::Get, path, Args::new(), Expect::OK).await
    }

    /// GET a paginated collection expecting 200.
    async fn list(
        &self,
        path: &str,
        pagination: Pagination,
    ) -> Result<Value, TextmagicError> {
        self.call(Method::Get, path, encode_pagination(&pagination), Expect::OK)
            .await
    }

    /// DELETE expecting `204 No Content`.
    async fn remove(&self, path: &str, args: Args) -> Result<bool, TextmagicError> {
        self.call(Method::Delete, path, args, Expect::NO_CONTENT)
            .await?;
        Ok(true)
    }
}
