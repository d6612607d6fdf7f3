//! HTTP transport backed by reqwest

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use crate::error::{TransportError, TransportResult};
use crate::traits::{Method, Request, Transport};

/// Connection settings for [`HttpTransport`]
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Base URL of the server, e.g. `http://localhost:7700`
    pub host: String,

    /// Sent as a bearer token when set and non-empty
    pub api_key: Option<String>,

    /// Per-request timeout; `None` leaves requests unbounded
    pub timeout: Option<Duration>,

    pub user_agent: String,
}

impl HttpConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            api_key: None,
            timeout: None,
            user_agent: format!("meili-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Transport issuing real HTTP requests
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    api_key: Option<String>,
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: HttpConfig) -> TransportResult<Self> {
        let url = reqwest::Url::parse(&config.host)
            .map_err(|e| TransportError::InvalidUrl(format!("{}: {}", config.host, e)))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(TransportError::InvalidUrl(format!(
                "{}: unsupported scheme `{}`",
                config.host,
                url.scheme()
            )));
        }

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: config.host.trim_end_matches('/').to_string(),
            api_key: config.api_key.filter(|key| !key.is_empty()),
            http: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn add_auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(ref key) = self.api_key {
            req.bearer_auth(key)
        } else {
            req
        }
    }

    fn method(method: Method) -> reqwest::Method {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: Request) -> TransportResult<Vec<u8>> {
        let url = format!("{}{}", self.base_url, request.path);
        tracing::debug!("{} {}", request.method, url);

        let mut req = self.add_auth(self.http.request(Self::method(request.method), &url));
        if let Some(body) = request.body {
            req = req.header(CONTENT_TYPE, "application/json").body(body);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let body = resp.bytes().await?.to_vec();

        if status.is_success() {
            Ok(body)
        } else {
            tracing::debug!("{} {} answered {}", request.method, url, status);
            Err(TransportError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}
