//! Client configuration

use std::time::Duration;

use meili_core::CodecConfig;

/// Default server address
pub const DEFAULT_HOST: &str = "http://localhost:7700";

/// Configuration for [`Client`](crate::Client)
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub host: String,
    pub api_key: Option<String>,
    pub request_timeout: Option<Duration>,
    pub user_agent: Option<String>,
    pub codec: CodecConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST)
    }
}

impl ClientConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            api_key: None,
            request_timeout: None,
            user_agent: None,
            codec: CodecConfig::default(),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_codec(mut self, codec: CodecConfig) -> Self {
        self.codec = codec;
        self
    }

    #[cfg(feature = "http")]
    pub(crate) fn http_config(&self) -> meili_transport::HttpConfig {
        let mut http = meili_transport::HttpConfig::new(self.host.clone());
        http.api_key = self.api_key.clone();
        http.timeout = self.request_timeout;
        if let Some(ref ua) = self.user_agent {
            http.user_agent = ua.clone();
        }
        http
    }
}
