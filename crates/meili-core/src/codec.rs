//! JSON codec for request and response bodies
//!
//! The codec is an explicit value owned by each client rather than global
//! state, so two clients can encode differently and tests can build their own.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};

/// Codec settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Pretty-print encoded payloads
    pub pretty: bool,

    /// Bytes of an undecodable body to include in logs
    pub error_snippet_len: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            error_snippet_len: 256,
        }
    }
}

impl CodecConfig {
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_error_snippet_len(mut self, len: usize) -> Self {
        self.error_snippet_len = len;
        self
    }
}

/// Serializes outgoing payloads and decodes server responses
#[derive(Debug, Clone, Default)]
pub struct JsonCodec {
    config: CodecConfig,
}

impl JsonCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>> {
        let encoded = if self.config.pretty {
            serde_json::to_vec_pretty(value)
        } else {
            serde_json::to_vec(value)
        };
        encoded.map_err(Error::Encoding)
    }

    /// Decode a response body. An empty body means the server had nothing
    /// to return and is reported as [`Error::NotFound`].
    pub fn decode<T: DeserializeOwned>(&self, body: &[u8]) -> Result<T> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(Error::NotFound("empty response body".to_string()));
        }

        serde_json::from_slice(body).map_err(|e| {
            tracing::debug!(
                error = %e,
                body = %self.snippet(body),
                "Failed to decode response body"
            );
            Error::Decoding(e)
        })
    }

    fn snippet(&self, body: &[u8]) -> String {
        let text = String::from_utf8_lossy(body);
        let limit = self.config.error_snippet_len;
        if text.len() <= limit {
            return text.into_owned();
        }
        let mut end = limit;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &text[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Movie {
        id: u32,
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        comment: Option<String>,
    }

    #[test]
    fn test_encode_compact_and_pretty() {
        let movie = Movie {
            id: 1,
            title: "Alice In Wonderland".to_string(),
            comment: None,
        };

        let compact = JsonCodec::default().encode(&movie).unwrap();
        assert_eq!(compact, br#"{"id":1,"title":"Alice In Wonderland"}"#.to_vec());

        let pretty = JsonCodec::new(CodecConfig::default().with_pretty(true))
            .encode(&movie)
            .unwrap();
        assert!(String::from_utf8(pretty).unwrap().contains("\n  \"id\": 1"));
    }

    #[test]
    fn test_decode_empty_body_is_not_found() {
        let err = JsonCodec::default().decode::<Movie>(b"").unwrap_err();
        assert!(err.is_not_found());

        let err = JsonCodec::default().decode::<Movie>(b"  \n").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_decode_shape_mismatch() {
        let err = JsonCodec::default()
            .decode::<Movie>(br#"{"id": "not a number"}"#)
            .unwrap_err();
        assert!(matches!(err, Error::Decoding(_)));
    }

    #[test]
    fn test_snippet_truncates_on_char_boundary() {
        let codec = JsonCodec::new(CodecConfig::default().with_error_snippet_len(4));
        assert_eq!(codec.snippet("héllo".as_bytes()), "hél...");
        assert_eq!(codec.snippet(b"abc"), "abc");
    }
}
