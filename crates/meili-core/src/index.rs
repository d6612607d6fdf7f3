//! Index and server metadata types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named collection of documents on the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Index {
    pub uid: String,

    /// Attribute used to identify documents, once known
    #[serde(default)]
    pub primary_key: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Build information reported by `GET /version`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    pub commit_sha: String,

    /// Kept as text: development builds report `unknown`
    pub commit_date: String,

    pub pkg_version: String,
}

/// Response of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
}

impl Health {
    pub fn is_available(&self) -> bool {
        self.status == "available"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_decode() {
        let json = r#"{
            "uid": "movies",
            "primaryKey": "id",
            "createdAt": "2022-02-10T07:45:15.628261Z",
            "updatedAt": "2022-02-21T15:28:43.496574Z"
        }"#;

        let index: Index = serde_json::from_str(json).unwrap();
        assert_eq!(index.uid, "movies");
        assert_eq!(index.primary_key.as_deref(), Some("id"));
        assert!(index.created_at.is_some());
    }

    #[test]
    fn test_index_without_primary_key() {
        let index: Index = serde_json::from_str(r#"{"uid": "books", "primaryKey": null}"#).unwrap();
        assert!(index.primary_key.is_none());
        assert!(index.updated_at.is_none());
    }

    #[test]
    fn test_version_and_health() {
        let version: Version = serde_json::from_str(
            r#"{"commitSha": "b46889b5f0f2f8b91438a08a358ba8f05fc09fc1", "commitDate": "unknown", "pkgVersion": "1.0.0"}"#,
        )
        .unwrap();
        assert_eq!(version.pkg_version, "1.0.0");

        let health: Health = serde_json::from_str(r#"{"status": "available"}"#).unwrap();
        assert!(health.is_available());
    }
}
