//! Shared resource types
//!
//! Resources are the links members share with each other. They are read from
//! a static catalog; there is no write path.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A shared resource, keyed by a generated hash key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Generated hash key used in `/resource/:key`
    pub key: String,
    /// Headline shown on cards
    pub title: String,
    /// Target URL
    pub link: String,
    /// Free-text summary
    #[serde(default)]
    pub description: String,
    /// Who shared it
    #[serde(default)]
    pub author: String,
    /// Topic tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// When it was shared
    pub posted_at: DateTime<Utc>,
}
