//! Resource catalog backed by mock data embedded in the binary

use sharehub_core::resource::ports::ResourceCatalog;
use sharehub_domain::{Resource, Result, ShareHubError};
use tracing::debug;

const MOCK_RESOURCES: &str = include_str!("mock/resources.json");

/// Read-only catalog over a fixed list of resources
#[derive(Debug, Clone)]
pub struct MockResourceCatalog {
    resources: Vec<Resource>,
}

impl MockResourceCatalog {
    /// Parse the embedded mock data
    pub fn embedded() -> Result<Self> {
        Self::from_json(MOCK_RESOURCES)
    }

    /// Parse a JSON array of resources
    pub fn from_json(raw: &str) -> Result<Self> {
        let resources: Vec<Resource> = serde_json::from_str(raw)
            .map_err(|e| ShareHubError::Config(format!("invalid resource data: {e}")))?;
        Ok(Self::new(resources))
    }

    /// Build a catalog from resources, ordered newest first
    pub fn new(mut resources: Vec<Resource>) -> Self {
        resources.sort_by(|a, b| b.posted_at.cmp(&a.posted_at));
        debug!(count = resources.len(), "resource catalog loaded");
        Self { resources }
    }
}

impl ResourceCatalog for MockResourceCatalog {
    fn list(&self) -> Vec<Resource> {
        self.resources.clone()
    }

    fn get(&self, key: &str) -> Option<Resource> {
        self.resources.iter().find(|r| r.key == key).cloned()
    }
}
