//! Port interfaces for reading shared resources

use sharehub_domain::Resource;

/// Read-only source of shared resources
pub trait ResourceCatalog: Send + Sync {
    /// All resources, newest first
    fn list(&self) -> Vec<Resource>;

    /// Look up one resource by its hash key
    fn get(&self, key: &str) -> Option<Resource>;
}
