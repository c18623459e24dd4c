//! Health report served by `GET /health`

use serde::{Deserialize, Serialize};

/// Overall health of the service
///
/// The service is healthy only when every component is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// True when every component is healthy
    pub is_healthy: bool,

    /// Fraction of healthy components, 0.0 to 1.0
    pub score: f64,

    /// Per-component results
    pub components: Vec<ComponentHealth>,

    /// Unix timestamp when the check ran
    pub timestamp: i64,
}

impl HealthStatus {
    /// Empty report, healthy until a failing component is added
    pub fn new() -> Self {
        Self {
            is_healthy: true,
            score: 1.0,
            components: Vec::new(),
            timestamp: chrono::Utc::now().timestamp(),
        }
    }

    /// Add a component and recompute the score
    pub fn add_component(mut self, component: ComponentHealth) -> Self {
        self.components.push(component);

        let healthy = self.components.iter().filter(|c| c.is_healthy).count();
        self.score = healthy as f64 / self.components.len() as f64;
        self.is_healthy = healthy == self.components.len();
        self
    }
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self::new()
    }
}

/// Health of one dependency
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    /// Component identifier (e.g. "database")
    pub name: String,

    /// Whether the check passed
    pub is_healthy: bool,

    /// Failure detail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ComponentHealth {
    /// Passing component
    pub fn healthy(name: impl Into<String>) -> Self {
        Self { name: name.into(), is_healthy: true, message: None }
    }

    /// Failing component with a reason
    pub fn unhealthy(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self { name: name.into(), is_healthy: false, message: Some(message.into()) }
    }
}
