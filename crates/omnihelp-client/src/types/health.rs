//! Backend health report types.

use serde::{Deserialize, Serialize};

/// Health report from the backend's root health endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Reported status string ("healthy" or "unhealthy").
    pub status: String,

    /// Number of indexed documents, reported when healthy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents: Option<u64>,

    /// Failure description, reported when unhealthy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthStatus {
    /// Returns `true` if the backend reported itself healthy.
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_healthy_report() {
        let health: HealthStatus =
            serde_json::from_str(r#"{"status": "healthy", "documents": 128}"#).unwrap();

        assert!(health.is_healthy());
        assert_eq!(health.documents, Some(128));
        assert_eq!(health.error, None);
    }

    #[test]
    fn test_unhealthy_report() {
        let health: HealthStatus =
            serde_json::from_str(r#"{"status": "unhealthy", "error": "vector store unreachable"}"#)
                .unwrap();

        assert!(!health.is_healthy());
        assert_eq!(health.documents, None);
        assert_eq!(health.error.as_deref(), Some("vector store unreachable"));
    }
}
