//! Backend readiness as seen by the shell.
//!
//! DESIGN
//! ======
//! Owned by the shell and passed to the banner as a prop. A failed health
//! check is not an error state of its own: it collapses to `Unknown`, which
//! hides the banner the same way a pending check does.

#[cfg(test)]
#[path = "health_test.rs"]
mod health_test;

use crate::net::api::ApiError;
use crate::net::types::HealthStatus;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum HealthState {
    /// Not fetched yet, or the fetch failed.
    #[default]
    Unknown,
    Known(HealthStatus),
}

impl HealthState {
    /// Fold a health-check result into state, logging failures.
    pub fn from_result(result: Result<HealthStatus, ApiError>) -> Self {
        match result {
            Ok(status) => Self::Known(status),
            Err(e) => {
                log::warn!("health check failed, initialization status unknown: {e}");
                Self::Unknown
            }
        }
    }

    /// The degraded-mode banner shows only when the backend explicitly
    /// reported that its agents are not initialized.
    pub fn banner_visible(&self) -> bool {
        matches!(self, Self::Known(status) if !status.agents_initialized)
    }
}
