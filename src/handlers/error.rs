use axum::http::StatusCode;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("failed to load dashboard data: {0:#}")]
    Upstream(#[from] anyhow::Error),

    #[error("timed out loading dashboard data after {0:?}")]
    Timeout(Duration),

    #[error("failed to render template: {0}")]
    Render(#[from] askama::Error),
}

impl DashboardError {
    /// Odpověď pro klienta. Příčina se vrací jen v debug režimu.
    pub fn to_response(&self, debug: bool) -> (StatusCode, String) {
        let body = if debug {
            self.to_string()
        } else {
            "Internal Server Error".to_string()
        };

        (StatusCode::INTERNAL_SERVER_ERROR, body)
    }
}
