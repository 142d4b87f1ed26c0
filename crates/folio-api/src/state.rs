//! Application state

use folio_auth::AuthService;
use folio_store::ContentStore;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContentStore>,
    pub auth: Arc<AuthService>,
    /// Mark session cookies `Secure` (on in production)
    pub secure_cookies: bool,
}

impl AppState {
    pub fn new(store: Arc<dyn ContentStore>, auth: Arc<AuthService>, secure_cookies: bool) -> Self {
        Self {
            store,
            auth,
            secure_cookies,
        }
    }
}

/// Handle for rendering Prometheus metrics
#[derive(Clone)]
pub struct MetricsHandle {
    handle: PrometheusHandle,
}

impl MetricsHandle {
    pub fn new(handle: PrometheusHandle) -> Self {
        Self { handle }
    }

    pub fn render(&self) -> String {
        self.handle.render()
    }
}
