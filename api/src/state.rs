use metrics_exporter_prometheus::PrometheusHandle;

use crate::service::PostService;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub service: PostService,
    pub metrics_handle: PrometheusHandle,
}

impl AppState {
    pub fn new(service: PostService, metrics_handle: PrometheusHandle) -> Self {
        Self {
            service,
            metrics_handle,
        }
    }
}
