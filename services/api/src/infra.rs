use metrics_exporter_prometheus::PrometheusHandle;
use pronounce_ai::assessment::DisabledOracle;
use pronounce_ai::config::AppConfig;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// The service ships without a cloud assessor adapter, so AI scoring requests
/// degrade to the local scorer.
pub(crate) fn oracle_from_config(config: &AppConfig) -> DisabledOracle {
    if !config.scoring.use_local_scoring {
        warn!("AI assessment requested but no assessor is configured; scoring locally");
    }
    DisabledOracle
}
