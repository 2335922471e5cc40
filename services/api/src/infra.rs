use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;
use trustnova::banks::BankDirectory;
use trustnova::error::AppError;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Opens the bank table and loads it once so a broken table stops startup
/// instead of failing the first request.
pub(crate) fn warm_bank_directory(path: &Path) -> Result<Arc<BankDirectory>, AppError> {
    let directory = Arc::new(BankDirectory::from_path(path));
    let offers = directory.offers()?;
    info!(path = %path.display(), offers = offers.len(), "bank directory ready");
    Ok(directory)
}
