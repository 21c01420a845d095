use backoffice::catalog::{DocumentItemsRepository, InMemoryItemsRepository, ItemsRepository};
use backoffice::config::{StoreBackend, StoreConfig};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) store: Arc<dyn ItemsRepository>,
}

/// Picks the item store described by the configuration.
pub(crate) fn build_repository(config: &StoreConfig) -> Arc<dyn ItemsRepository> {
    match &config.backend {
        StoreBackend::Memory if config.seed_demo_items => {
            info!("using seeded in-memory item store");
            Arc::new(InMemoryItemsRepository::seeded())
        }
        StoreBackend::Memory => {
            info!("using in-memory item store");
            Arc::new(InMemoryItemsRepository::new())
        }
        StoreBackend::Document { path } => {
            if config.seed_demo_items {
                warn!("ITEMS_SEED is ignored for the document store");
            }
            info!(path = %path.display(), "using document item store");
            Arc::new(DocumentItemsRepository::new(path.clone()))
        }
    }
}
