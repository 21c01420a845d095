use crate::cli::ServeArgs;
use crate::infra::{build_repository, AppState};
use crate::routes::with_item_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use backoffice::catalog::{ItemService, ItemsRepository};
use backoffice::config::{AppConfig, StoreBackend};
use backoffice::error::AppError;
use backoffice::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));

    if let StoreBackend::Document { path } = &config.store.backend {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let store: Arc<dyn ItemsRepository> = build_repository(&config.store);
    store.check_health().await?;

    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        store: store.clone(),
    };
    let item_service = Arc::new(ItemService::new(store));

    let app = with_item_routes(item_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "item catalog service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
