//! Router assembly and server lifecycle.

use crate::config::Settings;
use crate::handlers::{
    catalog::list_catalog,
    discharge::{download_discharge_summary, generate_discharge_summary},
    health::{health_check, metrics_endpoint},
    invoices::{create_invoice, invoice_pdf, list_invoices},
    options::{add_option, list_options, remove_option},
    patients::search_patients,
    pricing::{invoice_totals, price_line_item},
};
use crate::services::{BackendClient, InMemoryOptionsRepository};
use crate::AppState;
use axum::{
    middleware::from_fn,
    routing::{delete, get, post},
    Router,
};
use document_service::{DischargeSummaryGenerator, FileLogoSource, LocalStorage};
use invoicing_service::services::HttpInvoiceStore;
use service_core::error::AppError;
use service_core::middleware::{metrics_middleware, request_id_middleware, REQUEST_ID_HEADER};
use service_core::shutdown::shutdown_signal;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    let api = Router::new()
        .route("/pricing/line-items", post(price_line_item))
        .route("/pricing/totals", post(invoice_totals))
        .route("/invoices", get(list_invoices).post(create_invoice))
        .route("/invoices/:invoice_id/pdf", get(invoice_pdf))
        .route("/patients/search", get(search_patients))
        .route("/catalog/:kind", get(list_catalog))
        .route("/discharge-summaries", post(generate_discharge_summary))
        .route(
            "/discharge-summaries/:file_name",
            get(download_discharge_summary),
        )
        .route(
            "/dropdown-options/:category",
            get(list_options).post(add_option),
        )
        .route("/dropdown-options/:category/:value", delete(remove_option));

    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_endpoint))
        .nest("/api", api)
        .fallback_service(ServeDir::new(static_dir))
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

/// Wire the collaborators named in `settings` into an [`AppState`].
pub async fn build_state(settings: &Settings) -> Result<AppState, AppError> {
    let invoice_store = HttpInvoiceStore::new(&settings.backend.url, settings.backend.timeout())?;
    let backend = BackendClient::new(&settings.backend.url, settings.backend.timeout())?;

    let storage = LocalStorage::new(&settings.documents.storage_dir).await?;
    let branding = settings.documents.branding.clone();
    let logo = FileLogoSource::new(branding.logo_path.clone());
    let documents = DischargeSummaryGenerator::new(branding, Arc::new(logo), Arc::new(storage));

    let options = InMemoryOptionsRepository::new(settings.dropdowns.clone());

    Ok(AppState {
        invoice_store: Arc::new(invoice_store),
        backend: Arc::new(backend),
        documents: Arc::new(documents),
        options: Arc::new(options),
    })
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application; `server.port = 0` binds a random port.
    pub async fn build(settings: Settings) -> Result<Self, AppError> {
        let state = build_state(&settings).await?;
        let router = build_router(state, &settings.ui.static_dir);

        let address = format!("{}:{}", settings.server.host, settings.server.port);
        let addr: SocketAddr = address.parse().map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!("Invalid listen address {}: {}", address, e))
        })?;
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(port, backend = %settings.backend.url, "care-frontend listening");

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}
