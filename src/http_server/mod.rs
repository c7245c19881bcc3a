//! HTTP server module

use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json, Router,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;

pub mod documentation;
pub mod error;
pub mod notifications;
pub mod templates;

pub use error::ApiError;

use crate::{
    config::AppConfig,
    notification::{NotificationService, audit::AuditLog},
    persistence::traits::BlobStore,
    registry::{DocumentationRegistry, TemplateRegistry},
    secrets::SecretStore,
};

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct ApiState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Registry managing the template collection.
    pub templates: TemplateRegistry,
    /// Registry managing the documentation collection.
    pub documentation: DocumentationRegistry,
    /// Dispatcher for SMS notification requests.
    pub notifier: Arc<NotificationService>,
}

impl ApiState {
    /// Wires the registries and the notification service over the given
    /// collaborators.
    pub fn new(
        config: Arc<AppConfig>,
        store: Arc<dyn BlobStore>,
        secrets: Arc<dyn SecretStore>,
    ) -> Self {
        let notifier = Arc::new(NotificationService::new(
            config.notifications.throttle_window,
            AuditLog::new(Arc::clone(&store)),
            secrets,
        ));
        Self {
            config,
            templates: TemplateRegistry::new(Arc::clone(&store)),
            documentation: DocumentationRegistry::new(store),
            notifier,
        }
    }
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Builds the application router over the given state.
pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/notifications/sms", post(notifications::send_sms_notification))
        .route("/notifications/logs", get(notifications::get_notification_logs))
        .route(
            "/api/documentation/templates",
            get(templates::get_templates).post(templates::create_template),
        )
        .route(
            "/api/documentation/templates/{template_id}",
            get(templates::get_template)
                .put(templates::update_template)
                .delete(templates::delete_template),
        )
        .route("/api/documentation", post(documentation::create_documentation))
        .route("/api/documentation/seed", post(templates::seed_templates))
        .route(
            "/api/documentation/patient/{patient_id}",
            get(documentation::get_patient_documentations),
        )
        .route(
            "/api/documentation/encounter/{encounter_id}",
            get(documentation::get_encounter_documentations),
        )
        .route(
            "/api/documentation/{documentation_id}",
            get(documentation::get_documentation).put(documentation::update_documentation),
        )
        .with_state(state)
}

/// Runs the HTTP server based on the provided application configuration.
pub async fn run_server_from_config(
    config: Arc<AppConfig>,
    store: Arc<dyn BlobStore>,
    secrets: Arc<dyn SecretStore>,
) {
    let addr: SocketAddr =
        config.server.listen_address.parse().expect("Invalid server.listen_address format");

    let state = ApiState::new(config, store, secrets);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await.expect("Failed to bind address");

    tracing::info!(%addr, "HTTP server listening.");
    axum::serve(listener, app.into_make_service()).await.expect("Server failed");
}
