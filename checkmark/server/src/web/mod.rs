use axum::Router;
use axum::http::HeaderValue;
use migration::MigratorTrait;
use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::checkmark::api::ApiDoc;
use crate::checkmark::{
    CheckmarkService, CheckmarkState, SeaOrmCheckmarkRepository, create_checkmark_router,
};
use crate::config::Config;

#[tracing::instrument(skip(config))]
pub async fn start_web_server(config: Config) -> anyhow::Result<()> {
    let db = Database::connect(&config.database_url).await?;
    migration::Migrator::up(&db, None).await?;
    tracing::info!("Database migrations applied successfully");

    let app = create_app(db, &config)?;

    let server_address = format!("0.0.0.0:{}", &config.port);
    let listener = tokio::net::TcpListener::bind(&server_address).await?;
    tracing::info!("Web server running on http://{}", server_address);

    axum::serve(listener, app).await?;
    Ok(())
}

/// Wires repository, service and routes together over an open connection.
///
/// The connection must already be migrated.
pub fn create_app(db: DatabaseConnection, config: &Config) -> anyhow::Result<Router> {
    let repository = Arc::new(SeaOrmCheckmarkRepository::new(db));
    let service = Arc::new(CheckmarkService::new(repository));
    let checkmark_router = create_checkmark_router(CheckmarkState { service });

    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.parse::<HeaderValue>()?)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", axum::routing::get(health_check_handler))
        .merge(checkmark_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        );
    Ok(app)
}

#[tracing::instrument]
pub async fn health_check_handler() -> &'static str {
    "OK"
}
