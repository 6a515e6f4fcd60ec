use axum::{routing::get, Router};
use marketplace_backend::{
    config::{get_config, init_config},
    catalog::JobCatalog,
    routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let catalog = JobCatalog::seeded();
    info!("Seeded job catalog with {} postings", catalog.len());
    let app_state = AppState::new(catalog);

    let base_routes = Router::new().route("/health", get(routes::health::health));

    let public_api = Router::new()
        .route(
            "/api/public/jobs",
            get(routes::jobs::list_jobs).post(routes::jobs::create_job),
        )
        .route(
            "/api/public/jobs/filters",
            get(routes::jobs::get_filter_options),
        )
        .route("/api/public/jobs/:id", get(routes::jobs::get_job))
        .route(
            "/api/public/jobs/:id/proposals",
            get(routes::proposals::list_proposals).post(routes::proposals::submit_proposal),
        )
        .route(
            "/api/public/freelancers/:address",
            get(routes::profiles::get_profile),
        )
        .layer(axum::middleware::from_fn_with_state(
            marketplace_backend::middleware::rate_limit::new_rps_state(config.public_rps),
            marketplace_backend::middleware::rate_limit::rps_middleware,
        ));

    let app = base_routes
        .merge(public_api)
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
