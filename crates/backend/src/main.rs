pub mod handlers;
pub mod projections;
pub mod shared;
pub mod system;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::http::{header, Method};
    use axum::middleware;
    use axum::{routing::get, Router};
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::services::ServeDir;

    system::tracing::initialize()?;

    let config = shared::config::load_config()?;
    let db_path = shared::config::get_database_path(&config)?;

    shared::data::db::initialize_database(&db_path)
        .await
        .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        // Settings (key/value store)
        .route("/api/settings", get(handlers::sys_settings::list_all))
        .route(
            "/api/settings/:key",
            get(handlers::sys_settings::get_setting)
                .put(handlers::sys_settings::save_setting)
                .delete(handlers::sys_settings::delete_setting),
        )
        // Lodging fixtures
        .route("/api/guests", get(handlers::lodging::list_guests))
        .route("/api/rooms", get(handlers::lodging::list_rooms))
        .route("/api/bookings", get(handlers::lodging::list_bookings))
        // Data browser
        .route(
            "/api/data-browser/tables",
            get(handlers::data_browser::list_tables),
        )
        .route(
            "/api/data-browser/tables/:name",
            get(handlers::data_browser::get_rows),
        )
        // Reports
        .route(
            "/api/reports/occupancy",
            get(handlers::p900_occupancy_report::get_report),
        )
        .route(
            "/api/reports/occupancy/csv",
            get(handlers::p900_occupancy_report::export_csv),
        )
        .fallback_service(ServeDir::new("dist"))
        .layer(middleware::from_fn(system::middleware::request_logger::request_logger))
        .layer(cors);

    let addr: SocketAddr = ([0, 0, 0, 0], config.server.port).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    config.server.port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", config.server.port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
