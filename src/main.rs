use recruiting_crm_backend::{
    config::{get_config, init_config},
    database::{pool::create_pool, seed::seed_initial_clients},
    middleware::cors::permissive_cors,
    routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    init_config()?;
    let config = get_config();

    let pool = create_pool(&config.database_url).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    seed_initial_clients(&pool).await?;

    let app_state = AppState::new(pool);

    let mut app = routes::router(app_state)
        .layer(permissive_cors())
        .layer(TraceLayer::new_for_http());

    let dist = std::path::Path::new(&config.frontend_dist);
    if dist.is_dir() {
        info!("Serving frontend from {}", config.frontend_dist);
        app = app.fallback_service(ServeDir::new(dist));
    }

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
