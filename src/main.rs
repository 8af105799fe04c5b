use std::{env, net::SocketAddr};

use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

use traffic_dashboard::{AppState, load_table, resolve_data_path, router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let data_path = resolve_data_path();
    let table = match load_table(&data_path).await {
        Ok(table) => {
            info!("loaded {} tool records from {}", table.len(), data_path.display());
            table
        }
        Err(err) => {
            // A missing or malformed table is reported once; the dashboard
            // then serves its empty state instead of refusing to start.
            error!("failed to load traffic table from {}: {err}", data_path.display());
            Vec::new()
        }
    };

    let state = AppState::new(table);
    let app = router(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
