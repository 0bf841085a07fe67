use std::path::Path;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;
use epr_core::Store;

/// Main entry point for the EPR application
///
/// Opens the SQLite store (running any pending migrations) and starts the
/// REST server with OpenAPI/Swagger documentation.
///
/// # Environment Variables
/// - `EPR_ADDR`: REST server address (default: "0.0.0.0:5000")
/// - `EPR_DB_PATH`: SQLite database file (default: "data.db")
/// - `EPR_DEMO_PASSWORD`: password accepted by the demo login (default: "test")
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If startup or runtime fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("epr=info".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("EPR_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".into());
    let db_path = std::env::var("EPR_DB_PATH").unwrap_or_else(|_| "data.db".into());

    tracing::info!("++ Starting EPR REST on {}", addr);
    tracing::info!("++ Using database at {}", db_path);

    let store = Store::open(Path::new(&db_path))?;
    let state = AppState::new(store);

    api_rest::serve(&addr, state).await?;

    Ok(())
}
