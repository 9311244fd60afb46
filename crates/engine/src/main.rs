//! Bootsy Engine - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bootsy_engine::infrastructure::{
    clock::SystemClock,
    persistence::{SqliteContainerRepo, SqliteDatabase, SqliteImageGalleryRepo},
    ports::ClockPort,
    settings::BootsySettings,
};
use bootsy_engine::{api, App};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary may be run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bootsy_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Bootsy Engine");

    // Load configuration
    let settings = BootsySettings::from_env()?;
    tracing::info!(
        database = %settings.database_path,
        editor_flags = settings.editor_options.len(),
        "Settings loaded"
    );

    // Create clock for repositories
    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());

    // Open SQLite and ensure schema
    let db = SqliteDatabase::new(&settings.database_path).await?;
    db.initialize_schema().await?;

    let galleries = Arc::new(SqliteImageGalleryRepo::new(db.clone(), clock.clone()));
    let containers = Arc::new(SqliteContainerRepo::new(db, clock));

    let addr: SocketAddr = format!("{}:{}", settings.server_host, settings.server_port).parse()?;

    // Create application
    let app = Arc::new(App::new(settings, galleries, containers));

    let router = api::http::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
