use std::sync::Arc;

use alunos_db::repositories::PgStudentRepo;
use tokio::net::TcpListener;

use alunos_api::config::{Environment, LogFormat, ServerConfig};
use alunos_api::router::build_app_router;
use alunos_api::services::StudentService;
use alunos_api::startup::{init_tracing, StartupError};
use alunos_api::state::AppState;

#[tokio::main]
async fn main() {
    // .env is only consulted outside production.
    let environment = Environment::from_env();
    let dotenv_result = environment.loads_env_file().then(dotenvy::dotenv);

    // --- Tracing ---
    init_tracing(LogFormat::from_env());

    match dotenv_result {
        Some(Ok(path)) => tracing::info!(path = %path.display(), "Loaded .env file"),
        Some(Err(err)) => tracing::warn!(error = %err, "No .env file loaded"),
        None => {}
    }

    if let Err(err) = run(environment).await {
        tracing::error!(error = %err, "Fatal startup error");
        std::process::exit(1);
    }
}

async fn run(environment: Environment) -> Result<(), StartupError> {
    // --- Configuration ---
    let config = ServerConfig::from_env(environment)?;
    tracing::info!(
        environment = config.environment.as_str(),
        host = %config.host,
        port = config.port,
        max_connections = config.max_connections,
        "Loaded server configuration"
    );

    // --- Database ---
    let pool = alunos_db::create_pool(&config.database_url, config.max_connections).await?;
    tracing::info!("Database connection pool created");

    alunos_db::health_check(&pool).await?;
    tracing::info!("Database health check passed");

    alunos_db::run_migrations(&pool).await?;
    tracing::info!("Database migrations applied");

    // --- App state ---
    let store = Arc::new(PgStudentRepo::new(pool.clone()));
    let state = AppState {
        students: StudentService::new(store),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;
    tracing::info!(%addr, "Starting server");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    // --- Post-shutdown cleanup ---
    pool.close().await;
    tracing::info!("Database connection pool closed");

    served.map_err(StartupError::Serve)
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
