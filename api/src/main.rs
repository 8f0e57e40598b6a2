use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use api::{cors::cors_layer, middleware::log_request, routes::routes};
use axum::middleware::from_fn;
use monitor::{
    config::AppConfig,
    deployment::DeploymentInfo,
    sampler::{ResourceSampler, SysinfoSampler},
    state::AppState,
};
use tokio::net::TcpListener;
use tracing::info;
use tracing_appender::rolling;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration and initialize logging
    let config = AppConfig::from_env();
    let _log_guard = init_logging(&config);

    // Capture the deployment context once; handlers only ever read it
    let sampler = SysinfoSampler::new(config.cpu_sample_interval);
    let hostname = sampler.host_facts().hostname;
    let deployment = DeploymentInfo::new(&config, hostname);

    info!("Starting {}", config.app_name);
    info!("Container: {}", deployment.container_color);
    info!("Environment: {}", deployment.environment);
    info!("Version: {}", deployment.version);
    info!("Started at: {}", deployment.start_time.to_rfc3339());
    info!(
        cpu_sample_ms = sampler.cpu_interval().as_millis() as u64,
        process_limit = config.process_limit,
        "Sampler configured"
    );

    let cors = cors_layer(&config)?;
    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .with_context(|| format!("invalid listen address {}", config.bind_address()))?;

    let app_state = AppState::new(config, deployment, Arc::new(sampler));

    // Build app router
    let app = routes(app_state.clone())
        .layer(from_fn(log_request))
        .layer(cors);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Listening on http://{addr}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

    let deployment = app_state.deployment();
    info!("Shutting down {}", app_state.config().app_name);
    info!("Container: {}", deployment.container_color);
    info!("Uptime: {:.3} seconds", deployment.uptime_seconds());

    Ok(())
}

fn init_logging(config: &AppConfig) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    std::fs::create_dir_all(&config.log_dir).ok();

    let file_appender = rolling::daily(&config.log_dir, &config.log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true);

    let stdout_layer = config.log_to_stdout.then(|| {
        fmt::layer()
            .with_writer(std::io::stdout)
            .with_ansi(true)
            .with_target(true)
            .with_thread_ids(true)
    });

    let env_filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new("api=info,monitor=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    guard
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
