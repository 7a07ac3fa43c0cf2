//! Chatterbox message board server entry point.
//!
//! Binary name: `chatterbox`
//!
//! Parses CLI flags, loads the database profile for the selected
//! environment, wires the notification bus and message service, starts the
//! two bot workers, and serves the HTTP API until shutdown.

mod http;
mod state;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use chatterbox_core::bot::echo::EchoResponder;
use chatterbox_core::bot::gacha::GachaResponder;
use chatterbox_core::bot::worker::BotWorker;
use chatterbox_core::notify::NotificationBus;
use chatterbox_core::notify::bus::DEFAULT_LANE_CAPACITY;
use chatterbox_infra::client::HttpMessagePoster;
use chatterbox_types::bot::BotKind;
use state::AppState;

/// Chat-style message board with echo and gacha bots.
#[derive(Debug, Parser)]
#[command(name = "chatterbox", version, about)]
struct Cli {
    /// Listening port.
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Listening address.
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Application environment (selects the database profile).
    #[arg(long, default_value = "development")]
    env: String,

    /// Database configuration file.
    #[arg(long, default_value = "dbconfig.toml", value_name = "FILE")]
    db_config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,chatterbox=debug")),
        )
        .with_target(false)
        .init();

    let db_config = chatterbox_infra::config::load_db_config(&cli.db_config).await;
    let database_url = db_config.url_for(&cli.env);
    tracing::info!(env = %cli.env, url = %database_url, "using database profile");

    // Lanes are opened before the state exists so the workers own their
    // receivers for the process lifetime.
    let mut bus = NotificationBus::new();
    let echo_rx = bus.open_lane(BotKind::Echo, DEFAULT_LANE_CAPACITY);
    let gacha_rx = bus.open_lane(BotKind::Gacha, DEFAULT_LANE_CAPACITY);
    let bus = Arc::new(bus);

    let state = AppState::init(&database_url, Arc::clone(&bus)).await?;

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    // Bots post back over the same HTTP interface external clients use.
    // Workers start after the listener is bound so their first reply has
    // somewhere to go.
    let base_url = format!("http://127.0.0.1:{}", cli.port);
    let cancel = CancellationToken::new();

    let echo_handle = tokio::spawn(
        BotWorker::new(
            EchoResponder::new(),
            HttpMessagePoster::new(&base_url)?,
            echo_rx,
            cancel.clone(),
        )
        .run(),
    );
    let gacha_handle = tokio::spawn(
        BotWorker::new(
            GachaResponder::new(),
            HttpMessagePoster::new(&base_url)?,
            gacha_rx,
            cancel.clone(),
        )
        .run(),
    );

    println!(
        "  {} Chatterbox listening on {}",
        console::style("⚡").bold(),
        console::style(format!("http://{addr}")).cyan()
    );
    println!("  {}", console::style("Press Ctrl+C to stop").dim());

    let router = http::router::build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Stop the workers after the server drains; undelivered lane events are
    // lost per the bus drop policy.
    cancel.cancel();
    let _ = echo_handle.await;
    let _ = gacha_handle.await;

    println!("\n  Server stopped.");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
