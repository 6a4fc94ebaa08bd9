use anyhow::Context as _;
use clap::Parser;
use travelmux_providers::{ProviderCatalog, ProviderSettings};
use travelmux_server::state::AppState;
use travelmux_server::{build_router, config};

#[derive(Parser, Debug)]
#[command(name = "travelmux-server", version, about = "Travel tool gateway: REST facade + MCP surface")]
struct Cli {
    /// Listen port. Overrides the PORT environment variable.
    #[arg(long)]
    port: Option<u16>,

    /// Bind address.
    #[arg(long, default_value = "0.0.0.0")]
    bind: String,

    /// Emit logs as JSON.
    #[arg(long, env = "LOG_JSON")]
    log_json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let settings = ProviderSettings::from_env();
    for name in settings.missing_credentials() {
        tracing::warn!(
            credential = name,
            "credential not set; dependent tools will fail at call time"
        );
    }

    let catalog = ProviderCatalog::new(&settings).context("build provider catalog")?;
    let app = build_router(AppState::new(catalog));

    let port = config::resolve_port(cli.port);
    let addr = format!("{}:{}", cli.bind, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serve")?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
