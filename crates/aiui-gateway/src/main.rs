use clap::Parser;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use aiui_gateway::app;

/// AIUI backend gateway — serves the prompt-to-template endpoint plus the
/// inventory and account fixtures the canned pages call back into.
#[derive(Debug, Parser)]
#[command(name = "aiui-gateway", version)]
struct Args {
    /// Path to the TOML config file (default: ~/.aiui/aiui.toml).
    #[arg(long, env = "AIUI_CONFIG")]
    config: Option<String>,
    /// Listen address, overriding the config file.
    #[arg(long)]
    bind: Option<String>,
    /// Listen port, overriding the config file.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aiui_gateway=info,tower_http=debug".into()),
        )
        .init();

    let args = Args::parse();

    // load config: --config flag > AIUI_CONFIG env > ~/.aiui/aiui.toml
    info!(
        source = %args.config.as_deref().unwrap_or("~/.aiui/aiui.toml"),
        "loading config"
    );
    let config = aiui_core::AiuiConfig::load(args.config.as_deref()).unwrap_or_else(|e| {
        tracing::warn!("Config load failed ({}), using defaults", e);
        aiui_core::AiuiConfig::default()
    });

    let bind = args.bind.unwrap_or_else(|| config.gateway.bind.clone());
    let port = args.port.unwrap_or(config.gateway.port);

    // template store: embedded assets unless an override directory is set
    let store = match config.templates.dir.as_deref() {
        Some(dir) => {
            info!(dir = %dir, "template store: applying overrides");
            aiui_templates::TemplateStore::load(Some(Path::new(dir)))?
        }
        None => {
            info!("template store: embedded assets");
            aiui_templates::TemplateStore::embedded()
        }
    };
    let dispatcher = aiui_templates::Dispatcher::new(aiui_templates::RuleSet::builtin(), store);
    info!(templates = dispatcher.template_count(), "dispatcher ready");

    let state = Arc::new(app::AppState::new(dispatcher));
    let router = app::build_router(state);

    let addr: SocketAddr = format!("{}:{}", bind, port).parse()?;
    info!("AIUI gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
