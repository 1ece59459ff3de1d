use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

mod catalog;
mod cli;
mod compose;
mod config;
mod errors;
mod extract;
mod log;
mod prompt;
mod provider;
mod proxy;
mod server;
mod wire;

use catalog::Catalogs;
use cli::Command;
use compose::{ComposeOptions, PromptComposer, PromptKind};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    log::init_tracing(args.debug);

    let catalogs = Catalogs::builtin();
    catalogs.validate().context("built-in catalogs are inconsistent")?;

    let mut cfg = config::Config::load(args.config.as_deref())
        .context("failed to load configuration")?;

    match args.command() {
        Command::Serve(serve) => {
            serve.apply(&mut cfg);
            let provider = provider::make_provider(&cfg)?;
            let proxy = proxy::GenerationProxy::new(provider, catalogs, proxy::ProxySettings::from_config(&cfg));
            let state = server::AppState { proxy: Arc::new(proxy), catalogs, port: cfg.port };

            let addr = cfg.bind_addr();
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("failed to bind {addr}"))?;
            info!(model = %cfg.model, api_key = cfg.has_api_key(), "starting server");
            server::serve(listener, state).await?;
        }
        Command::Compose(c) => {
            let mut rng = match c.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let kind = if c.business || c.custom.is_some() { PromptKind::Business } else { PromptKind::Portfolio };
            let options = ComposeOptions { include_metrics: !c.no_metrics, ..ComposeOptions::default() };
            let composition = PromptComposer::new(catalogs).compose_kind(&mut rng, kind, &options, c.custom.as_deref());
            println!("{}", serde_json::to_string_pretty(&composition)?);
        }
    }

    Ok(())
}
