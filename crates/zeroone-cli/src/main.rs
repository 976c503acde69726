mod badge;
mod command;
mod gate;
mod output;
mod run;

use anyhow::Context;
use tracing::warn;

use zeroone_api::{ApiClient, ClientConfig};
use zeroone_optimistic::{Coordinator, TracingNotifier};
use zeroone_session::Session;

use command::{Invocation, USAGE};
use gate::StdinGate;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zeroone=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Invocation {
        assume_yes,
        command,
    } = match Invocation::parse(&args) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("{}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    // Config
    let config = ClientConfig::from_env()?;
    let session = Session::new();
    let client = ApiClient::new(&config, session.clone())?;
    let badge = badge::watch_unread(session.subscribe());

    if command.needs_sign_in() {
        let credentials = config
            .credentials
            .as_ref()
            .context("set ZEROONE_USERNAME and ZEROONE_PASSWORD to sign in")?;
        client
            .sign_in(&credentials.username, &credentials.password)
            .await
            .context("sign in failed")?;
        if let Err(e) = client.refresh_unread_count().await {
            warn!("Could not load unread count: {}", e);
        }
    }

    let coordinator = Coordinator::new(client.clone(), TracingNotifier);
    let gate = StdinGate { assume_yes };
    let result = run::run(command, &client, &coordinator, &gate).await;

    // Every session handle must go before the watcher sees the end of the feed.
    drop(coordinator);
    drop(client);
    drop(session);
    if let Err(e) = badge.await {
        warn!("Unread watcher stopped abnormally: {}", e);
    }

    result
}
