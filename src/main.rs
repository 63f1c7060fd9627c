pub mod cli;
pub mod config;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::content;

use std::sync::Arc;

use anyhow::{bail, Context};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::application::ports::outgoing::PasswordHasher;
use crate::auth::application::services::AdminSession;
use crate::auth::application::use_cases::login_admin::LoginAdminUseCase;
use crate::cli::{Cli, Command};
use crate::config::{AppConfig, MirrorBackend};
use crate::content::adapter::outgoing::{FileMirrorStore, HttpResourceApi, InMemoryMirrorStore};
use crate::content::application::ports::outgoing::MirrorStore;
use crate::content::application::services::PortfolioSync;
use crate::shared::data_uri::Document;

#[cfg(test)]
mod tests;

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn start(cli: Cli) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().context("invalid configuration")?;
    info!(
        environment = %config.environment,
        api = %config.api_base_url,
        mirror = ?config.mirror_backend,
        "Starting portfolio sync"
    );

    let mirror: Arc<dyn MirrorStore> = match config.mirror_backend {
        MirrorBackend::File => Arc::new(FileMirrorStore::new(config.mirror_dir.clone())),
        MirrorBackend::Memory => Arc::new(InMemoryMirrorStore::new()),
    };
    let api = Arc::new(HttpResourceApi::new(config.api_base_url.clone()));
    let sync = PortfolioSync::new(api, Arc::clone(&mirror));

    let hasher = Arc::new(Argon2Hasher::from_env());
    let session = AdminSession::new(
        LoginAdminUseCase::new(config.admin.clone(), hasher.clone()),
        Arc::clone(&mirror),
    );
    if let Some(user) = session.restore().await {
        info!(username = %user.username, "Restored admin session");
    }

    match cli.command() {
        Command::Snapshot => {
            let report = sync.load().await;
            info!(fully_remote = report.is_fully_remote(), "Snapshot ready");
            let state = sync.snapshot().await;
            println!("{}", serde_json::to_string_pretty(&state)?);
        }
        Command::Health => match sync.health().await {
            Ok(health) if health.is_ok() => println!("ok"),
            Ok(health) => bail!("API reported status '{}'", health.status),
            Err(e) => bail!("API unreachable: {}", e),
        },
        Command::ExportResume { path } => {
            sync.load().await;
            let profile = sync.profile().await;
            match profile.resume_document()? {
                Some(Document::Embedded(uri)) => {
                    std::fs::write(&path, uri.bytes())
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("{} ({})", path.display(), uri.mime_type());
                }
                Some(Document::Link(url)) => println!("{}", url),
                None => bail!("profile has no resume"),
            }
        }
        Command::HashPassword { password } => {
            let hash = hasher.hash_password(&password).await?;
            println!("{}", hash);
        }
        Command::Login { username, password } => {
            let username = username.unwrap_or_else(|| config.admin.username.clone());
            let user = session.login(&username, &password).await?;
            println!("Signed in as {}", user.username);
        }
        Command::Logout => {
            session.logout().await;
            println!("Signed out");
        }
    }

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() {
    let cli = Cli::parse();
    if let Err(e) = start(cli) {
        error!(error = %e, "portfolio_sync failed");
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
