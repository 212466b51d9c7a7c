use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, AppSettingsService, Clock, StatsService, TrainingLoopService};
use ui::{App, UiApp, build_app_context};

mod cli;
mod db;
mod logging;
mod report;

use cli::{Cli, Command};

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn training(&self) -> Arc<TrainingLoopService> {
        self.services.training()
    }

    fn stats(&self) -> Arc<StatsService> {
        self.services.stats()
    }

    fn app_settings(&self) -> Arc<AppSettingsService> {
        self.services.app_settings()
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(&cli.log);

    // Open + migrate SQLite at startup; core and services never touch the filesystem.
    let db_url = db::normalize_sqlite_url(&cli.db);
    db::prepare_sqlite_file(&db_url)?;
    let services = AppServices::new_sqlite(&db_url, Clock::system())
        .await
        .with_context(|| format!("opening database {db_url}"))?;
    tracing::info!(db = %db_url, "database ready");

    match cli.command() {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Brain Trainer")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Stats { json, recent } => {
            let overview = services
                .stats()
                .overview(recent)
                .await
                .context("loading statistics")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&overview)?);
            } else {
                print!("{}", report::render_text(&overview));
            }
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err:#}");
        std::process::exit(2);
    }
}
