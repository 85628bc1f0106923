//! userdir: command-line client for the user directory API.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use userdir::config::Config;
use userdir::constants;
use userdir::dashboard::DashboardView;
use userdir::directory::DirectoryClient;
use userdir::env::Env;
use userdir::models::{FilterRequest, PageResult};
use userdir::transport::HttpTransport;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::args::{Cli, Command};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("failed to determine working directory")?;
    let mut config = Config::load(Some(&cwd), &Env::real()).context("failed to load config")?;
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }
    if let Some(token) = cli.token {
        config.api.token = Some(token);
    }

    init_logging(&config.log.level);

    let renderer = cli.format.renderer();

    let client = || -> Result<DirectoryClient> {
        let transport = HttpTransport::from_config(&config.api)
            .context("failed to set up HTTP transport")?;
        Ok(DirectoryClient::new(transport))
    };

    let output = match cli.command {
        Command::List(args) => {
            let body = client()?
                .list_users(args.page, args.search.as_deref(), args.role.as_deref())
                .await?;
            match serde_json::from_value::<PageResult>(body.clone()) {
                Ok(page) => renderer.render_page(&page),
                Err(_) => renderer.render_value(&body),
            }
        }
        Command::Add { payload } => renderer.render_value(&client()?.add_user(&payload).await?),
        Command::Delete { id } => renderer.render_value(&client()?.delete_user(&id).await?),
        Command::Edit { id, patch } => {
            renderer.render_value(&client()?.edit_user(&id, &patch).await?)
        }
        Command::Get { id } => renderer.render_user(&client()?.get_user(&id).await?),
        Command::Filter(args) => {
            let request = FilterRequest::new(args.page, args.filter, args.page_size);
            renderer.render_page(&client()?.list_users_by_filter(&request).await?)
        }
        Command::Dashboard { path } => DashboardView::from_config(&config.dashboard).render(&path),
        Command::Version => format!("{} {}\n", constants::APP_NAME, constants::VERSION),
    };

    print!("{output}");
    Ok(())
}

/// Install the stderr log subscriber. `USERDIR_LOG` wins over the config level.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
