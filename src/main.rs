use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use skycast_core::Config;
use skycast_ui::DashboardApp;

/// Terminal weather dashboard
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about)]
struct Args {
    /// City to look up; omit for an interactive prompt
    city: Vec<String>,

    /// Use the configured location instead of a city
    #[arg(long, conflicts_with = "city")]
    here: bool,

    /// Path to the config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the dashboard API base URL
    #[arg(long)]
    api_url: Option<String>,
}

const PROMPT: &str = "city (:here, :quit)> ";

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    skycast_core::init()?;

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(url) = args.api_url {
        config.api.base_url = url;
    }
    let (config, _) = config.validated()?;

    let mut app = DashboardApp::new(config).context("Failed to start dashboard")?;
    tracing::info!("SkyCast started");

    if args.here {
        app.locate().await;
        println!("{}", app.render(today()));
        return Ok(());
    }

    if !args.city.is_empty() {
        app.search(&args.city.join(" ")).await;
        println!("{}", app.render(today()));
        return Ok(());
    }

    println!("{}", app.render(today()));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{}", PROMPT);
        std::io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };

        match line.trim() {
            ":quit" | ":q" => break,
            ":here" => app.locate().await,
            input => app.search(input).await,
        }
        println!();
        println!("{}", app.render(today()));
    }

    tracing::info!("Shutting down");
    Ok(())
}
