#![cfg(not(tarpaulin_include))]

use clap::Parser;
use hr_dashboard::app::{self, InitialLoad};
use hr_dashboard::config::DashboardConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hr-dashboard")]
#[command(about = "Persian HR analytics dashboard over employee workbooks")]
#[command(version)]
struct Cli {
    /// Workbook (.xlsx or .xls) to load on start
    #[arg(short, long, conflicts_with = "demo")]
    file: Option<PathBuf>,

    /// Start with generated sample data, optionally with a record count
    #[arg(long)]
    demo: Option<Option<usize>>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Persian year ages and tenures are measured against
    #[arg(long)]
    reference_year: Option<i32>,

    /// Default record count for generated sample data
    #[arg(long)]
    sample_size: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => DashboardConfig::from_json_file(path)?,
        None => DashboardConfig::default(),
    };
    if let Some(year) = cli.reference_year {
        config.reference_year = year;
    }
    if let Some(size) = cli.sample_size {
        config.sample_size = size;
    }
    log::debug!("configuration: {:?}", config);

    let initial = match (cli.file, cli.demo) {
        (Some(path), _) => Some(InitialLoad::File(path)),
        (None, Some(count)) => Some(InitialLoad::Demo(count.unwrap_or(config.sample_size))),
        (None, None) => None,
    };

    app::run(config, initial).await
}
