use std::fs::File;
use std::path::PathBuf;

use atlas::core::config::{self, CliOverrides};
use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};

#[derive(Parser)]
#[command(name = "atlas", about = "Browse the countries of the world from your terminal")]
struct Args {
    /// Countries endpoint (defaults to REST Countries v3.1 /all)
    #[arg(long)]
    api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Where to write the log file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = config::load_config();
    let cli = CliOverrides {
        api_url: args.api_url,
        timeout_secs: args.timeout_secs,
        log_file: args.log_file,
    };
    let resolved = match &file_config {
        Ok(file_config) => config::resolve(file_config, &cli),
        Err(_) => config::resolve(&config::AtlasConfig::default(), &cli),
    };

    // File logger: stdout belongs to the terminal UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    if let Err(e) = &file_config {
        log::warn!("Ignoring config file: {}", e);
    }
    log::info!("Atlas starting up with endpoint: {}", resolved.api_url);

    atlas::tui::run(resolved)
}
