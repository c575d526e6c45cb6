use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use mockchat::Provider;
use mockchat::core::config::{self, CliOverrides};
use mockchat::tui;
use simplelog::{ConfigBuilder, WriteLogger};

#[derive(Parser)]
#[command(name = "mockchat", about = "Terminal chat with a simulated assistant")]
struct Args {
    /// Response generator to use
    #[arg(short, long, value_enum)]
    provider: Option<Provider>,

    /// Simulated response latency in milliseconds
    #[arg(long)]
    latency_ms: Option<u64>,

    /// Give up on a reply after this many milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Thinking animation frame interval in milliseconds
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<LevelFilter>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            provider: self.provider,
            latency_ms: self.latency_ms,
            timeout_ms: self.timeout_ms,
            tick_ms: self.tick_ms,
            log_level: self.log_level,
            log_file: self.log_file.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Config errors are reported once the logger is up
    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (config::ChatConfig::default(), Some(e)),
    };
    let resolved = config::resolve(&file_config, &args.overrides());

    // Initialize file logger - stdout belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    if let Some(e) = config_error {
        log::warn!("Falling back to default config: {}", e);
    }
    log::info!("Mockchat starting up with config: {:?}", resolved);

    tui::run(resolved).await
}
