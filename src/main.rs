use clap::Parser;
use marquee::core::config::{load_config, resolve};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "marquee", about = "Terminal client for a movie collection server")]
struct Args {
    /// Server base URL (overrides MARQUEE_BASE_URL and the config file)
    #[arg(long)]
    base_url: Option<String>,

    /// Config file to read instead of ~/.marquee/config.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("marquee: {e}");
            std::process::exit(1);
        }
    };
    let config = resolve(&file_config, args.base_url.as_deref());

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }

    for warning in &config.warnings {
        log::warn!("{warning}");
        eprintln!("marquee: {warning}");
    }
    log::info!("Marquee starting up against {}", config.base_url);

    marquee::tui::run(config)
}
