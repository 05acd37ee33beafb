//! Service entry point.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --listen 127.0.0.1:5000
//! ```

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use urlshortener::config::{self, Config};
use urlshortener::server;

/// Basic in-memory URL shortener.
#[derive(Parser)]
#[command(name = "urlshortener")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind address, overrides `LISTEN`
    #[arg(short, long)]
    listen: Option<String>,

    /// Directory holding index.html, overrides `STATIC_DIR`
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

impl Cli {
    fn apply(self, config: &mut Config) {
        if let Some(listen) = self.listen {
            config.listen_addr = listen;
        }
        if let Some(static_dir) = self.static_dir {
            config.static_dir = static_dir;
        }
    }
}

fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = config::load_from_env()?;
    cli.apply(&mut config);
    config.validate()?;

    init_tracing(&config)?;
    config.print_summary();

    server::run(config).await
}
