use std::io;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let configs = jar_checksums::parse_checksum_configs()?;
    jar_checksums::run(&configs, &mut io::stdout().lock())?;

    Ok(())
}
