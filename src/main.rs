use std::{env, path::PathBuf};

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use boxdemo::config::DemoConfig;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let config = DemoConfig::resolve(env::args_os().nth(1).map(PathBuf::from))?;
    boxdemo::run(config)
}
