mod app;
mod base;
pub mod config;
pub mod controller;
pub mod model;

use anyhow::Result;

use app::App;
use config::DemoConfig;

pub fn run(config: DemoConfig) -> Result<()> {
    App::run(config)
}
