//! file: main.rs
//! author: Jacob Xie
//! date: 2026/10/18 12:55:27 Sunday
//! brief:

use anyhow::Context;
use clap::Parser;
use gpui_maze::{
    app,
    config::Config,
    maze::{MazeModel, Redraw},
};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let model = MazeModel::with_observer(config.rows, config.cols, Redraw::default())
        .context("failed to build maze")?;

    app::run(model, config);
    Ok(())
}
