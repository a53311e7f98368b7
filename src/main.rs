use anyhow::Context;
use bounded_sets::config::Config;
use bounded_sets::logging;
use bounded_sets::menu::{Menu, MenuSettings};
use clap::Parser;
use log::info;
use std::io;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    let _logger = logging::init(&config.log_level)
        .with_context(|| format!("invalid log specification `{}`", config.log_level))?;

    let mut workspace = config.load_workspace()?;
    info!("starting with {} set(s)", workspace.len());

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(
        &mut workspace,
        MenuSettings::from(&config),
        stdin.lock(),
        stdout.lock(),
    )
    .run()
    .context("console I/O failed")?;

    Ok(())
}
