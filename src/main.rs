mod budget;
mod config;
mod export;
mod logging;
mod models;
mod run;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (config, rest) = config::DashboardConfig::from_args(&args)?;

    if rest.is_empty() {
        logging::init_for_tui()?;
        run::as_tui(config)
    } else {
        logging::init_for_cli()?;
        run::as_cli(&rest, &config)
    }
}
