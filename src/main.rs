mod app;
mod cli;
mod config;
mod consts;
mod error;
mod output;
mod store;
mod tools;
mod utils;

use clap::Parser;

use cli::Cli;
use config::Config;
use output::{NoticeKind, notify};
use utils::init_logging;

fn main() {
    let config = Config::load();
    let cli = Cli::parse().with_config(&config);

    init_logging(cli.debug);
    if let Some(path) = &config.source {
        tracing::debug!(path = %path.display(), "loaded config");
    }

    if let Err(e) = app::run(&cli, &config) {
        tracing::debug!(error = ?e, "command failed");
        notify(NoticeKind::Error, &e.to_string(), cli.use_color());
        std::process::exit(1);
    }
}
