mod app;
mod batch;
mod cli;
mod config;
mod output;

use clap::Parser;
use stepstats::utils::set_debug;

use cli::Cli;
use config::Config;

fn main() {
    let config = Config::load();
    let cli = Cli::parse().with_config(&config);
    set_debug(cli.debug);

    match app::run(&cli) {
        Ok(report) if report.failed > 0 => std::process::exit(1),
        Ok(_) => {}
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
