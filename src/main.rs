mod categorizer;
mod cli;
mod error;
mod exporter;
mod fmt;
mod locator;
mod models;
mod parser;
mod period;
mod reader;
mod settings;

use clap::Parser;

use cli::Cli;

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = cli::collect::run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
