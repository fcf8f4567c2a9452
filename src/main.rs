// src/main.rs
use clap::Parser;
use std::process::ExitCode;
use vault_manifest::{app, args::Args, config::Config, logging, presentation};

fn main() -> ExitCode {
    let args = Args::parse();
    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(config.log_level);
    log::debug!("vault_manifest v{} · {:?}", vault_manifest::VERSION, config.variant);

    match app::run(&config) {
        Ok(output) => {
            presentation::print_report(&output, &config);
            ExitCode::SUCCESS
        }
        Err(e) => {
            presentation::report_error(&e, &config);
            ExitCode::FAILURE
        }
    }
}
