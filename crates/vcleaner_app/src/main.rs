mod args;
mod cli;
mod config;
mod logging;

use std::env;
use std::io;
use std::process::ExitCode;

use vcleaner_logging::vcleaner_error;

use config::AppConfig;

fn main() -> ExitCode {
    let config = AppConfig::from_env();
    logging::initialize(&config);

    let invocation = args::parse(env::args_os().skip(1));
    let stdout = io::stdout();
    match cli::run(invocation, &mut stdout.lock()) {
        Ok(status) => status.into(),
        Err(err) => {
            vcleaner_error!("failed to write report: {}", err);
            ExitCode::FAILURE
        }
    }
}
