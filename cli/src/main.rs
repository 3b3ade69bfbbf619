mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, audit};
use terminal::{logging, print};
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    logging::init_logging();
    print::banner();

    let cfg = commands.into_config();

    match audit::audit(&cfg).await {
        Ok(()) => {
            print::end_of_program();
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
