mod handlers;
mod logger;
pub mod parse;

use clap::Parser;
pub use parse::Cli;

use crate::core::error::GraphError;

pub fn run() -> Result<(), GraphError> {
    let cli = parse::Cli::parse();
    logger::init(cli.verbose);
    handlers::chart(cli)
}
