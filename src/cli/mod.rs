mod handlers;
pub mod logging;
pub mod parse;

pub use parse::Cli;

use crate::core::error::ChartError;

pub fn run(cli: &Cli) -> Result<(), ChartError> {
    if cli.list_colors {
        return handlers::colors();
    }
    handlers::chart(cli)
}
