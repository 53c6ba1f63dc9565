mod commands;
mod terminal;

use cidr_core::Expander;
use commands::{CommandLine, Commands, check, expand};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init_logging(cfg.verbosity)?;
    let expander = Expander::from_config(&cfg);

    print::to_stdout(|out| match &commands.command {
        Some(Commands::Expand { ranges }) => expand::expand(out, ranges, &expander, &cfg),
        Some(Commands::Check { tokens }) => check::check(out, tokens, &expander, &cfg),
        None => expand::expand(out, &commands.ranges, &expander, &cfg),
    })
}
