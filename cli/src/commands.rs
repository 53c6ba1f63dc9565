pub mod check;
pub mod expand;

use std::io::Write;

use cidr_common::config::Config;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};

const EXAMPLES: &str = "\
Examples:
  cidr 8.8.8.8/24 192.168.10.1/30
  cidr expand 10.0.0.1/31:22,80,8000-8010
  cidr --json expand gateway.lan/30
  cidr check 192.168.10.1/30 220.10.5.15/28 contains 192.168.10.3 220.10.5.18";

#[derive(Parser, Debug)]
#[command(name = "cidr", version)]
#[command(about = "Expand CIDR ranges to individual IP addresses.")]
#[command(after_help = EXAMPLES)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Ranges to expand when no subcommand is given
    #[arg(value_name = "CIDR")]
    pub ranges: Vec<String>,

    /// Generate JSON output
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Do not resolve hostnames
    #[arg(long, global = true)]
    pub no_dns: bool,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Expand one or more space-separated CIDR ranges into IP addresses
    #[command(alias = "e")]
    Expand {
        #[arg(value_name = "CIDR")]
        ranges: Vec<String>,
    },
    /// Check whether CIDR ranges contain IP addresses
    ///
    /// Ranges come first, then `contains` (or `c` or `,`), then the addresses:
    /// cidr check 192.168.10.1/30 contains 192.168.10.3
    #[command(alias = "c")]
    Check {
        #[arg(value_name = "CIDR contains IP")]
        tokens: Vec<String>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            json: self.json,
            no_dns: self.no_dns,
            verbosity: self.verbose,
        }
    }
}

pub fn write_help(out: &mut dyn Write) -> anyhow::Result<()> {
    write!(out, "{}", CommandLine::command().render_help())?;
    Ok(())
}

pub fn write_check_help(out: &mut dyn Write) -> anyhow::Result<()> {
    let mut cmd = CommandLine::command();
    cmd.build();
    if let Some(check) = cmd.find_subcommand_mut("check") {
        write!(out, "{}", check.render_long_help())?;
    }
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
