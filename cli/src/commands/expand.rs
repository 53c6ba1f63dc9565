use std::io::Write;

use cidr_common::config::Config;
use cidr_core::{Expander, Expansion};
use tracing::{info, warn};

use crate::commands;
use crate::terminal::format;

pub fn expand(
    out: &mut dyn Write,
    ranges: &[String],
    expander: &Expander,
    cfg: &Config,
) -> anyhow::Result<()> {
    if ranges.is_empty() {
        return commands::write_help(out);
    }

    info!("Expanding {} range(s)", ranges.len());
    let expansions = ranges
        .iter()
        .map(|range| (range.as_str(), expand_one(expander, range)));

    if cfg.json {
        format::expansions_json(out, expansions)
    } else {
        format::expansions_plain(out, expansions)
    }
}

/// Expands lazily, reporting a failure on stderr and yielding nothing for it.
fn expand_one(expander: &Expander, range: &str) -> impl Iterator<Item = String> {
    let expansion: Option<Expansion> = match expander.try_expand(range) {
        Ok(expansion) => Some(expansion),
        Err(e) => {
            warn!(range = %range, "{e}");
            None
        }
    };
    expansion.into_iter().flatten()
}
