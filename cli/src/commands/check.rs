use std::io::Write;

use cidr_common::config::Config;
use cidr_core::{Expander, membership};
use tracing::info;

use crate::commands;
use crate::terminal::format;

const SEPARATORS: [&str; 3] = ["contains", "c", ","];

pub fn check(
    out: &mut dyn Write,
    tokens: &[String],
    expander: &Expander,
    cfg: &Config,
) -> anyhow::Result<()> {
    if tokens.len() < 3 {
        return commands::write_check_help(out);
    }

    let (ranges, candidates) = split_tokens(tokens);
    info!(
        "Checking {} address(es) against {} range(s)",
        candidates.len(),
        ranges.len()
    );
    let results = membership::check_all(expander, &ranges, &candidates);

    if cfg.json {
        format::memberships_json(out, &results)
    } else {
        format::memberships_plain(out, &results)
    }
}

/// Splits at the first separator: ranges before it, candidate addresses after.
fn split_tokens(tokens: &[String]) -> (Vec<&str>, Vec<&str>) {
    match tokens.iter().position(|t| SEPARATORS.contains(&t.as_str())) {
        Some(idx) => (
            tokens[..idx].iter().map(String::as_str).collect(),
            tokens[idx + 1..].iter().map(String::as_str).collect(),
        ),
        None => (tokens.iter().map(String::as_str).collect(), Vec::new()),
    }
}
