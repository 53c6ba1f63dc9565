//! # Membership Checker
//!
//! Answers "does this address belong to that range" by expanding the range
//! once and looking candidates up in a hash set.
//!
//! Matching is on the exact output string. A candidate written differently
//! from the expansion (`10.0.0.01`, or without the `:ports` suffix when the
//! range carries ports) does not match even if it is numerically inside.

use std::collections::HashSet;

pub use cidr_common::network::membership::Membership;

use crate::expander::Expander;

/// Reports, for every candidate, whether it appears in the expansion of `range`.
pub fn check_membership<S: AsRef<str>>(
    expander: &Expander,
    range: &str,
    candidates: &[S],
) -> Vec<Membership> {
    let members: HashSet<String> = expander.expand(range).into_iter().collect();

    candidates
        .iter()
        .map(|candidate| {
            let ip: &str = candidate.as_ref();
            Membership::new(range, ip, members.contains(ip))
        })
        .collect()
}

/// Checks every range independently against the full candidate list.
///
/// Results are grouped per range, in the order the ranges were given.
pub fn check_all<R, S>(
    expander: &Expander,
    ranges: &[R],
    candidates: &[S],
) -> Vec<(String, Vec<Membership>)>
where
    R: AsRef<str>,
    S: AsRef<str>,
{
    ranges
        .iter()
        .map(|range| {
            let range: &str = range.as_ref();
            (
                range.to_string(),
                check_membership(expander, range, candidates),
            )
        })
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
