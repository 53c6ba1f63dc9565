//! # cidr-core
//!
//! Expansion of range expressions into their member addresses.
//!
//! * **[`parser`]**: turns `host[/prefix][:ports]` into network blocks and a port set.
//! * **[`enumerator`]**: walks every address of a network block in order.
//! * **[`expander`]**: joins the two and renders the output strings.
//! * **[`membership`]**: checks candidate addresses against an expansion.
//! * **[`resolver`]**: hostname lookup used by the parser.

pub mod enumerator;
pub mod expander;
pub mod membership;
pub mod parser;
pub mod resolver;

pub use expander::{Expander, Expansion};
pub use membership::Membership;

/// Expands `expr` with the system resolver. Any error yields an empty list.
pub fn expand(expr: &str) -> Vec<String> {
    Expander::default().expand(expr)
}

/// Checks each candidate against `range` with the system resolver.
pub fn check_membership<S: AsRef<str>>(range: &str, candidates: &[S]) -> Vec<Membership> {
    membership::check_membership(&Expander::default(), range, candidates)
}
