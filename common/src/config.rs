/// Runtime options collected from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Emit JSON instead of the plain text format.
    pub json: bool,
    /// Disables hostname resolution.
    ///
    /// Hostnames then expand to nothing, the same as a failed lookup.
    pub no_dns: bool,
    /// Number of `-v` flags given.
    pub verbosity: u8,
}
