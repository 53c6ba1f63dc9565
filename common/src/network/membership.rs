use serde::Serialize;

/// Whether a single candidate address belongs to a range expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Membership {
    #[serde(skip)]
    pub range: String,
    pub ip: String,
    pub belongs: bool,
}

impl Membership {
    pub fn new(range: impl Into<String>, ip: impl Into<String>, belongs: bool) -> Self {
        Self {
            range: range.into(),
            ip: ip.into(),
            belongs,
        }
    }
}
