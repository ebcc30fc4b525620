pub const DEFAULT_ACCEPTED_SCHEMES: &[&str] = &["http", "https"];
pub const DEFAULT_INVISIBLE_CLASS: &str = "invisible";
pub const DEFAULT_MAX_LINK_LENGTH: usize = 2047;

/// Knobs for deciding whether a field value is eligible for verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationPolicy {
    /// Lowercase schemes a link may use
    pub accepted_schemes: Vec<String>,
    /// Class marking wrappers hidden from sighted readers in rendered links
    pub invisible_class: String,
    /// Longest link (in bytes) the ownership checker will be asked to fetch
    pub max_link_length: usize,
}

impl Default for VerificationPolicy {
    fn default() -> Self {
        Self {
            accepted_schemes: DEFAULT_ACCEPTED_SCHEMES
                .iter()
                .map(|scheme| scheme.to_string())
                .collect(),
            invisible_class: String::from(DEFAULT_INVISIBLE_CLASS),
            max_link_length: DEFAULT_MAX_LINK_LENGTH,
        }
    }
}

impl VerificationPolicy {
    pub fn accepts_scheme(&self, scheme: &str) -> bool {
        self.accepted_schemes.iter().any(|accepted| accepted == scheme)
    }
}
