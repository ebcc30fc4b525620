use serde::{Deserialize, Serialize};

/// The one capability field verification needs from the owning identity.
pub trait Identity {
    /// Local identities store field values as plain text; remote ones as
    /// sanitized HTML rendered by their home server.
    fn is_local(&self) -> bool;
}

/// Where an identity lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IdentityKind {
    #[default]
    Local,
    Remote,
}

impl IdentityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Remote => "remote",
        }
    }
}

impl Identity for IdentityKind {
    fn is_local(&self) -> bool {
        *self == Self::Local
    }
}

impl std::fmt::Display for IdentityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
