use serde::Serialize;

/// The semantic pieces of an absolute URL, as located by a conformant parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlComponents {
    /// Lowercased scheme without the trailing `:`
    pub scheme: String,
    /// `user[:password]`, still percent-encoded. `None` when the authority has no `@`.
    pub userinfo: Option<String>,
    /// Serialized host (IDNA/punycode applied). `None` for opaque URLs such as `mailto:`.
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Path, query and fragment
    pub rest: String,
}

impl UrlComponents {
    pub fn has_userinfo(&self) -> bool {
        self.userinfo.is_some()
    }

    pub fn has_host(&self) -> bool {
        self.host.as_deref().is_some_and(|host| !host.is_empty())
    }
}
