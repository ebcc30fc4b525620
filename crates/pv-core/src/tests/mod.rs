mod url_analyzer;

use crate::Identity;

/// Stand-in for an identity record; only locality matters to verification
pub(crate) struct TestIdentity {
    pub(crate) local: bool,
}

impl TestIdentity {
    pub(crate) fn local() -> Self {
        Self { local: true }
    }

    pub(crate) fn remote() -> Self {
        Self { local: false }
    }
}

impl Identity for TestIdentity {
    fn is_local(&self) -> bool {
        self.local
    }
}

/// Whitespace padding long enough to push the real host off-screen
pub(crate) fn spoof_padding() -> String {
    " ".repeat(92)
}

pub(crate) fn patreon_link() -> &'static str {
    concat!(
        r#"<a href="https://www.patreon.com/mastodon" target="_blank" "#,
        r#"rel="nofollow noopener noreferrer me">"#,
        r#"<span class="invisible">https://www.</span>"#,
        r#"<span class="">patreon.com/mastodon</span>"#,
        r#"<span class="invisible"></span></a>"#,
    )
}
