//! URL analysis backed by the WHATWG URL parser.
//!
//! The host is located by the parser's state machine, not by splitting the
//! raw text at `@`. The raw authority is still scanned for `@`, so an empty
//! userinfo the parser leaves no trace of is reported too. Whitespace runs in
//! front of the `@` are percent-encoded into the username, multiple `@`
//! resolve to the last one before the host, and lookalikes such as `＠` are
//! mapped during host processing and then rejected as forbidden host code
//! points.

use crate::UrlComponents;

use log::trace;
use url::Url;

/// Parse `text` as an absolute URL and split it into components.
///
/// Returns `None` when the text is not a valid absolute URL. Userinfo is
/// reported, not rejected; see [`parse_url`] for the rejecting variant.
pub fn analyze(text: &str) -> Option<UrlComponents> {
    let url = match Url::parse(text) {
        Ok(url) => url,
        Err(e) => {
            trace!("Not an absolute URL ({e}): {text:?}");
            return None;
        }
    };

    Some(UrlComponents {
        scheme: url.scheme().to_string(),
        userinfo: userinfo_of(&url, raw_authority(text)),
        host: url.host_str().map(str::to_string),
        port: url.port(),
        rest: rest_of(&url),
    })
}

/// Parse `text` as an absolute URL that carries no userinfo component.
pub fn parse_url(text: &str) -> Option<UrlComponents> {
    analyze(text).filter(|components| !components.has_userinfo())
}

/// True when `text` is a URL whose authority contains a userinfo component.
///
/// Text that does not parse as a URL has no authority and returns false.
pub fn has_userinfo(text: &str) -> bool {
    analyze(text).is_some_and(|components| components.has_userinfo())
}

/// The authority exactly as written: what follows `scheme://` up to the first
/// `/`, `?`, `#` or `\`.
///
/// `None` when the text does not spell out `//` right after the scheme. The
/// URL parser invents an authority for `https:example.com` and drops tabs and
/// newlines, so callers that need the text as typed look here.
pub fn raw_authority(text: &str) -> Option<&str> {
    let text = text.trim_matches(|c: char| c <= ' ');
    let (scheme, rest) = text.split_once(':')?;

    let mut scheme_chars = scheme.chars();
    let scheme_valid = scheme_chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && scheme_chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if !scheme_valid {
        return None;
    }

    let after = rest.strip_prefix("//")?;
    let end = after.find(['/', '?', '#', '\\']).unwrap_or(after.len());
    Some(&after[..end])
}

/// Userinfo is present whenever an `@` ends it, even when the parser left
/// both username and password empty (`https://@host`, `https://\t@host`).
fn userinfo_of(url: &Url, authority: Option<&str>) -> Option<String> {
    let delimited = authority.is_some_and(|authority| authority.contains('@'));

    match (url.username(), url.password()) {
        ("", None) if !delimited => None,
        (user, None) => Some(user.to_string()),
        (user, Some(password)) => Some(format!("{user}:{password}")),
    }
}

fn rest_of(url: &Url) -> String {
    let mut rest = url.path().to_string();
    if let Some(query) = url.query() {
        rest.push('?');
        rest.push_str(query);
    }
    if let Some(fragment) = url.fragment() {
        rest.push('#');
        rest.push_str(fragment);
    }
    rest
}
