//! Decides whether a field value is a single, exact, non-deceptive link.
//!
//! Local values are plain text and must be nothing but the URL. Remote values
//! are sanitized HTML and must be nothing but one anchor whose text spells out
//! its own target.

use crate::html::anchor_extractor::extract_sole_link;
use crate::url_analysis::url_analyzer::{analyze, raw_authority};
use crate::VerificationPolicy;

use log::debug;

/// The URL an ownership check should fetch for `value`, or `None` when the
/// value is not eligible for verification.
pub fn link_target(value: &str, is_local: bool, policy: &VerificationPolicy) -> Option<String> {
    let candidate = if is_local {
        local_link(value)?
    } else {
        remote_link(value, &policy.invisible_class)?
    };

    if candidate.len() > policy.max_link_length {
        debug!(
            "Link rejected: {} bytes exceeds limit of {}",
            candidate.len(),
            policy.max_link_length
        );
        return None;
    }

    let Some(components) = analyze(&candidate) else {
        debug!("Link rejected: not an absolute URL: {candidate:?}");
        return None;
    };

    if components.has_userinfo() {
        debug!(
            "Link rejected: userinfo in authority, real host is {:?}",
            components.host
        );
        return None;
    }

    if !policy.accepts_scheme(&components.scheme) {
        debug!("Link rejected: scheme {:?} not accepted", components.scheme);
        return None;
    }

    if !components.has_host() {
        debug!("Link rejected: no host in {candidate:?}");
        return None;
    }

    if candidate.contains('\\') || raw_authority(&candidate).is_none_or(str::is_empty) {
        debug!("Link rejected: no `//authority` written out in {candidate:?}");
        return None;
    }

    Some(candidate)
}

/// True when `value` is eligible for an ownership check.
pub fn is_verifiable(value: &str, is_local: bool, policy: &VerificationPolicy) -> bool {
    link_target(value, is_local, policy).is_some()
}

fn local_link(value: &str) -> Option<String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return None;
    }

    // The URL parser would quietly percent-encode or strip interior
    // whitespace, so "https://a.example/ and more" must be caught here
    if trimmed.chars().any(|c| c.is_whitespace() || c.is_control()) {
        debug!("Local value rejected: contains more than a single URL");
        return None;
    }

    Some(trimmed.to_string())
}

fn remote_link(value: &str, invisible_class: &str) -> Option<String> {
    let link = extract_sole_link(value, invisible_class)?;

    if link.text != link.href {
        debug!(
            "Remote value rejected: text {:?} does not match href {:?}",
            link.text, link.href
        );
        return None;
    }

    Some(link.href)
}
