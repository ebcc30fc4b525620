//! Character reference decoding for sanitized markup.

/// Longest reference body we look at before giving up on finding the `;`
const MAX_REFERENCE_LENGTH: usize = 32;

/// Decode named (`&amp;`), decimal (`&#64;`) and hex (`&#x40;`) references.
///
/// Unknown or unterminated references are kept verbatim. Numeric references
/// to NUL, surrogates or values beyond U+10FFFF decode to U+FFFD.
pub fn decode(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let after = &rest[amp + 1..];

        let decoded = after
            .char_indices()
            .take(MAX_REFERENCE_LENGTH)
            .find(|(_, c)| *c == ';')
            .and_then(|(semi, _)| resolve(&after[..semi]).map(|c| (c, semi)));

        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &after[semi + 1..];
            }
            None => {
                out.push('&');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

fn resolve(body: &str) -> Option<char> {
    if let Some(numeric) = body.strip_prefix('#') {
        let (digits, radix) = match numeric.strip_prefix(['x', 'X']) {
            Some(hex) => (hex, 16),
            None => (numeric, 10),
        };
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }
        // Overflowing references still decode, to U+FFFD
        let code = u32::from_str_radix(digits, radix).unwrap_or(u32::MAX);
        return Some(match code {
            0 => char::REPLACEMENT_CHARACTER,
            _ => char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER),
        });
    }

    match body {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => None,
    }
}
