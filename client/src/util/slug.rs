//! Slug normalization for route lookups and stream paths.

#[cfg(test)]
#[path = "slug_test.rs"]
mod slug_test;

/// Normalize a user/route supplied slug for catalog lookup.
///
/// Trims, replaces each whitespace run with `_`, then accepts only
/// `[A-Za-z0-9_-]+`. Anything else is `None` and must not reach the network.
pub fn normalize_slug(raw: &str) -> Option<String> {
    let slug = raw.split_whitespace().collect::<Vec<_>>().join("_");
    if slug.is_empty() || !slug.chars().all(is_slug_char) {
        return None;
    }
    Some(slug)
}

/// Path segment for a slug inside a stream URL.
///
/// Runs of whitespace and hyphens collapse to a single `_`.
pub fn stream_slug(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_run = false;
    for ch in raw.trim().chars() {
        if ch.is_whitespace() || ch == '-' {
            if !in_run {
                out.push('_');
            }
            in_run = true;
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}

/// Whether `raw` can be placed in a URL path as-is: non-empty `[A-Za-z0-9_-]+`.
pub fn is_path_token(raw: &str) -> bool {
    !raw.is_empty() && raw.chars().all(is_slug_char)
}

fn is_slug_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '-'
}
