/// Slug used when a title contains nothing representable in a URL.
pub const FALLBACK_SLUG: &str = "untitled";

/// Generate a URL friendly slug from a title or display name.
///
/// ASCII alphanumerics are lowercased, every other character becomes a
/// separator, and runs of separators collapse into a single `-`.
pub fn slugify(value: &str) -> String {
    try_slugify(value).unwrap_or_else(|| FALLBACK_SLUG.to_string())
}

fn try_slugify(value: &str) -> Option<String> {
    let mapped: String = value
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() {
                ch.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();

    let joined = mapped
        .split('-')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    if joined.is_empty() { None } else { Some(joined) }
}
