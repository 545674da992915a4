use crate::ids::SpeakerId;
use crate::slug::slugify;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Speaker {
    pub id: SpeakerId,
    pub name: String,
    pub slug: String,
}

impl Speaker {
    pub fn absolute_url(&self) -> String {
        format!("/speaker/{}/{}/", self.id, self.slug)
    }

    /// Upper-cased first character of the display name, the bucket the
    /// speaker list groups by. `None` for blank names.
    pub fn initial(&self) -> Option<String> {
        initial_of(&self.name)
    }
}

/// Upper-cased leading character of `name`, ignoring leading spaces.
///
/// Mirrors `upper(left(ltrim(name), 1))` in Postgres so both catalog
/// backends bucket names identically.
pub fn initial_of(name: &str) -> Option<String> {
    name.trim_start_matches(' ')
        .chars()
        .next()
        .map(|ch| upper_char(ch).to_string())
}

/// Per-character upper-casing that keeps characters whose upper-case form
/// is longer than one character (`ß`), as Postgres `upper()` does.
pub fn upper_bucket(text: &str) -> String {
    text.chars().map(upper_char).collect()
}

fn upper_char(ch: char) -> char {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewSpeaker {
    pub name: String,
    pub slug: Option<String>,
}

impl NewSpeaker {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: None,
        }
    }

    pub fn resolved_slug(&self) -> String {
        match self.slug.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => slugify(slug),
            _ => slugify(&self.name),
        }
    }
}
