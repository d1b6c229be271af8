use schema::{FlavorTextEntry, LocalizedName};

/// Value substituted when no entry matches the requested language.
pub const NOT_AVAILABLE: &str = "N/A";

/// Which text field of a language-tagged entry to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKey {
    Name,
    FlavorText,
}

/// An entry tagged with a language that exposes one or more text fields.
pub trait LanguageTagged {
    fn language(&self) -> &str;
    fn text(&self, key: TextKey) -> Option<&str>;
}

impl LanguageTagged for LocalizedName {
    fn language(&self) -> &str {
        &self.language.name
    }

    fn text(&self, key: TextKey) -> Option<&str> {
        match key {
            TextKey::Name => Some(&self.name),
            TextKey::FlavorText => None,
        }
    }
}

impl LanguageTagged for FlavorTextEntry {
    fn language(&self) -> &str {
        &self.language.name
    }

    fn text(&self, key: TextKey) -> Option<&str> {
        match key {
            TextKey::FlavorText => Some(&self.flavor_text),
            TextKey::Name => None,
        }
    }
}

/// Return `key` from the first entry tagged `language`, or [`NOT_AVAILABLE`].
pub fn resolve<E: LanguageTagged>(entries: &[E], language: &str, key: TextKey) -> String {
    entries
        .iter()
        .find(|entry| entry.language() == language)
        .and_then(|entry| entry.text(key))
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

/// Shorthand for resolving the display name.
pub fn resolve_name(entries: &[LocalizedName], language: &str) -> String {
    resolve(entries, language, TextKey::Name)
}

/// Flavor text in `language` with embedded line and page breaks flattened to spaces.
pub fn resolve_description(entries: &[FlavorTextEntry], language: &str) -> String {
    normalize_flavor_text(&resolve(entries, language, TextKey::FlavorText))
}

pub fn normalize_flavor_text(text: &str) -> String {
    text.chars()
        .map(|c| if c == '\n' || c == '\u{000C}' { ' ' } else { c })
        .collect()
}
