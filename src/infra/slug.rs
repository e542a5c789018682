//! Slugs and file names for note content files.

use crate::domain::NoteId;

const MAX_SLUG_CHARS: usize = 50;

/// Converts a title to a file-name-safe slug.
///
/// Letters and digits from any script are kept (lowercased), `_` is kept,
/// and every other run of characters becomes a single `-`. The result is
/// trimmed of hyphens, capped at 50 characters, and falls back to
/// `"untitled"` when nothing usable remains.
///
/// # Examples
///
/// ```
/// use jot::infra::slugify;
///
/// assert_eq!(slugify("API Design"), "api-design");
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify(""), "untitled");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() || c == '_' {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }

    let capped: String = slug.trim_end_matches('-').chars().take(MAX_SLUG_CHARS).collect();
    let capped = capped.trim_end_matches('-');
    if capped.is_empty() {
        "untitled".to_string()
    } else {
        capped.to_string()
    }
}

/// Generates the content file name for a note.
///
/// Format: `{id-prefix}-{slug}.md`
///
/// # Examples
///
/// ```
/// use jot::domain::NoteId;
/// use jot::infra::content_filename;
///
/// let id: NoteId = "01HQ3K5M7NXJK4QZPW8V2R6T9Y".parse().unwrap();
/// assert_eq!(content_filename(&id, "API Design"), "01HQ3K5M7N-api-design.md");
/// ```
pub fn content_filename(id: &NoteId, title: &str) -> String {
    format!("{}-{}.md", id.prefix(), slugify(title))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("API Design"), "api-design");
        assert_eq!(slugify("foo bar baz"), "foo-bar-baz");
    }

    #[test]
    fn slugify_collapses_separator_runs() {
        assert_eq!(slugify("hello   world"), "hello-world");
        assert_eq!(slugify("hello - world"), "hello-world");
        assert_eq!(slugify("API: Design Notes"), "api-design-notes");
    }

    #[test]
    fn slugify_trims_edges() {
        assert_eq!(slugify("-hello-"), "hello");
        assert_eq!(slugify("!hello!"), "hello");
    }

    #[test]
    fn slugify_keeps_underscores_and_digits() {
        assert_eq!(slugify("my_title 2"), "my_title-2");
        assert_eq!(slugify("2024 Goals"), "2024-goals");
    }

    #[test]
    fn slugify_keeps_non_latin_letters() {
        assert_eq!(slugify("学习 笔记"), "学习-笔记");
        assert_eq!(slugify("Café Design"), "café-design");
    }

    #[test]
    fn slugify_falls_back_to_untitled() {
        assert_eq!(slugify(""), "untitled");
        assert_eq!(slugify("!@#$%"), "untitled");
        assert_eq!(slugify("   "), "untitled");
    }

    #[test]
    fn slugify_caps_length_without_trailing_hyphen() {
        let long_title = "word ".repeat(30);
        let result = slugify(&long_title);
        assert!(result.chars().count() <= 50);
        assert!(!result.ends_with('-'));
    }

    #[test]
    fn content_filename_combines_prefix_and_slug() {
        let id: NoteId = "01HQ3K5M7NXJK4QZPW8V2R6T9Y".parse().unwrap();
        assert_eq!(content_filename(&id, "Hello, World!"), "01HQ3K5M7N-hello-world.md");
        assert_eq!(content_filename(&id, ""), "01HQ3K5M7N-untitled.md");
    }
}
