//! Note resolution utilities.

use anyhow::{Result, bail};

use crate::domain::NoteSummary;

/// Result of resolving a note identifier.
#[derive(Debug)]
pub enum ResolveResult<'a> {
    /// Exactly one note matched.
    Unique(&'a NoteSummary),
    /// Multiple notes matched (ambiguous).
    Ambiguous(Vec<&'a NoteSummary>),
    /// No notes matched.
    NotFound,
}

/// Prints the candidates of an ambiguous identifier to stderr.
pub(crate) fn print_ambiguous_notes(identifier: &str, notes: &[&NoteSummary]) {
    eprintln!("Ambiguous: '{}' matches {} notes:", identifier, notes.len());
    for note in notes {
        eprintln!(
            "  {} - {} (updated {})",
            note.id().prefix(),
            note.title(),
            note.updated_at().format("%Y-%m-%d %H:%M")
        );
    }
    eprintln!();
    eprintln!("Use the ID prefix to specify which note you mean.");
}

/// Resolves a note identifier against a listing.
///
/// Resolution order:
/// 1. Exact ID
/// 2. ID prefix (if input is 4+ alphanumeric characters)
/// 3. Title, ignoring case
///
/// A single ID-prefix match wins outright; otherwise prefix and title
/// matches are pooled.
pub fn resolve_note<'a>(notes: &'a [NoteSummary], identifier: &str) -> ResolveResult<'a> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return ResolveResult::NotFound;
    }

    if let Some(exact) = notes.iter().find(|n| n.id().as_str() == identifier) {
        return ResolveResult::Unique(exact);
    }

    let looks_like_id =
        identifier.len() >= 4 && identifier.chars().all(|c| c.is_ascii_alphanumeric());

    let mut candidates: Vec<&NoteSummary> = Vec::new();

    if looks_like_id {
        let upper = identifier.to_ascii_uppercase();
        let id_matches: Vec<_> = notes
            .iter()
            .filter(|n| n.id().as_str().to_ascii_uppercase().starts_with(&upper))
            .collect();

        // ID matches are the most precise
        if id_matches.len() == 1 {
            return ResolveResult::Unique(id_matches[0]);
        }
        candidates.extend(id_matches);
    }

    let lowered = identifier.to_lowercase();
    candidates.extend(
        notes
            .iter()
            .filter(|n| n.title().trim().to_lowercase() == lowered),
    );

    candidates.sort_by(|a, b| a.id().cmp(b.id()));
    candidates.dedup_by(|a, b| a.id() == b.id());

    match candidates.len() {
        0 => ResolveResult::NotFound,
        1 => ResolveResult::Unique(candidates[0]),
        _ => ResolveResult::Ambiguous(candidates),
    }
}

/// Resolves to exactly one note or fails with a user-facing error.
pub(crate) fn pick_note<'a>(
    notes: &'a [NoteSummary],
    identifier: &str,
) -> Result<&'a NoteSummary> {
    match resolve_note(notes, identifier) {
        ResolveResult::Unique(note) => Ok(note),
        ResolveResult::Ambiguous(candidates) => {
            print_ambiguous_notes(identifier, &candidates);
            bail!("ambiguous note identifier");
        }
        ResolveResult::NotFound => bail!("note not found: '{}'", identifier),
    }
}
