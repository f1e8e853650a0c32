//! Deterministic field identifier derivation.
//!
//! An answer is addressed by a slug derived from its page index and question
//! text. The derivation is a pure function of its inputs, so the same
//! question on the same page yields the same identifier across sessions and
//! across machines. That stability is what makes exported answer files
//! portable.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Derive the field identifier for a question on a page.
///
/// The question text is lowercased, canonically decomposed with combining
/// marks removed, and collapsed to an `[a-z0-9]` slug where every run of
/// other characters becomes a single hyphen. The result is prefixed with
/// `step-{page_index}-`.
///
/// Total over all inputs: a question that normalizes to nothing (for
/// example, all punctuation) degrades to the bare `step-{page_index}-`
/// prefix.
///
/// # Example
///
/// ```
/// use gfs_model::field_id;
///
/// assert_eq!(field_id(0, "Nombre"), "step-0-nombre");
/// assert_eq!(field_id(1, "¿Cuál es la meta?"), "step-1-cual-es-la-meta");
/// ```
pub fn field_id(page_index: usize, question: &str) -> String {
    format!("step-{page_index}-{}", slugify(question))
}

/// Collapse arbitrary text into an `[a-z0-9-]` slug.
fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for ch in text.nfd() {
        if is_combining_mark(ch) {
            continue;
        }
        for lower in ch.to_lowercase() {
            if lower.is_ascii_alphanumeric() {
                // A hyphen is only ever emitted between two slug characters,
                // which trims leading and trailing runs for free.
                if pending_hyphen && !slug.is_empty() {
                    slug.push('-');
                }
                pending_hyphen = false;
                slug.push(lower);
            } else {
                pending_hyphen = true;
            }
        }
    }

    slug
}
