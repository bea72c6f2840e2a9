//! OCR output cleanup
//!
//! Collapses whitespace runs, strips non-printable characters and trims
//! the result. Shared by the HTTP service and the desktop tool.

use regex::Regex;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Shown when OCR produced nothing usable.
pub const NO_TEXT_PLACEHOLDER: &str = "[Nenhum texto detectado]";

lazy_static::lazy_static! {
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
}

/// Clean raw OCR output.
///
/// 1. every whitespace run becomes a single space
/// 2. non-printable characters are dropped (`'\n'` is kept, though step 1
///    leaves none behind)
/// 3. leading/trailing whitespace is trimmed
pub fn clean_text(text: &str) -> String {
    let collapsed = WHITESPACE_RE.replace_all(text, " ");
    let printable: String = collapsed
        .chars()
        .filter(|&c| is_printable(c) || c == '\n')
        .collect();
    printable.trim().to_string()
}

/// Returns the placeholder for empty text.
pub fn text_or_placeholder(text: &str) -> &str {
    if text.is_empty() {
        NO_TEXT_PLACEHOLDER
    } else {
        text
    }
}

/// Printable unless the general category is Cc, Cf, Cs, Co, Cn, Zl, Zp or
/// Zs. ASCII space counts as printable.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
            | GeneralCategory::SpaceSeparator
    )
}
