//! Answer validation for accentuation questions.
//!
//! Grading has three tiers, checked in order:
//! 1. exact match (case and diacritic sensitive)
//! 2. same word once diacritics are stripped from both sides
//! 3. anything else is a wrong word
//!
//! Stripping keeps case, so "ARBOL" against "árbol" is a wrong word rather
//! than an accent mismatch. NFD also splits "ñ" into "n" plus a combining
//! tilde, so "nino" against "niño" grades as an accent mismatch.

use crate::types::{FeedbackCategory, ValidationVerdict};
use unicode_normalization::UnicodeNormalization;

const EXACT_FEEDBACK: &str = "¡Perfecto! La acentuación es impecable.";

/// Grade a submitted word against the reference word.
pub fn validate(submitted: &str, reference: &str) -> ValidationVerdict {
    if submitted == reference {
        return ValidationVerdict {
            correct: true,
            category: FeedbackCategory::Exact,
            message: EXACT_FEEDBACK.to_string(),
        };
    }

    if strip_diacritics(submitted) == strip_diacritics(reference) {
        return ValidationVerdict {
            correct: false,
            category: FeedbackCategory::AccentMismatch,
            message: format!(
                "¡Casi! La palabra es correcta, pero le falta o tiene mal la tilde. La forma correcta es: \"{}\".",
                reference
            ),
        };
    }

    ValidationVerdict {
        correct: false,
        category: FeedbackCategory::WrongWord,
        message: format!("Incorrecto. La palabra esperada era \"{}\".", reference),
    }
}

/// Remove combining diacritical marks after canonical decomposition.
///
/// Letters and case are left alone: "Él" becomes "El", "ñ" becomes "n".
pub fn strip_diacritics(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Whether two words are the same base word, ignoring case and diacritics.
pub fn base_equals(a: &str, b: &str) -> bool {
    fold_base(a) == fold_base(b)
}

fn fold_base(s: &str) -> String {
    strip_diacritics(&s.to_lowercase())
}

#[inline]
fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}
