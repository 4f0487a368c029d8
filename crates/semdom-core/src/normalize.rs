//! Canonicalization of raw Louw-Nida code tokens.
//!
//! Two encodings reach this function: the lexicon export writes
//! `<int><letter>` bases (`"14A"`), corpus annotations write decimal
//! subdivisions (`"89.32"`) or lowercase letter forms (`"92a"`). Both
//! must land on the same join key or coverage is silently undercounted.

use semdom_model::CanonicalCode;

/// Normalize a raw code token to its canonical base form.
///
/// A token with a `.` is truncated at the first dot and the integer
/// prefix is used as-is (decimal forms never carry a letter). Any other
/// token is uppercased whole, so `"92a"` becomes `"92A"` and bare
/// integers pass through. Tokens without digits pass through too and
/// end up in the unmatched set downstream.
///
/// Callers isolate the code token first; this function expects no
/// surrounding whitespace or trailing annotation text. It never fails
/// for non-empty input, and is idempotent over canonical codes.
pub fn normalize(raw: &str) -> CanonicalCode {
    match raw.split_once('.') {
        Some((prefix, _)) => CanonicalCode::new(prefix),
        None => CanonicalCode::new(raw.to_uppercase()),
    }
}
