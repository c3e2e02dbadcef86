//! Text format rules for customer fields.

use std::sync::LazyLock;

use regex::Regex;

/// Pattern an e-mail address must match: `local@domain.tld`.
///
/// Letter classes are ASCII only: no `(?i)`, which would also admit U+017F
/// and U+212A.
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("Invalid regex pattern"));

/// Check whether `text` looks like an e-mail address.
///
/// The local part allows letters, digits and `. _ % + -`; the domain allows
/// letters, digits, `.` and `-`; the top-level domain needs two or more
/// ASCII letters. Either case is accepted and the empty string is invalid.
#[must_use]
pub fn is_valid_email(text: &str) -> bool {
    EMAIL_REGEX.is_match(text)
}

/// Check whether `text` is a non-empty run of ASCII decimal digits.
///
/// An empty phone number is invalid, which makes the phone number mandatory
/// wherever this check is applied.
#[must_use]
pub fn is_valid_phone_number(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}
