//! Contact validation
//!
//! Classifies free-form user input as an email address, a Telegram
//! handle, or invalid. Matching is deliberately permissive for emails
//! (single `@`, at least one dot in the domain, no DNS/MX checks) and
//! strict for handles (`@` plus 5-32 word characters, Telegram's rules).
//!
//! Callers are expected to trim surrounding whitespace; no further
//! normalization or case folding happens here.

use lazy_regex::{lazy_regex, Lazy, Regex};

static EMAIL_RE: Lazy<Regex> = lazy_regex!(r"^[\w.-]+@[\w.-]+\.\w+$");
static HANDLE_RE: Lazy<Regex> = lazy_regex!(r"^@[A-Za-z0-9_]{5,32}$");

/// Classification of a submitted contact string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    /// A permissive email shape, e.g. `alice@example.com`
    Email,
    /// A Telegram `@username` reference, e.g. `@bob_99`
    Handle,
    /// Anything else
    Invalid,
}

impl ContactKind {
    /// Whether this input may be persisted as a contact.
    pub fn is_valid(self) -> bool {
        !matches!(self, ContactKind::Invalid)
    }
}

/// Classifies a trimmed string as an email, a handle, or invalid.
pub fn classify_contact(text: &str) -> ContactKind {
    if EMAIL_RE.is_match(text) {
        ContactKind::Email
    } else if HANDLE_RE.is_match(text) {
        ContactKind::Handle
    } else {
        ContactKind::Invalid
    }
}
