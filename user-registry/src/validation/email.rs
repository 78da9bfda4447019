use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?xi-u) ^[A-Z0-9._%+-]+@[A-Z0-9-]+(?:\.[A-Z0-9-]+)*\.[A-Z]{2,}$")
        .unwrap()
});

/// Structural match only, ASCII letters and digits. The text is checked
/// exactly as given, so callers trim form input themselves.
pub fn is_valid_email_shape(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}
