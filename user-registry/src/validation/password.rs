use crate::utils::MIN_PASSWORD_LENGTH;

/// True if pw is at least `MIN_PASSWORD_LENGTH` characters long.
pub fn password_meets_min_length(pw: &str) -> bool {
    pw.chars().count() >= MIN_PASSWORD_LENGTH
}

pub fn passwords_match(pw: &str, confirmation: &str) -> bool {
    pw == confirmation
}
