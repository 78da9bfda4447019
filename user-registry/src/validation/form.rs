use crate::utils::MIN_NAME_LENGTH;

pub fn is_non_blank(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Length is measured on the trimmed name.
pub fn name_meets_min_length(name: &str) -> bool {
    name.trim().chars().count() >= MIN_NAME_LENGTH
}

pub fn terms_accepted(flag: bool) -> bool {
    flag
}
