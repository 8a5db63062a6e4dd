//! Username composition rules

/// Punctuation accepted in usernames besides ASCII letters and digits
pub const ALLOWED_SPECIAL_CHARS: [char; 4] = ['-', '/', '@', '#'];

/// A username is valid when it only uses ASCII letters, digits and
/// [`ALLOWED_SPECIAL_CHARS`], and holds at least one lowercase letter,
/// one uppercase letter and one digit. Length is not checked here.
pub fn is_valid_username(username: &str) -> bool {
    let mut has_lower = false;
    let mut has_upper = false;
    let mut has_digit = false;

    for c in username.chars() {
        if c.is_ascii_lowercase() {
            has_lower = true;
        } else if c.is_ascii_uppercase() {
            has_upper = true;
        } else if c.is_ascii_digit() {
            has_digit = true;
        } else if !ALLOWED_SPECIAL_CHARS.contains(&c) {
            return false;
        }
    }

    has_lower && has_upper && has_digit
}
