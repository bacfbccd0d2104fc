//! Phone number cleanup and E.164 validation.

use std::sync::LazyLock;

use regex::Regex;

static E164: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^\+\d{8,15}$").ok());

/// Strip everything but ASCII digits, keeping a single leading `+`.
///
/// `"+1 (555) 010-9999"` → `"+15550109999"`. A `+` anywhere but the first
/// kept position is dropped.
pub fn clean_phone_number(raw: &str) -> String {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    let digits = kept.chars().filter(char::is_ascii_digit);
    if kept.starts_with('+') {
        std::iter::once('+').chain(digits).collect()
    } else {
        digits.collect()
    }
}

/// `+` followed by 8 to 15 digits.
pub fn is_e164(number: &str) -> bool {
    E164.as_ref().is_some_and(|re| re.is_match(number))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_is_stripped() {
        assert_eq!(clean_phone_number("+1 (555) 010-9999"), "+15550109999");
        assert_eq!(clean_phone_number("555.010.9999"), "5550109999");
        assert_eq!(clean_phone_number("  +44 20 7946 0018 "), "+442079460018");
    }

    #[test]
    fn only_the_leading_plus_survives() {
        assert_eq!(clean_phone_number("++1+555+0109999"), "+15550109999");
        assert_eq!(clean_phone_number("1+5550109999"), "15550109999");
        assert_eq!(clean_phone_number(""), "");
        assert_eq!(clean_phone_number("call me"), "");
    }

    #[test]
    fn e164_bounds() {
        assert!(is_e164("+12345678"));
        assert!(is_e164("+123456789012345"));
        assert!(!is_e164("+1234567"));
        assert!(!is_e164("+1234567890123456"));
        assert!(!is_e164("15550109999"));
        assert!(!is_e164("+"));
    }

    #[test]
    fn cleaned_numbers_validate() {
        assert!(is_e164(&clean_phone_number("+1 (555) 010-9999")));
        assert!(!is_e164(&clean_phone_number("(555) 010-9999")));
    }
}
