// File: datasift-core/src/validators.rs
//! Programmatic validation applied after pattern matching.
//!
//! Regular expressions only establish shape. The functions here decide whether a
//! shaped match is worth reporting: card numbers must carry a valid Luhn check digit,
//! and phone numbers made entirely of zeros are treated as placeholders.
//!
//! License: MIT OR APACHE 2.0

/// Validates a number using the Luhn algorithm.
///
/// Digits are read from the right. Digits at even reverse positions (the check digit
/// included) are summed as-is; digits at odd reverse positions are doubled, with 9
/// subtracted when the doubled value exceeds 9. The number is valid when the total is
/// a multiple of 10.
///
/// # Arguments
///
/// * `num_str` - A string slice containing only ASCII digits.
///
/// # Returns
///
/// `true` if the number is valid according to the Luhn algorithm, `false` otherwise.
/// An empty string or any non-digit character yields `false`.
pub fn is_valid_luhn(num_str: &str) -> bool {
    if num_str.is_empty() {
        return false;
    }

    let mut sum: u32 = 0;
    for (position, c) in num_str.chars().rev().enumerate() {
        let Some(mut digit) = c.to_digit(10) else { return false; };

        if position % 2 == 1 {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum = (sum + digit) % 10;
    }

    sum == 0
}

/// Validates a matched credit card number.
///
/// Strips every non-digit character (separators such as spaces or dashes) and runs
/// [`is_valid_luhn`] over what remains.
pub fn is_valid_credit_card_programmatically(cc_number: &str) -> bool {
    let digits: String = cc_number.chars().filter(|c| c.is_ascii_digit()).collect();
    is_valid_luhn(&digits)
}

/// Returns `true` for phone matches that are obviously placeholders.
///
/// A placeholder consists only of the digit `0`, whitespace, and the punctuation a
/// phone match can carry (`-`, `.`, `(`, `)`), e.g. `000-000-0000`.
pub fn is_placeholder_phone(phone: &str) -> bool {
    !phone.is_empty()
        && phone
            .chars()
            .all(|c| c == '0' || c.is_whitespace() || matches!(c, '-' | '.' | '(' | ')'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luhn_accepts_known_good_numbers() {
        assert!(is_valid_luhn("4532015112830366"));
        assert!(is_valid_luhn("5425233430109903"));
        assert!(is_valid_luhn("4111111111111111"));
        assert!(is_valid_luhn("0"));
    }

    #[test]
    fn luhn_rejects_known_bad_numbers() {
        assert!(!is_valid_luhn("1234567890123456"));
        assert!(!is_valid_luhn("4532148803436467"));
        assert!(!is_valid_luhn("4532015112830367"));
        assert!(!is_valid_luhn(""));
        assert!(!is_valid_luhn("4532-1488"));
    }

    #[test]
    fn luhn_detects_every_single_digit_substitution() {
        let valid = "4532015112830366";
        for (idx, original) in valid.char_indices() {
            for replacement in '0'..='9' {
                if replacement == original {
                    continue;
                }
                let mut perturbed = valid.to_string();
                perturbed.replace_range(idx..idx + 1, &replacement.to_string());
                assert!(!is_valid_luhn(&perturbed), "undetected change: {}", perturbed);
            }
        }
    }

    #[test]
    fn credit_card_validation_ignores_separators() {
        assert!(is_valid_credit_card_programmatically("4532 0151 1283 0366"));
        assert!(is_valid_credit_card_programmatically("5425-2334-3010-9903"));
        assert!(!is_valid_credit_card_programmatically("1234 5678 9012 3456"));
        assert!(!is_valid_credit_card_programmatically("4532 1488 0343 6467"));
        assert!(!is_valid_credit_card_programmatically("no digits"));
    }

    #[test]
    fn placeholder_phone_detection() {
        assert!(is_placeholder_phone("000-000-0000"));
        assert!(is_placeholder_phone("(000) 000.0000"));
        assert!(is_placeholder_phone("0000000"));
        assert!(!is_placeholder_phone("555.987.6543"));
        assert!(!is_placeholder_phone("100-000-0000"));
        assert!(!is_placeholder_phone(""));
    }
}
