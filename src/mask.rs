//! Live input mask for the due-date field.
//!
//! Every mutation of the field (keystroke, paste, backspace) hands its
//! tentative post-edit text to [`reformat`], which re-derives the canonical
//! `MM/DD/YY`-shaped string from scratch. The field then displays the
//! returned string with the cursor at the end. Because the mask is rebuilt
//! from the digits alone, deleting a `/` on its own removes no digit and
//! the next call re-inserts it — separators are owned by the mask, not the
//! user.

/// Maximum number of digits the mask holds (two each for month, day, year).
pub const MAX_DIGITS: usize = 6;

/// Separator inserted after the 2nd and 4th digit.
pub const SEPARATOR: char = '/';

/// Rebuild the canonical mask from a field's tentative text.
///
/// Total over all inputs and idempotent: re-running the result through
/// `reformat` yields the same string, since extracting digits from an
/// already-masked value recovers the same digit buffer.
pub fn reformat(current: &str) -> String {
    let mut out = String::with_capacity(MAX_DIGITS + 2);
    let digits = current
        .chars()
        .filter(char::is_ascii_digit)
        .take(MAX_DIGITS);
    for (index, digit) in digits.enumerate() {
        if index == 2 || index == 4 {
            out.push(SEPARATOR);
        }
        out.push(digit);
    }
    out
}

/// The digit buffer of a field's text: its ASCII digits, in order,
/// untruncated. Exposed so callers can compare content across edits
/// without caring about separator placement.
pub fn digits(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stays_empty() {
        assert_eq!(reformat(""), "");
    }

    #[test]
    fn separators_appear_after_second_and_fourth_digit() {
        assert_eq!(reformat("5"), "5");
        assert_eq!(reformat("12"), "12");
        assert_eq!(reformat("123"), "12/3");
        assert_eq!(reformat("1234"), "12/34");
        assert_eq!(reformat("12345"), "12/34/5");
        assert_eq!(reformat("123456"), "12/34/56");
    }

    #[test]
    fn seventh_digit_is_truncated() {
        assert_eq!(reformat("1234567"), "12/34/56");
    }

    #[test]
    fn non_digits_are_stripped() {
        assert_eq!(reformat("ab12cd34ef"), "12/34");
        assert_eq!(reformat("///"), "");
        assert_eq!(reformat("１２12"), "12");
    }

    #[test]
    fn already_masked_text_is_unchanged() {
        assert_eq!(reformat("12/34"), "12/34");
        assert_eq!(reformat("12/34/56"), "12/34/56");
    }
}
