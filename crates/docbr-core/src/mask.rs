//! # Mask Formatter
//!
//! Every document family formats its unmasked digits through a template
//! where `#` marks a digit slot and anything else is a literal separator:
//! `"###.###.###-##"` turns `12345678901` into `123.456.789-01`.
//!
//! [`apply_mask`] is total. It stops as soon as either the template or the
//! input runs out, so a short input yields a truncated string rather than
//! an error. Callers are expected to pass at least as many characters as
//! the template has placeholders.

/// Digit placeholder in mask templates.
pub const PLACEHOLDER: char = '#';

/// Insert template literals around the characters of `digits`.
pub fn apply_mask(digits: &str, template: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut source = digits.chars();
    let mut pending = source.next();

    for slot in template.chars() {
        let Some(c) = pending else { break };
        if slot == PLACEHOLDER {
            out.push(c);
            pending = source.next();
        } else {
            out.push(slot);
        }
    }
    out
}

/// Strip everything but ASCII digits.
pub fn unmask(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Number of digit slots in a template.
pub fn placeholder_count(template: &str) -> usize {
    template.chars().filter(|&c| c == PLACEHOLDER).count()
}

/// Parse a string made only of ASCII digits. Returns `None` on any other character.
pub fn digits_of(s: &str) -> Option<Vec<u8>> {
    s.bytes()
        .map(|b| b.is_ascii_digit().then(|| b - b'0'))
        .collect()
}

/// Render digit values `0..=9` as a string.
pub fn render_digits(digits: &[u8]) -> String {
    digits.iter().map(|&d| char::from(b'0' + d % 10)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn cpf_template() {
        assert_eq!(apply_mask("12345678901", "###.###.###-##"), "123.456.789-01");
    }

    #[test]
    fn cnpj_template() {
        assert_eq!(
            apply_mask("11222333000181", "##.###.###/####-##"),
            "11.222.333/0001-81"
        );
    }

    #[test]
    fn short_input_truncates_without_padding() {
        assert_eq!(apply_mask("1234", "###.###.###-##"), "123.4");
        assert_eq!(apply_mask("", "###"), "");
    }

    #[test]
    fn long_input_is_cut_at_template_end() {
        assert_eq!(apply_mask("123456", "##-##"), "12-34");
    }

    #[test]
    fn literal_letters_pass_through() {
        assert_eq!(apply_mask("00000005X", "##.###.###-#"), "00.000.005-X");
    }

    #[test]
    fn unmask_reverses_cpf_mask() {
        let masked = apply_mask("12345678901", "###.###.###-##");
        assert_eq!(unmask(&masked), "12345678901");
    }

    #[test]
    fn placeholder_count_ignores_literals() {
        assert_eq!(placeholder_count("###.###.###-##"), 11);
        assert_eq!(placeholder_count("#### #### ####"), 12);
        assert_eq!(placeholder_count("--"), 0);
    }

    #[test]
    fn digits_of_rejects_non_digits() {
        assert_eq!(digits_of("0912"), Some(vec![0, 9, 1, 2]));
        assert_eq!(digits_of("12a"), None);
        assert_eq!(digits_of(""), Some(vec![]));
    }

    #[test]
    fn render_digits_roundtrip() {
        assert_eq!(render_digits(&[1, 0, 9]), "109");
    }

    proptest! {
        /// Masking then stripping separators gives back the digits whenever
        /// the input exactly fills the template.
        #[test]
        fn mask_then_unmask_is_identity(digits in "[0-9]{11}") {
            let masked = apply_mask(&digits, "###.###.###-##");
            prop_assert_eq!(masked.len(), 14);
            prop_assert_eq!(unmask(&masked), digits);
        }

        /// Output never exceeds the template length.
        #[test]
        fn output_bounded_by_template(digits in "[0-9]{0,30}") {
            let masked = apply_mask(&digits, "##.###.###/####-##");
            prop_assert!(masked.len() <= 18);
        }
    }
}
