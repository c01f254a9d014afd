//! Display masks for tax ids and phone numbers.
//!
//! Masks are templates where `#` consumes one digit and any other character
//! is a separator. A separator is only written when a digit follows it, so
//! applying a mask to partial input reveals the layout progressively while
//! the user types.

use super::tax_id::{normalize_digits, CNPJ_LENGTH, CPF_LENGTH};

const DIGIT_SLOT: char = '#';

const CPF_MASK: &str = "###.###.###-##";
const CNPJ_MASK: &str = "##.###.###/####-##";
const MOBILE_PHONE_MASK: &str = "(##) # ####-####";
const MOBILE_PHONE_LENGTH: usize = 11;

/// Progressive display rules, ordered by the largest digit count they cover.
/// Input longer than the last rule is truncated to it.
const DISPLAY_RULES: &[(usize, &str)] = &[(CPF_LENGTH, CPF_MASK), (CNPJ_LENGTH, CNPJ_MASK)];

/// Format a tax id for display while it is being typed.
///
/// Never fails: any string is reduced to its digits and formatted as far as
/// those digits go. Up to 11 digits follow the CPF layout, 12 to 14 the CNPJ
/// layout.
#[must_use]
pub fn format_tax_id_for_display(raw: &str) -> String {
    let digits = normalize_digits(raw);
    let Some(&(max_digits, mask)) = DISPLAY_RULES
        .iter()
        .find(|(max_digits, _)| digits.len() <= *max_digits)
        .or(DISPLAY_RULES.last())
    else {
        return digits;
    };

    let end = digits.len().min(max_digits);
    apply_mask(&digits[..end], mask)
}

/// Format a complete CPF as `DDD.DDD.DDD-DD`; `None` unless `raw` holds
/// exactly 11 digits.
#[must_use]
pub fn format_cpf(raw: &str) -> Option<String> {
    let digits = normalize_digits(raw);
    (digits.len() == CPF_LENGTH).then(|| apply_mask(&digits, CPF_MASK))
}

/// Format an 11-digit Brazilian mobile number as `(DD) D DDDD-DDDD`.
///
/// Anything that is not exactly 11 digits is returned unchanged.
#[must_use]
pub fn format_mobile_phone(raw: &str) -> String {
    let digits = normalize_digits(raw);
    if digits.len() == MOBILE_PHONE_LENGTH {
        apply_mask(&digits, MOBILE_PHONE_MASK)
    } else {
        raw.to_string()
    }
}

fn apply_mask(digits: &str, mask: &str) -> String {
    let mut formatted = String::with_capacity(mask.len());
    let mut digits = digits.chars().peekable();

    for slot in mask.chars() {
        if digits.peek().is_none() {
            break;
        }
        if slot == DIGIT_SLOT {
            formatted.extend(digits.next());
        } else {
            formatted.push(slot);
        }
    }

    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progressive_cpf_brackets() {
        assert_eq!(format_tax_id_for_display(""), "");
        assert_eq!(format_tax_id_for_display("1"), "1");
        assert_eq!(format_tax_id_for_display("123"), "123");
        assert_eq!(format_tax_id_for_display("1234"), "123.4");
        assert_eq!(format_tax_id_for_display("123456"), "123.456");
        assert_eq!(format_tax_id_for_display("1234567"), "123.456.7");
        assert_eq!(format_tax_id_for_display("123456789"), "123.456.789");
        assert_eq!(format_tax_id_for_display("1234567890"), "123.456.789-0");
        assert_eq!(format_tax_id_for_display("12345678901"), "123.456.789-01");
    }

    #[test]
    fn progressive_cnpj_brackets() {
        assert_eq!(format_tax_id_for_display("123456789012"), "12.345.678/9012");
        assert_eq!(format_tax_id_for_display("1234567890123"), "12.345.678/9012-3");
        assert_eq!(
            format_tax_id_for_display("12345678901234"),
            "12.345.678/9012-34"
        );
    }

    #[test]
    fn input_beyond_cnpj_is_truncated() {
        assert_eq!(
            format_tax_id_for_display("123456789012345678"),
            "12.345.678/9012-34"
        );
    }

    #[test]
    fn non_digits_are_dropped() {
        assert_eq!(format_tax_id_for_display("abc"), "");
        assert_eq!(format_tax_id_for_display("529.982.247-25"), "529.982.247-25");
        assert_eq!(format_tax_id_for_display("12a34"), "123.4");
    }

    #[test]
    fn reformatting_is_stable() {
        for raw in ["1", "1234", "123456789", "12345678901", "1234567890123", "12345678901234"] {
            let once = format_tax_id_for_display(raw);
            let twice = format_tax_id_for_display(&normalize_digits(&once));
            assert_eq!(once, twice, "{raw}");
        }
    }

    #[test]
    fn strict_cpf_requires_eleven_digits() {
        assert_eq!(format_cpf("52998224725").as_deref(), Some("529.982.247-25"));
        assert_eq!(format_cpf("529.982.247-25").as_deref(), Some("529.982.247-25"));
        assert_eq!(format_cpf("5299822472"), None);
    }

    #[test]
    fn mobile_phone_mask() {
        assert_eq!(format_mobile_phone("11987654321"), "(11) 9 8765-4321");
        assert_eq!(format_mobile_phone(""), "");
        assert_eq!(format_mobile_phone("1234"), "1234");
    }
}
