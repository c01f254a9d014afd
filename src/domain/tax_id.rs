//! CPF/CNPJ classification and check-digit verification.
//!
//! Both document types carry two trailing modulo-11 check digits:
//!
//! - **CPF** (11 digits): weights descend from `len + 1` to 2 across the
//!   digits that precede the check digit.
//! - **CNPJ** (14 digits): weights cycle 2..=9 starting from the rightmost
//!   digit that precedes the check digit.
//!
//! Invalid input is an ordinary outcome here, not an error: classification
//! always returns a [`TaxId`], whose kind is [`TaxIdKind::Invalid`] when the
//! value is rejected.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use super::display::format_tax_id_for_display;

/// Digit count of a CPF.
pub const CPF_LENGTH: usize = 11;
/// Digit count of a CNPJ.
pub const CNPJ_LENGTH: usize = 14;

const CPF_BASE_LENGTH: usize = CPF_LENGTH - 2;
const CNPJ_BASE_LENGTH: usize = CNPJ_LENGTH - 2;
const CHECK_MODULUS: u32 = 11;
const CNPJ_WEIGHT_CYCLE: [u32; 8] = [2, 3, 4, 5, 6, 7, 8, 9];

/// Document type detected for a tax id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaxIdKind {
    Cpf,
    Cnpj,
    Invalid,
}

impl TaxIdKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
            Self::Invalid => "invalid",
        }
    }
}

impl fmt::Display for TaxIdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a tax id was classified as invalid.
///
/// The messages are meant to be shown next to the form field that blocked
/// submission.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum TaxIdRejection {
    #[error("a CPF or CNPJ is required")]
    Empty,

    #[error("a tax id must have 11 (CPF) or 14 (CNPJ) digits, got {length}")]
    WrongLength { length: usize },

    #[error("a tax id cannot repeat a single digit")]
    RepeatedDigits,

    #[error("invalid {kind} (check digits do not match)")]
    ChecksumMismatch { kind: TaxIdKind },
}

/// Result of classifying a free-form tax id string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxId {
    kind: TaxIdKind,
    digits: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    rejection: Option<TaxIdRejection>,
}

impl TaxId {
    /// Detected document type.
    #[must_use]
    pub const fn kind(&self) -> TaxIdKind {
        self.kind
    }

    /// The input with every non-digit character removed.
    #[must_use]
    pub fn digits(&self) -> &str {
        &self.digits
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        !matches!(self.kind, TaxIdKind::Invalid)
    }

    /// Reason for rejection, if the value is invalid.
    #[must_use]
    pub const fn rejection(&self) -> Option<&TaxIdRejection> {
        self.rejection.as_ref()
    }

    /// Canonical display form of a valid value.
    #[must_use]
    pub fn formatted(&self) -> Option<String> {
        self.is_valid()
            .then(|| format_tax_id_for_display(&self.digits))
    }

    /// Masked form safe to write to logs.
    ///
    /// Only the middle digits of a valid value survive; invalid values are
    /// replaced entirely since their shape is unknown.
    #[must_use]
    pub fn redacted(&self) -> String {
        let d = &self.digits;
        match self.kind {
            TaxIdKind::Cpf => format!("***.{}.{}-**", &d[3..6], &d[6..9]),
            TaxIdKind::Cnpj => format!("**.{}.{}/****-**", &d[2..5], &d[5..8]),
            TaxIdKind::Invalid => "[TAX-ID-REDACTED]".to_string(),
        }
    }
}

/// Strip every non-digit character.
#[must_use]
pub fn normalize_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Classify `raw` as a CPF, a CNPJ or invalid.
#[must_use]
pub fn classify_tax_id(raw: &str) -> TaxId {
    let digits = normalize_digits(raw);
    match verify(&digits) {
        Ok(kind) => TaxId {
            kind,
            digits,
            rejection: None,
        },
        Err(rejection) => TaxId {
            kind: TaxIdKind::Invalid,
            digits,
            rejection: Some(rejection),
        },
    }
}

#[must_use]
pub fn is_valid_cpf(raw: &str) -> bool {
    classify_tax_id(raw).kind() == TaxIdKind::Cpf
}

#[must_use]
pub fn is_valid_cnpj(raw: &str) -> bool {
    classify_tax_id(raw).kind() == TaxIdKind::Cnpj
}

#[must_use]
pub fn is_valid_tax_id(raw: &str) -> bool {
    classify_tax_id(raw).is_valid()
}

/// Check digits for a 9-digit CPF base.
#[must_use]
pub fn cpf_check_digits(base: &[u8; CPF_BASE_LENGTH]) -> [u8; 2] {
    check_digits(base, cpf_digit)
}

/// Check digits for a 12-digit CNPJ base.
#[must_use]
pub fn cnpj_check_digits(base: &[u8; CNPJ_BASE_LENGTH]) -> [u8; 2] {
    check_digits(base, cnpj_digit)
}

fn verify(digits: &str) -> Result<TaxIdKind, TaxIdRejection> {
    let values: Vec<u8> = digits.bytes().map(|b| b - b'0').collect();

    let (kind, base_length, digit): (_, _, fn(&[u8]) -> u8) = match values.len() {
        0 => return Err(TaxIdRejection::Empty),
        CPF_LENGTH => (TaxIdKind::Cpf, CPF_BASE_LENGTH, cpf_digit),
        CNPJ_LENGTH => (TaxIdKind::Cnpj, CNPJ_BASE_LENGTH, cnpj_digit),
        length => return Err(TaxIdRejection::WrongLength { length }),
    };

    if values.windows(2).all(|pair| pair[0] == pair[1]) {
        return Err(TaxIdRejection::RepeatedDigits);
    }

    let (base, given) = values.split_at(base_length);
    if given == check_digits(base, digit).as_slice() {
        Ok(kind)
    } else {
        Err(TaxIdRejection::ChecksumMismatch { kind })
    }
}

fn check_digits(base: &[u8], digit: fn(&[u8]) -> u8) -> [u8; 2] {
    let first = digit(base);
    let mut extended = Vec::with_capacity(base.len() + 1);
    extended.extend_from_slice(base);
    extended.push(first);
    [first, digit(&extended)]
}

fn cpf_digit(digits: &[u8]) -> u8 {
    let top = digits.len() as u32 + 1;
    let sum = digits
        .iter()
        .zip((2..=top).rev())
        .map(|(&d, weight)| u32::from(d) * weight)
        .sum();
    mod11_digit(sum)
}

fn cnpj_digit(digits: &[u8]) -> u8 {
    let sum = digits
        .iter()
        .rev()
        .zip(CNPJ_WEIGHT_CYCLE.iter().cycle())
        .map(|(&d, &weight)| u32::from(d) * weight)
        .sum();
    mod11_digit(sum)
}

/// `0` when the remainder is below 2, else `11 - remainder`.
///
/// The CPF statement of the rule (`11 - r`, or 0 when that is 10 or more)
/// is the same function.
fn mod11_digit(sum: u32) -> u8 {
    let remainder = sum % CHECK_MODULUS;
    if remainder < 2 {
        0
    } else {
        (CHECK_MODULUS - remainder) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_cpf_is_valid() {
        let tax_id = classify_tax_id("52998224725");
        assert_eq!(tax_id.kind(), TaxIdKind::Cpf);
        assert_eq!(tax_id.digits(), "52998224725");
        assert!(tax_id.rejection().is_none());
    }

    #[test]
    fn punctuation_is_ignored() {
        assert_eq!(classify_tax_id("529.982.247-25").kind(), TaxIdKind::Cpf);
        assert_eq!(classify_tax_id("11.222.333/0001-81").kind(), TaxIdKind::Cnpj);
        assert_eq!(classify_tax_id(" 123.456.789-09 ").digits(), "12345678909");
    }

    #[test]
    fn known_cnpjs_are_valid() {
        for cnpj in ["11222333000181", "12345678000195", "04597067000106"] {
            assert_eq!(classify_tax_id(cnpj).kind(), TaxIdKind::Cnpj, "{cnpj}");
        }
    }

    #[test]
    fn repeated_digits_rejected_before_checksum() {
        for raw in ["11111111111", "00000000000", "99999999999999"] {
            let tax_id = classify_tax_id(raw);
            assert_eq!(tax_id.kind(), TaxIdKind::Invalid);
            assert_eq!(tax_id.rejection(), Some(&TaxIdRejection::RepeatedDigits));
        }
    }

    #[test]
    fn wrong_lengths_are_invalid() {
        assert_eq!(
            classify_tax_id("1234567890").rejection(),
            Some(&TaxIdRejection::WrongLength { length: 10 })
        );
        assert_eq!(
            classify_tax_id("123456789012").rejection(),
            Some(&TaxIdRejection::WrongLength { length: 12 })
        );
        assert_eq!(classify_tax_id("abc").rejection(), Some(&TaxIdRejection::Empty));
    }

    #[test]
    fn wrong_check_digit_is_checksum_mismatch() {
        assert_eq!(
            classify_tax_id("52998224724").rejection(),
            Some(&TaxIdRejection::ChecksumMismatch {
                kind: TaxIdKind::Cpf
            })
        );
        assert_eq!(
            classify_tax_id("11222333000182").rejection(),
            Some(&TaxIdRejection::ChecksumMismatch {
                kind: TaxIdKind::Cnpj
            })
        );
    }

    #[test]
    fn first_check_digit_is_verified_independently() {
        // second digit left untouched, first digit altered
        assert!(!is_valid_cpf("52998224735"));
        assert!(!is_valid_cnpj("11222333000191"));
    }

    #[test]
    fn check_digit_generation() {
        assert_eq!(cpf_check_digits(&[5, 2, 9, 9, 8, 2, 2, 4, 7]), [2, 5]);
        assert_eq!(cpf_check_digits(&[0, 0, 0, 0, 0, 0, 0, 0, 1]), [9, 1]);
        assert_eq!(
            cnpj_check_digits(&[1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1]),
            [8, 1]
        );
    }

    #[test]
    fn remainder_below_two_yields_zero_digit() {
        assert_eq!(cpf_check_digits(&[1, 0, 0, 0, 0, 0, 0, 0, 1]), [0, 8]);
        assert!(is_valid_cpf("10000000108"));
        assert!(is_valid_cpf("12345678909"));
        assert!(is_valid_cpf("11144477735"));
        assert_eq!(mod11_digit(22), 0);
        assert_eq!(mod11_digit(23), 0);
        assert_eq!(mod11_digit(24), 9);
    }

    #[test]
    fn formatted_and_redacted_forms() {
        let cpf = classify_tax_id("52998224725");
        assert_eq!(cpf.formatted().as_deref(), Some("529.982.247-25"));
        assert_eq!(cpf.redacted(), "***.982.247-**");

        let cnpj = classify_tax_id("11222333000181");
        assert_eq!(cnpj.formatted().as_deref(), Some("11.222.333/0001-81"));
        assert_eq!(cnpj.redacted(), "**.222.333/****-**");

        let invalid = classify_tax_id("123");
        assert_eq!(invalid.formatted(), None);
        assert_eq!(invalid.redacted(), "[TAX-ID-REDACTED]");
    }

    #[test]
    fn rejection_messages_are_user_facing() {
        assert_eq!(
            TaxIdRejection::ChecksumMismatch {
                kind: TaxIdKind::Cpf
            }
            .to_string(),
            "invalid CPF (check digits do not match)"
        );
        assert_eq!(
            TaxIdRejection::WrongLength { length: 5 }.to_string(),
            "a tax id must have 11 (CPF) or 14 (CNPJ) digits, got 5"
        );
    }

    #[test]
    fn serializes_kind_and_digits() {
        let json = serde_json::to_value(classify_tax_id("529.982.247-25")).unwrap();
        assert_eq!(json["kind"], "CPF");
        assert_eq!(json["digits"], "52998224725");
        assert!(json.get("rejection").is_none());

        let json = serde_json::to_value(classify_tax_id("1")).unwrap();
        assert_eq!(json["kind"], "INVALID");
        assert_eq!(json["rejection"]["reason"], "wrong_length");
    }
}
