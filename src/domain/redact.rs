//! Masking of tax ids in free text before it reaches a log sink.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

const CPF_PLACEHOLDER: &str = "[CPF-REDACTED]";
const CNPJ_PLACEHOLDER: &str = "[CNPJ-REDACTED]";
const FULLY_REDACTED: &str = "[REDACTED]";

struct Patterns {
    cpf: Regex,
    cnpj: Regex,
}

static PATTERNS: OnceLock<Option<Patterns>> = OnceLock::new();

fn patterns() -> Option<&'static Patterns> {
    PATTERNS
        .get_or_init(|| {
            Some(Patterns {
                cpf: Regex::new(r"\b\d{3}\.?\d{3}\.?\d{3}-?\d{2}\b").ok()?,
                cnpj: Regex::new(r"\b\d{2}\.?\d{3}\.?\d{3}/?\d{4}-?\d{2}\b").ok()?,
            })
        })
        .as_ref()
}

/// Replace CPF- and CNPJ-shaped digit runs in `text` with placeholders.
///
/// Punctuated and bare forms are both matched. Text without matches is
/// returned borrowed.
#[must_use]
pub fn redact_tax_ids(text: &str) -> Cow<'_, str> {
    let Some(patterns) = patterns() else {
        return Cow::Borrowed(FULLY_REDACTED);
    };

    match patterns.cnpj.replace_all(text, CNPJ_PLACEHOLDER) {
        Cow::Borrowed(_) => patterns.cpf.replace_all(text, CPF_PLACEHOLDER),
        Cow::Owned(without_cnpj) => {
            Cow::Owned(patterns.cpf.replace_all(&without_cnpj, CPF_PLACEHOLDER).into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_punctuated_and_bare_cpf() {
        assert_eq!(
            redact_tax_ids("User with CPF 123.456.789-01 attempted login"),
            "User with CPF [CPF-REDACTED] attempted login"
        );
        assert_eq!(
            redact_tax_ids("cpf=98765432100"),
            "cpf=[CPF-REDACTED]"
        );
    }

    #[test]
    fn masks_cnpj_without_leaking_a_cpf_match() {
        assert_eq!(
            redact_tax_ids("merchant 11.222.333/0001-81 paid"),
            "merchant [CNPJ-REDACTED] paid"
        );
        assert_eq!(
            redact_tax_ids("merchant 11222333000181 paid"),
            "merchant [CNPJ-REDACTED] paid"
        );
    }

    #[test]
    fn leaves_other_numbers_alone() {
        let text = "room 42 holds 20 seats at R$ 10,00";
        assert!(matches!(redact_tax_ids(text), Cow::Borrowed(_)));
        assert_eq!(redact_tax_ids("order 1234567890"), "order 1234567890");
    }

    #[test]
    fn masks_every_occurrence() {
        assert_eq!(
            redact_tax_ids("52998224725 and 529.982.247-25"),
            "[CPF-REDACTED] and [CPF-REDACTED]"
        );
    }
}
