//! Integration tests for CPF/CNPJ validation, formatting and redaction.

use bolao::domain::{
    classify_tax_id, format_cpf, format_tax_id_for_display, is_valid_tax_id, normalize_digits,
    redact_tax_ids, TaxIdField, TaxIdKind, TaxIdRejection,
};
use bolao::testkit::domain::{corrupt_last_digit, valid_cnpj, valid_cpf, KNOWN_CNPJS, KNOWN_CPFS};

#[test]
fn test_known_identifiers_classify_by_length() {
    for cpf in KNOWN_CPFS {
        assert_eq!(classify_tax_id(cpf).kind(), TaxIdKind::Cpf, "{cpf}");
    }
    for cnpj in KNOWN_CNPJS {
        assert_eq!(classify_tax_id(cnpj).kind(), TaxIdKind::Cnpj, "{cnpj}");
    }
}

#[test]
fn test_punctuated_input_is_normalized() {
    let tax_id = classify_tax_id("529.982.247-25");
    assert_eq!(tax_id.kind(), TaxIdKind::Cpf);
    assert_eq!(tax_id.digits(), "52998224725");

    let tax_id = classify_tax_id(" 11.222.333/0001-81 ");
    assert_eq!(tax_id.kind(), TaxIdKind::Cnpj);
    assert_eq!(tax_id.formatted().as_deref(), Some("11.222.333/0001-81"));
}

#[test]
fn test_generated_bases_round_trip() {
    let bases = [
        [1, 2, 3, 4, 5, 6, 7, 8, 9],
        [9, 8, 7, 6, 5, 4, 3, 2, 1],
        [0, 0, 0, 0, 0, 0, 0, 0, 1],
        [4, 0, 1, 2, 7, 3, 9, 9, 0],
    ];
    for base in bases {
        let cpf = valid_cpf(base);
        assert_eq!(classify_tax_id(&cpf).kind(), TaxIdKind::Cpf, "{cpf}");
        assert_eq!(
            classify_tax_id(&corrupt_last_digit(&cpf)).kind(),
            TaxIdKind::Invalid
        );
    }

    let cnpj_bases = [
        [1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1],
        [0, 4, 5, 9, 7, 0, 6, 7, 0, 0, 0, 1],
        [9, 8, 7, 6, 5, 4, 3, 2, 0, 0, 0, 1],
    ];
    for base in cnpj_bases {
        let cnpj = valid_cnpj(base);
        assert_eq!(classify_tax_id(&cnpj).kind(), TaxIdKind::Cnpj, "{cnpj}");
        assert_eq!(
            classify_tax_id(&corrupt_last_digit(&cnpj)).kind(),
            TaxIdKind::Invalid
        );
    }
}

#[test]
fn test_repeated_digits_are_rejected_without_checksum() {
    for digit in '0'..='9' {
        let cpf: String = std::iter::repeat(digit).take(11).collect();
        let cnpj: String = std::iter::repeat(digit).take(14).collect();
        assert_eq!(
            classify_tax_id(&cpf).rejection(),
            Some(&TaxIdRejection::RepeatedDigits)
        );
        assert_eq!(
            classify_tax_id(&cnpj).rejection(),
            Some(&TaxIdRejection::RepeatedDigits)
        );
    }
}

#[test]
fn test_other_lengths_are_invalid() {
    for raw in ["", "123", "1234567890", "123456789012", "123456789012345"] {
        let tax_id = classify_tax_id(raw);
        assert_eq!(tax_id.kind(), TaxIdKind::Invalid, "{raw:?}");
        assert!(!is_valid_tax_id(raw));
    }
    assert_eq!(classify_tax_id("").rejection(), Some(&TaxIdRejection::Empty));
}

#[test]
fn test_progressive_display_format() {
    assert_eq!(format_tax_id_for_display(""), "");
    assert_eq!(format_tax_id_for_display("123"), "123");
    assert_eq!(format_tax_id_for_display("1234"), "123.4");
    assert_eq!(format_tax_id_for_display("123456"), "123.456");
    assert_eq!(format_tax_id_for_display("1234567890"), "123.456.789-0");
    assert_eq!(format_tax_id_for_display("12345678901"), "123.456.789-01");
    assert_eq!(
        format_tax_id_for_display("12345678901234"),
        "12.345.678/9012-34"
    );
    assert_eq!(
        format_tax_id_for_display("123456789012345678"),
        "12.345.678/9012-34"
    );
}

#[test]
fn test_display_format_is_idempotent() {
    for raw in ["1", "1234", "1234567", "12345678901", "123456789012", "12345678901234"] {
        let once = format_tax_id_for_display(raw);
        let twice = format_tax_id_for_display(&once);
        assert_eq!(once, twice);
        assert_eq!(normalize_digits(&once), raw);
    }
}

#[test]
fn test_strict_cpf_format_requires_eleven_digits() {
    assert_eq!(
        format_cpf("52998224725").as_deref(),
        Some("529.982.247-25")
    );
    assert_eq!(format_cpf("5299822472"), None);
}

#[test]
fn test_input_field_emits_clean_value() {
    let mut field = TaxIdField::new();
    let change = field.change("529.982.2");
    assert_eq!(change.display, "529.982.2");
    assert_eq!(change.value, "5299822");

    let change = field.change("112223330001819999");
    assert_eq!(change.value, "11222333000181");
    assert_eq!(change.display, "11.222.333/0001-81");
    assert!(field.validate().is_valid());

    assert!(TaxIdField::accepts_key("7"));
    assert!(TaxIdField::accepts_key("Backspace"));
    assert!(!TaxIdField::accepts_key("a"));
}

#[test]
fn test_redaction_masks_identifiers_in_log_lines() {
    let line = "withdrawal for 529.982.247-25 to 11.222.333/0001-81";
    let redacted = redact_tax_ids(line);
    assert!(!redacted.contains("529.982.247-25"));
    assert!(!redacted.contains("11.222.333/0001-81"));
    assert_eq!(
        redacted,
        "withdrawal for [CPF-REDACTED] to [CNPJ-REDACTED]"
    );
}

#[test]
fn test_tax_id_redacted_keeps_only_middle_digits() {
    assert_eq!(classify_tax_id("52998224725").redacted(), "***.982.247-**");
    assert_eq!(
        classify_tax_id("11222333000181").redacted(),
        "**.222.333/****-**"
    );
}
