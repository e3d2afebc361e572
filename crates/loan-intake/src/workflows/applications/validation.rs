use crate::workflows::banks::{BankCatalog, BankId};
use crate::workflows::offers::OfferError;

/// Reasons a submission is rejected before it reaches the log.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("T.C. kimlik number must be exactly 11 digits")]
    InvalidNationalId,
    #[error("phone number must be a Turkish mobile number (+905XXXXXXXXX)")]
    InvalidPhone,
    #[error("bank name is required")]
    MissingBank,
    #[error("bank {0} is not accepting applications")]
    UnknownBank(BankId),
    #[error(transparent)]
    Terms(#[from] OfferError),
}

pub fn validate_national_id(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.len() == 11 && trimmed.bytes().all(|byte| byte.is_ascii_digit()) {
        Ok(trimmed.to_string())
    } else {
        Err(ValidationError::InvalidNationalId)
    }
}

/// Accepts `+90 5xx`, `90 5xx`, `05xx` and `5xx` forms with common separators and returns the
/// `+905XXXXXXXXX` form.
pub fn normalize_phone(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    let (has_plus, rest) = match trimmed.strip_prefix('+') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let mut digits = String::with_capacity(rest.len());
    for ch in rest.chars() {
        match ch {
            '0'..='9' => digits.push(ch),
            ' ' | '-' | '(' | ')' | '.' => {}
            _ => return Err(ValidationError::InvalidPhone),
        }
    }

    let national = match (has_plus, digits.len()) {
        (_, 12) if digits.starts_with("90") => &digits[2..],
        (false, 11) if digits.starts_with('0') => &digits[1..],
        (false, 10) => digits.as_str(),
        _ => return Err(ValidationError::InvalidPhone),
    };

    if national.starts_with('5') {
        Ok(format!("+90{national}"))
    } else {
        Err(ValidationError::InvalidPhone)
    }
}

/// Picks the display name for the chosen bank. A catalog id must point to an active bank;
/// otherwise the free-text name must be non-blank.
pub fn resolve_bank_name(
    catalog: &BankCatalog,
    bank_id: Option<BankId>,
    bank_name: Option<&str>,
) -> Result<String, ValidationError> {
    if let Some(id) = bank_id {
        return match catalog.get(id) {
            Ok(bank) if bank.is_active => Ok(bank.name),
            _ => Err(ValidationError::UnknownBank(id)),
        };
    }

    match bank_name.map(str::trim) {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => Err(ValidationError::MissingBank),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::banks::default_partners;

    #[test]
    fn national_id_requires_eleven_digits() {
        assert_eq!(
            validate_national_id(" 12345678901 "),
            Ok("12345678901".to_string())
        );
        for bad in ["1234567890", "123456789012", "1234567890a", ""] {
            assert_eq!(
                validate_national_id(bad),
                Err(ValidationError::InvalidNationalId),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn phone_forms_normalize_to_international() {
        for raw in [
            "+905321234567",
            "+90 532 123 45 67",
            "905321234567",
            "0532 123-45-67",
            "(532) 123 45 67",
        ] {
            assert_eq!(
                normalize_phone(raw),
                Ok("+905321234567".to_string()),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn phone_rejects_landlines_and_garbage() {
        for raw in ["+902121234567", "02121234567", "+9053212345", "call me", "+05321234567"] {
            assert_eq!(
                normalize_phone(raw),
                Err(ValidationError::InvalidPhone),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn bank_id_resolves_to_catalog_name() {
        let catalog = BankCatalog::with_drafts(default_partners());
        assert_eq!(
            resolve_bank_name(&catalog, Some(1), Some("ignored")),
            Ok("Akbank".to_string())
        );

        catalog.deactivate(2).expect("bank exists");
        assert_eq!(
            resolve_bank_name(&catalog, Some(2), None),
            Err(ValidationError::UnknownBank(2))
        );
        assert_eq!(
            resolve_bank_name(&catalog, Some(99), None),
            Err(ValidationError::UnknownBank(99))
        );
    }

    #[test]
    fn free_text_bank_must_not_be_blank() {
        let catalog = BankCatalog::new();
        assert_eq!(
            resolve_bank_name(&catalog, None, Some(" Enpara ")),
            Ok("Enpara".to_string())
        );
        assert_eq!(
            resolve_bank_name(&catalog, None, Some("  ")),
            Err(ValidationError::MissingBank)
        );
        assert_eq!(
            resolve_bank_name(&catalog, None, None),
            Err(ValidationError::MissingBank)
        );
    }
}
