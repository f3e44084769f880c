//! EAN-8 / EAN-13 recognition.
//!
//! Used by scan capabilities to reject input before it reaches the core.
//! The core itself never validates: lookups compare raw strings.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbology {
    Ean8,
    Ean13,
}

impl Symbology {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ean8 => "EAN-8",
            Self::Ean13 => "EAN-13",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BarcodeError {
    #[error("barcode must contain only digits")]
    NonDigit,

    #[error("barcode has {0} digits, expected 8 or 13")]
    Length(usize),

    #[error("check digit mismatch: expected {expected}, found {found}")]
    CheckDigit { expected: u32, found: u32 },
}

/// Classify `code` as EAN-8 or EAN-13.
///
/// With `verify_check_digit` the trailing digit must match the modulo-10
/// checksum computed over the rest.
pub fn recognize(code: &str, verify_check_digit: bool) -> Result<Symbology, BarcodeError> {
    let digits: Vec<u32> = code
        .chars()
        .map(|c| c.to_digit(10))
        .collect::<Option<_>>()
        .ok_or(BarcodeError::NonDigit)?;

    let symbology = match digits.len() {
        8 => Symbology::Ean8,
        13 => Symbology::Ean13,
        n => return Err(BarcodeError::Length(n)),
    };

    if verify_check_digit {
        let (payload, check) = digits.split_at(digits.len() - 1);
        let expected = check_digit(payload);
        if expected != check[0] {
            return Err(BarcodeError::CheckDigit {
                expected,
                found: check[0],
            });
        }
    }

    Ok(symbology)
}

/// Modulo-10 check digit: weights alternate 3,1 starting from the digit
/// nearest the check position.
pub fn check_digit(payload: &[u32]) -> u32 {
    let sum: u32 = payload
        .iter()
        .rev()
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { d * 3 } else { *d })
        .sum();
    (10 - sum % 10) % 10
}
