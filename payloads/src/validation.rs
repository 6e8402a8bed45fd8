//! Field-level validation rules for the product form.
//!
//! Rules run synchronously at submit time. Each rule is a small enum
//! with `is_valid` and `error_message` so the UI can surface inline
//! messages per field. The acquisition-date bound takes the reference
//! date as a parameter to keep the rules pure.

use jiff::civil::Date;
use rust_decimal::Decimal;

use crate::PRODUCT_NAME_MAX_LEN;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameValidation {
    Valid,
    Empty,
    TooLong,
}

impl NameValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::Empty => Some("Name is required"),
            Self::TooLong => Some("Name must be at most 255 characters"),
        }
    }
}

pub fn validate_name(name: &str) -> NameValidation {
    let name = name.trim();
    if name.is_empty() {
        NameValidation::Empty
    } else if name.len() > PRODUCT_NAME_MAX_LEN {
        NameValidation::TooLong
    } else {
        NameValidation::Valid
    }
}

/// Validation for the numeric fields: value and the measurements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberValidation {
    Valid,
    Missing,
    NotANumber,
    Negative,
}

impl NumberValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::Missing => Some("This field is required"),
            Self::NotANumber => Some("Enter a number"),
            Self::Negative => Some("Must not be negative"),
        }
    }
}

/// Blank input is valid unless the field is required; non-blank input
/// must parse as a non-negative decimal.
pub fn validate_number(input: &str, required: bool) -> NumberValidation {
    let input = input.trim();
    if input.is_empty() {
        return if required {
            NumberValidation::Missing
        } else {
            NumberValidation::Valid
        };
    }
    match input.parse::<Decimal>() {
        Ok(d) if d.is_sign_negative() && !d.is_zero() => {
            NumberValidation::Negative
        }
        Ok(_) => NumberValidation::Valid,
        Err(_) => NumberValidation::NotANumber,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BarcodeValidation {
    Valid,
    NotNumeric,
}

impl BarcodeValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::NotNumeric => Some("Barcode must contain digits only"),
        }
    }
}

pub fn validate_barcode(input: &str) -> BarcodeValidation {
    let input = input.trim();
    if input.is_empty() || input.chars().all(|c| c.is_ascii_digit()) {
        BarcodeValidation::Valid
    } else {
        BarcodeValidation::NotNumeric
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcquisitionValidation {
    Valid,
    Unparseable,
    InFuture,
}

impl AcquisitionValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::Unparseable => Some("Enter a date as YYYY-MM-DD"),
            Self::InFuture => Some("Acquisition date must not be in the future"),
        }
    }
}

/// Blank input is valid; non-blank input must be a `YYYY-MM-DD` date no
/// later than `today`.
pub fn validate_acquisition(input: &str, today: Date) -> AcquisitionValidation {
    let input = input.trim();
    if input.is_empty() {
        return AcquisitionValidation::Valid;
    }
    match input.parse::<Date>() {
        Ok(date) if date > today => AcquisitionValidation::InFuture,
        Ok(_) => AcquisitionValidation::Valid,
        Err(_) => AcquisitionValidation::Unparseable,
    }
}

/// Parse a validated text field, treating blank input as absent.
pub fn parse_text(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse a validated numeric field, treating blank input as absent.
pub fn parse_decimal(input: &str) -> Option<Decimal> {
    input.trim().parse().ok()
}

/// Parse a validated date field, treating blank input as absent.
pub fn parse_date(input: &str) -> Option<Date> {
    input.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Drill press").is_valid());
        assert_eq!(validate_name(""), NameValidation::Empty);
        assert_eq!(validate_name("   "), NameValidation::Empty);
        assert_eq!(validate_name(&"x".repeat(256)), NameValidation::TooLong);
        assert!(validate_name(&"x".repeat(255)).is_valid());
    }

    #[test]
    fn test_validate_number() {
        assert!(validate_number("12.50", true).is_valid());
        assert!(validate_number("0", true).is_valid());
        assert!(validate_number(" 3 ", false).is_valid());
        assert_eq!(validate_number("", true), NumberValidation::Missing);
        assert!(validate_number("", false).is_valid());
        assert_eq!(
            validate_number("twelve", false),
            NumberValidation::NotANumber
        );
        assert_eq!(validate_number("-1", false), NumberValidation::Negative);
    }

    #[test]
    fn test_validate_barcode() {
        assert!(validate_barcode("").is_valid());
        assert!(validate_barcode("7891000100103").is_valid());
        assert_eq!(
            validate_barcode("78-91"),
            BarcodeValidation::NotNumeric
        );
        assert_eq!(
            validate_barcode("abc123"),
            BarcodeValidation::NotNumeric
        );
    }

    #[test]
    fn test_validate_acquisition() {
        let today = date(2024, 6, 15);
        assert!(validate_acquisition("", today).is_valid());
        assert!(validate_acquisition("2024-06-15", today).is_valid());
        assert!(validate_acquisition("2020-01-01", today).is_valid());
        assert_eq!(
            validate_acquisition("2024-06-16", today),
            AcquisitionValidation::InFuture
        );
        assert_eq!(
            validate_acquisition("June 1st", today),
            AcquisitionValidation::Unparseable
        );
    }

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_text("  "), None);
        assert_eq!(parse_text(" desk "), Some("desk".to_string()));
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("2.5"), Some(Decimal::new(25, 1)));
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("2023-11-02"), Some(date(2023, 11, 2)));
    }
}
