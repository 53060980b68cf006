//! Booking form validation rules.
//!
//! Field-level checks for the personal info and payment steps. Each failed
//! check is reported against the field it belongs to so the UI can show the
//! message directly under that input.

use regex::Regex;
use std::collections::BTreeMap;

use crate::backend::domain::models::{FormField, PaymentDetails, PersonalDetails};

const MIN_PHONE_DIGITS: usize = 7;
const MAX_PHONE_DIGITS: usize = 15;
const MIN_CARD_DIGITS: usize = 13;
const MIN_CVC_DIGITS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(FormField),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
    #[error("Please enter a valid card number")]
    InvalidCardNumber,
    #[error("Please enter MM/YY format")]
    InvalidExpiry,
    #[error("Please enter a valid CVC")]
    InvalidCvc,
}

/// Validation failures keyed by the field they belong to
pub type FieldErrors = BTreeMap<FormField, ValidationError>;

/// Compiled validation patterns
#[derive(Clone)]
pub struct FormValidator {
    email_pattern: Regex,
    expiry_pattern: Regex,
}

impl FormValidator {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            email_pattern: Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")?,
            expiry_pattern: Regex::new(r"^\d{2}/\d{2}$")?,
        })
    }

    /// Something before an `@`, then a domain containing a `.`; surrounding spaces are rejected
    pub fn is_valid_email(&self, email: &str) -> bool {
        self.email_pattern.is_match(email)
    }

    pub fn is_valid_expiry(&self, expiry: &str) -> bool {
        self.expiry_pattern.is_match(expiry.trim())
    }

    /// Checks for the personal info step
    pub fn validate_personal(&self, details: &PersonalDetails) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if details.first_name.trim().is_empty() {
            errors.insert(FormField::FirstName, ValidationError::Required(FormField::FirstName));
        }

        if details.last_name.trim().is_empty() {
            errors.insert(FormField::LastName, ValidationError::Required(FormField::LastName));
        }

        if details.email.trim().is_empty() {
            errors.insert(FormField::Email, ValidationError::Required(FormField::Email));
        } else if !self.is_valid_email(&details.email) {
            errors.insert(FormField::Email, ValidationError::InvalidEmail);
        }

        if details.phone.trim().is_empty() {
            errors.insert(FormField::Phone, ValidationError::Required(FormField::Phone));
        } else if !is_valid_phone(&details.full_phone()) {
            errors.insert(FormField::Phone, ValidationError::InvalidPhone);
        }

        errors
    }

    /// Checks for the payment step
    pub fn validate_payment(&self, payment: &PaymentDetails) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if payment.card_number.trim().is_empty() {
            errors.insert(FormField::CardNumber, ValidationError::Required(FormField::CardNumber));
        } else if !is_valid_card_number(&payment.card_number) {
            errors.insert(FormField::CardNumber, ValidationError::InvalidCardNumber);
        }

        if payment.card_expiry.trim().is_empty() {
            errors.insert(FormField::CardExpiry, ValidationError::Required(FormField::CardExpiry));
        } else if !self.is_valid_expiry(&payment.card_expiry) {
            errors.insert(FormField::CardExpiry, ValidationError::InvalidExpiry);
        }

        if payment.card_cvc.trim().is_empty() {
            errors.insert(FormField::CardCvc, ValidationError::Required(FormField::CardCvc));
        } else if !is_valid_cvc(&payment.card_cvc) {
            errors.insert(FormField::CardCvc, ValidationError::InvalidCvc);
        }

        errors
    }
}

/// Count of ASCII digits once every other character is stripped
pub fn digit_count(input: &str) -> usize {
    input.chars().filter(|c| c.is_ascii_digit()).count()
}

/// 7 to 15 digits once formatting characters are removed
pub fn is_valid_phone(phone: &str) -> bool {
    (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digit_count(phone))
}

/// At least 13 digits; spaces between digit groups are ignored
pub fn is_valid_card_number(card_number: &str) -> bool {
    let compact: String = card_number.chars().filter(|c| !c.is_whitespace()).collect();
    compact.len() >= MIN_CARD_DIGITS && compact.chars().all(|c| c.is_ascii_digit())
}

pub fn is_valid_cvc(cvc: &str) -> bool {
    let cvc = cvc.trim();
    cvc.len() >= MIN_CVC_DIGITS && cvc.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> FormValidator {
        FormValidator::new().unwrap()
    }

    fn valid_personal() -> PersonalDetails {
        PersonalDetails {
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            email: "jane@example.com".to_string(),
            phone: "555 123 4567".to_string(),
            ..PersonalDetails::default()
        }
    }

    fn valid_payment() -> PaymentDetails {
        PaymentDetails {
            card_number: "4242 4242 4242 4242".to_string(),
            card_expiry: "12/29".to_string(),
            card_cvc: "123".to_string(),
            ..PaymentDetails::default()
        }
    }

    #[test]
    fn test_email_validation() {
        let validator = validator();
        assert!(validator.is_valid_email("a@b.co"));
        assert!(validator.is_valid_email("jane.smith@example.org"));
        assert!(!validator.is_valid_email("jane.example.com"));
        assert!(!validator.is_valid_email("jane@example"));
        assert!(!validator.is_valid_email("jane@@example.com"));
        assert!(!validator.is_valid_email("ja ne@example.com"));
        assert!(!validator.is_valid_email(" a@b.co"));
        assert!(!validator.is_valid_email("a@b.co "));
    }

    #[test]
    fn test_padded_email_is_invalid_not_missing() {
        let validator = validator();
        let mut details = valid_personal();
        details.email = " jane@example.com".to_string();
        let errors = validator.validate_personal(&details);
        assert_eq!(errors.get(&FormField::Email), Some(&ValidationError::InvalidEmail));
    }

    #[test]
    fn test_phone_digit_bounds() {
        assert!(is_valid_phone("1234567"));
        assert!(is_valid_phone("123456789012345"));
        assert!(is_valid_phone("+1 (555) 123-4567"));
        assert!(!is_valid_phone("123456"));
        assert!(!is_valid_phone("1234567890123456"));
        assert!(!is_valid_phone("+-() "));
    }

    #[test]
    fn test_card_rules() {
        let validator = validator();
        assert!(is_valid_card_number("4242424242424"));
        assert!(is_valid_card_number("4242 4242 4242 4242"));
        assert!(!is_valid_card_number("4242 4242 4242"));
        assert!(!is_valid_card_number("4242-4242-4242-4242"));

        assert!(validator.is_valid_expiry("01/27"));
        assert!(!validator.is_valid_expiry("1/27"));
        assert!(!validator.is_valid_expiry("01/2027"));
        assert!(!validator.is_valid_expiry("0127"));

        assert!(is_valid_cvc("123"));
        assert!(is_valid_cvc("1234"));
        assert!(!is_valid_cvc("12"));
        assert!(!is_valid_cvc("12a"));
    }

    #[test]
    fn test_validate_personal_success() {
        assert!(validator().validate_personal(&valid_personal()).is_empty());
    }

    #[test]
    fn test_validate_personal_reports_every_field() {
        let errors = validator().validate_personal(&PersonalDetails::default());
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[&FormField::FirstName].to_string(), "First name is required");
        assert_eq!(errors[&FormField::LastName].to_string(), "Last name is required");
        assert_eq!(errors[&FormField::Email].to_string(), "Email is required");
        assert_eq!(errors[&FormField::Phone].to_string(), "Phone number is required");
    }

    #[test]
    fn test_validate_personal_format_errors() {
        let details = PersonalDetails {
            email: "not-an-email".to_string(),
            phone: "12".to_string(),
            ..valid_personal()
        };
        let errors = validator().validate_personal(&details);
        assert_eq!(errors.get(&FormField::Email), Some(&ValidationError::InvalidEmail));
        assert_eq!(errors.get(&FormField::Phone), Some(&ValidationError::InvalidPhone));
        assert!(!errors.contains_key(&FormField::FirstName));
    }

    #[test]
    fn test_phone_includes_country_code() {
        // Six local digits become valid once the "+1" prefix is counted
        let details = PersonalDetails {
            phone: "555123".to_string(),
            ..valid_personal()
        };
        assert!(validator().validate_personal(&details).is_empty());

        let details = PersonalDetails {
            country_code: "+358".to_string(),
            phone: "1234567890123".to_string(),
            ..valid_personal()
        };
        let errors = validator().validate_personal(&details);
        assert_eq!(errors.get(&FormField::Phone), Some(&ValidationError::InvalidPhone));
    }

    #[test]
    fn test_validate_payment() {
        let validator = validator();
        assert!(validator.validate_payment(&valid_payment()).is_empty());

        let errors = validator.validate_payment(&PaymentDetails::default());
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[&FormField::CardExpiry].to_string(), "Expiry date is required");

        let payment = PaymentDetails {
            card_number: "1234".to_string(),
            card_expiry: "1229".to_string(),
            card_cvc: "1".to_string(),
            ..PaymentDetails::default()
        };
        let errors = validator.validate_payment(&payment);
        assert_eq!(errors[&FormField::CardNumber], ValidationError::InvalidCardNumber);
        assert_eq!(errors[&FormField::CardExpiry].to_string(), "Please enter MM/YY format");
        assert_eq!(errors[&FormField::CardCvc], ValidationError::InvalidCvc);
    }
}
