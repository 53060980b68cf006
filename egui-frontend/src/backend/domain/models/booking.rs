use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_COUNTRY_CODE: &str = "+1";

/// Editable fields of the booking form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Phone,
    CountryCode,
    Notes,
    CardNumber,
    CardExpiry,
    CardCvc,
}

impl FormField {
    /// Label used in "... is required" messages
    pub fn label(&self) -> &'static str {
        match self {
            FormField::FirstName => "First name",
            FormField::LastName => "Last name",
            FormField::Email => "Email",
            FormField::Phone => "Phone number",
            FormField::CountryCode => "Country code",
            FormField::Notes => "Notes",
            FormField::CardNumber => "Card number",
            FormField::CardExpiry => "Expiry date",
            FormField::CardCvc => "CVC",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    CreditCard,
}

/// Customer details collected on the first step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub country_code: String,
    pub notes: String,
}

impl Default for PersonalDetails {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            notes: String::new(),
        }
    }
}

impl PersonalDetails {
    /// Phone number as validated: country code followed by the local number
    pub fn full_phone(&self) -> String {
        format!("{}{}", self.country_code, self.phone)
    }
}

/// Card details collected on the payment step
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PaymentDetails {
    pub method: PaymentMethod,
    pub card_number: String,
    pub card_expiry: String,
    pub card_cvc: String,
}
