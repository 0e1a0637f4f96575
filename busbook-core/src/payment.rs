//! Payment method selection and form validation.
//!
//! Nothing here talks to a payment provider; a "successful" payment is a form
//! that passes [`validate`].
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::constants::CASH_ON_DELIVERY_LABEL;

/// The options offered by the payment method selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethodKind {
    Card,
    Upi,
    CashOnDelivery,
}

impl PaymentMethodKind {
    pub const ALL: [Self; 3] = [Self::Card, Self::Upi, Self::CashOnDelivery];

    /// Value submitted by the `<select>` element.
    #[must_use]
    pub const fn form_value(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Upi => "upi",
            Self::CashOnDelivery => "cod",
        }
    }

    /// Parse a submitted selector value. Both `cod` and `cashOnDelivery` name
    /// cash on delivery.
    #[must_use]
    pub fn from_form_value(value: &str) -> Option<Self> {
        match value {
            "card" => Some(Self::Card),
            "upi" => Some(Self::Upi),
            "cod" | "cashOnDelivery" => Some(Self::CashOnDelivery),
            _ => None,
        }
    }

    /// Fields that must be non-empty for this method, in check order.
    #[must_use]
    pub const fn required_fields(self) -> &'static [PaymentField] {
        match self {
            Self::Card => &[
                PaymentField::CardName,
                PaymentField::CardNumber,
                PaymentField::ExpiryDate,
                PaymentField::Cvv,
            ],
            Self::Upi => &[PaymentField::UpiId],
            Self::CashOnDelivery => &[],
        }
    }

    #[must_use]
    pub const fn shows_card_details(self) -> bool {
        matches!(self, Self::Card)
    }

    #[must_use]
    pub const fn shows_upi_details(self) -> bool {
        matches!(self, Self::Upi)
    }
}

/// Named inputs on the payment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentField {
    CardName,
    CardNumber,
    ExpiryDate,
    Cvv,
    UpiId,
}

impl PaymentField {
    /// The input's `name` attribute.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CardName => "cardName",
            Self::CardNumber => "cardNumber",
            Self::ExpiryDate => "expiryDate",
            Self::Cvv => "cvv",
            Self::UpiId => "upiId",
        }
    }
}

impl fmt::Display for PaymentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw values as submitted; an empty string means the field was left blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentForm {
    pub payment_method: String,
    pub card_name: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub upi_id: String,
}

impl PaymentForm {
    #[must_use]
    pub fn with_method(method: PaymentMethodKind) -> Self {
        Self {
            payment_method: method.form_value().to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn field(&self, field: PaymentField) -> &str {
        match field {
            PaymentField::CardName => &self.card_name,
            PaymentField::CardNumber => &self.card_number,
            PaymentField::ExpiryDate => &self.expiry_date,
            PaymentField::Cvv => &self.cvv,
            PaymentField::UpiId => &self.upi_id,
        }
    }

    pub fn set_field(&mut self, field: PaymentField, value: impl Into<String>) {
        let slot = match field {
            PaymentField::CardName => &mut self.card_name,
            PaymentField::CardNumber => &mut self.card_number,
            PaymentField::ExpiryDate => &mut self.expiry_date,
            PaymentField::Cvv => &mut self.cvv,
            PaymentField::UpiId => &mut self.upi_id,
        };
        *slot = value.into();
    }

    #[must_use]
    pub fn method(&self) -> Option<PaymentMethodKind> {
        PaymentMethodKind::from_form_value(&self.payment_method)
    }
}

/// A validated payment choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Card {
        name: String,
        number: String,
        expiry: String,
        cvv: String,
    },
    Upi {
        id: String,
    },
    CashOnDelivery,
}

impl PaymentMethod {
    #[must_use]
    pub const fn kind(&self) -> PaymentMethodKind {
        match self {
            Self::Card { .. } => PaymentMethodKind::Card,
            Self::Upi { .. } => PaymentMethodKind::Upi,
            Self::CashOnDelivery => PaymentMethodKind::CashOnDelivery,
        }
    }

    /// Name shown on the confirmation: the cardholder, the UPI id, or the
    /// cash-on-delivery label.
    #[must_use]
    pub fn passenger_name(&self) -> &str {
        match self {
            Self::Card { name, .. } => name,
            Self::Upi { id } => id,
            Self::CashOnDelivery => CASH_ON_DELIVERY_LABEL,
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PaymentError {
    #[error("Please select a payment method.")]
    MissingMethod,
    #[error("Please fill in the {0} field.")]
    MissingField(PaymentField),
}

impl PaymentError {
    /// Alert text in the wording the payment page uses.
    #[must_use]
    pub const fn alert_message(self) -> &'static str {
        match self {
            Self::MissingMethod => "Please select a payment method.",
            Self::MissingField(PaymentField::UpiId) => "Please enter your UPI ID.",
            Self::MissingField(_) => "Please fill in all card payment details.",
        }
    }
}

/// Check a submitted payment form.
///
/// An unrecognised method value is treated the same as no selection.
///
/// # Errors
///
/// Returns [`PaymentError::MissingMethod`] when no usable method is selected
/// and [`PaymentError::MissingField`] for the first blank required field.
pub fn validate(form: &PaymentForm) -> Result<PaymentMethod, PaymentError> {
    let kind = form.method().ok_or(PaymentError::MissingMethod)?;
    if let Some(missing) = kind
        .required_fields()
        .iter()
        .find(|field| form.field(**field).is_empty())
    {
        return Err(PaymentError::MissingField(*missing));
    }
    Ok(match kind {
        PaymentMethodKind::Card => PaymentMethod::Card {
            name: form.card_name.clone(),
            number: form.card_number.clone(),
            expiry: form.expiry_date.clone(),
            cvv: form.cvv.clone(),
        },
        PaymentMethodKind::Upi => PaymentMethod::Upi {
            id: form.upi_id.clone(),
        },
        PaymentMethodKind::CashOnDelivery => PaymentMethod::CashOnDelivery,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card_form() -> PaymentForm {
        PaymentForm {
            card_name: "Asha Roy".into(),
            card_number: "4111111111111111".into(),
            expiry_date: "12/27".into(),
            cvv: "123".into(),
            ..PaymentForm::with_method(PaymentMethodKind::Card)
        }
    }

    #[test]
    fn complete_card_form_is_accepted() {
        let method = validate(&card_form()).unwrap();
        assert_eq!(method.kind(), PaymentMethodKind::Card);
        assert_eq!(method.passenger_name(), "Asha Roy");
    }

    #[test]
    fn card_form_reports_first_missing_field() {
        let mut form = card_form();
        form.cvv.clear();
        assert_eq!(
            validate(&form),
            Err(PaymentError::MissingField(PaymentField::Cvv))
        );

        form.card_number.clear();
        assert_eq!(
            validate(&form),
            Err(PaymentError::MissingField(PaymentField::CardNumber))
        );
    }

    #[test]
    fn upi_requires_an_id() {
        let mut form = PaymentForm::with_method(PaymentMethodKind::Upi);
        assert_eq!(
            validate(&form),
            Err(PaymentError::MissingField(PaymentField::UpiId))
        );
        form.upi_id = "x@bank".into();
        assert_eq!(validate(&form).unwrap().passenger_name(), "x@bank");
    }

    #[test]
    fn upi_ignores_card_fields() {
        let mut form = card_form();
        form.payment_method = "upi".into();
        form.upi_id = "x@bank".into();
        assert_eq!(
            validate(&form),
            Ok(PaymentMethod::Upi {
                id: "x@bank".into()
            })
        );
    }

    #[test]
    fn cash_on_delivery_always_passes() {
        for value in ["cod", "cashOnDelivery"] {
            let form = PaymentForm {
                payment_method: value.into(),
                ..PaymentForm::default()
            };
            let method = validate(&form).unwrap();
            assert_eq!(method.passenger_name(), "Cash on Delivery");
        }
    }

    #[test]
    fn missing_or_unknown_method_is_rejected() {
        assert_eq!(
            validate(&PaymentForm::default()),
            Err(PaymentError::MissingMethod)
        );
        let form = PaymentForm {
            payment_method: "barter".into(),
            ..card_form()
        };
        assert_eq!(validate(&form), Err(PaymentError::MissingMethod));
    }

    #[test]
    fn alert_messages_match_the_form_section() {
        assert_eq!(
            PaymentError::MissingField(PaymentField::ExpiryDate).alert_message(),
            "Please fill in all card payment details."
        );
        assert_eq!(
            PaymentError::MissingField(PaymentField::UpiId).alert_message(),
            "Please enter your UPI ID."
        );
        assert_eq!(
            PaymentError::MissingField(PaymentField::Cvv).to_string(),
            "Please fill in the cvv field."
        );
    }

    #[test]
    fn selector_values_roundtrip() {
        for kind in PaymentMethodKind::ALL {
            assert_eq!(PaymentMethodKind::from_form_value(kind.form_value()), Some(kind));
        }
        assert!(PaymentMethodKind::Card.shows_card_details());
        assert!(!PaymentMethodKind::Card.shows_upi_details());
        assert!(PaymentMethodKind::CashOnDelivery.required_fields().is_empty());
    }
}
