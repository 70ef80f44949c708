//! Invoice form validation.
//!
//! Turns a raw [`FormPayload`] into typed [`InvoiceChanges`] or a structured
//! [`FieldErrors`] report. Validation is a pure function of its input and
//! never fails in any other way: every problem is reported per field so the
//! caller can render it next to the offending input.
//!
//! Create and update share these rules. Identifier and date are never read
//! from the form.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{
    CustomerId, FormPayload, InvoiceAmount, InvoiceAmountError, InvoiceChanges, InvoiceStatus,
};

/// Message reported when no customer is selected.
pub const CUSTOMER_REQUIRED_MESSAGE: &str = "Please select a customer.";
/// Message reported when the amount is missing, non-numeric or not positive.
pub const AMOUNT_NOT_POSITIVE_MESSAGE: &str = "Please enter an amount greater than $0.";
/// Message reported when the amount does not fit the store.
pub const AMOUNT_TOO_LARGE_MESSAGE: &str = "Please enter a smaller amount.";
/// Message reported when the status is not one of the known values.
pub const STATUS_REQUIRED_MESSAGE: &str = "Please select an invoice status.";

/// Form fields understood by the invoice validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvoiceField {
    /// `customerId`.
    CustomerId,
    /// `amount`, in currency units.
    Amount,
    /// `status`.
    Status,
}

impl InvoiceField {
    /// Name of the field in submitted forms.
    #[must_use]
    pub const fn form_name(self) -> &'static str {
        match self {
            Self::CustomerId => "customerId",
            Self::Amount => "amount",
            Self::Status => "status",
        }
    }
}

/// Field name → human-readable messages for every field that failed.
///
/// Serialises as `{"customerId": [...], "amount": [...], "status": [...]}`
/// with passing fields omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    customer_id: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    amount: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<Vec<String>>,
}

impl FieldErrors {
    /// Record a message against `field`.
    pub fn push(&mut self, field: InvoiceField, message: impl Into<String>) {
        self.slot_mut(field)
            .get_or_insert_with(Vec::new)
            .push(message.into());
    }

    /// Messages recorded against `field`.
    #[must_use]
    pub fn get(&self, field: InvoiceField) -> Option<&[String]> {
        match field {
            InvoiceField::CustomerId => self.customer_id.as_deref(),
            InvoiceField::Amount => self.amount.as_deref(),
            InvoiceField::Status => self.status.as_deref(),
        }
    }

    /// Fields with at least one message, in form order.
    pub fn fields(&self) -> impl Iterator<Item = InvoiceField> + '_ {
        [
            InvoiceField::CustomerId,
            InvoiceField::Amount,
            InvoiceField::Status,
        ]
        .into_iter()
        .filter(|field| self.get(*field).is_some())
    }

    /// True when no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields().next().is_none()
    }

    fn slot_mut(&mut self, field: InvoiceField) -> &mut Option<Vec<String>> {
        match field {
            InvoiceField::CustomerId => &mut self.customer_id,
            InvoiceField::Amount => &mut self.amount,
            InvoiceField::Status => &mut self.status,
        }
    }
}

/// Validate the customer, amount and status fields of an invoice form.
///
/// # Examples
/// ```
/// use dashboard::domain::{FormPayload, InvoiceField, validate_invoice_form};
///
/// let form = FormPayload::from_iter([
///     ("customerId", "c1"),
///     ("amount", "42.50"),
///     ("status", "pending"),
/// ]);
/// let changes = validate_invoice_form(&form).unwrap();
/// assert_eq!(changes.amount.cents(), 4250);
///
/// let form = FormPayload::from_iter([("amount", "0"), ("status", "pending")]);
/// let errors = validate_invoice_form(&form).unwrap_err();
/// assert!(errors.get(InvoiceField::CustomerId).is_some());
/// assert!(errors.get(InvoiceField::Amount).is_some());
/// assert!(errors.get(InvoiceField::Status).is_none());
/// ```
pub fn validate_invoice_form(form: &FormPayload) -> Result<InvoiceChanges, FieldErrors> {
    let mut errors = FieldErrors::default();

    let customer_id = form
        .get(InvoiceField::CustomerId.form_name())
        .and_then(CustomerId::new);
    if customer_id.is_none() {
        errors.push(InvoiceField::CustomerId, CUSTOMER_REQUIRED_MESSAGE);
    }

    let amount = coerce_amount(form.get(InvoiceField::Amount.form_name()));
    match amount {
        Err(InvoiceAmountError::NotPositive) => {
            errors.push(InvoiceField::Amount, AMOUNT_NOT_POSITIVE_MESSAGE);
        }
        Err(InvoiceAmountError::TooLarge) => {
            errors.push(InvoiceField::Amount, AMOUNT_TOO_LARGE_MESSAGE);
        }
        Ok(_) => {}
    }

    let status = form
        .get(InvoiceField::Status.form_name())
        .and_then(|raw| raw.parse::<InvoiceStatus>().ok());
    if status.is_none() {
        errors.push(InvoiceField::Status, STATUS_REQUIRED_MESSAGE);
    }

    match (customer_id, amount, status) {
        (Some(customer_id), Ok(amount), Some(status)) => Ok(InvoiceChanges {
            customer_id,
            amount,
            status,
        }),
        _ => Err(errors),
    }
}

const RADIX_PREFIXES: [(&str, u32); 3] = [("0x", 16), ("0o", 8), ("0b", 2)];

/// Coerce raw amount text the way a browser reads a number: surrounding
/// whitespace is ignored, blank input reads as zero and unsigned `0x`, `0o`
/// and `0b` literals are integers in that radix.
fn coerce_amount(raw: Option<&str>) -> Result<InvoiceAmount, InvoiceAmountError> {
    let trimmed = raw.map_or("", str::trim);
    let units = if trimmed.is_empty() {
        0.0
    } else {
        parse_number(trimmed).ok_or(InvoiceAmountError::NotPositive)?
    };
    InvoiceAmount::from_currency_units(units)
}

fn parse_number(text: &str) -> Option<f64> {
    let radix_literal = RADIX_PREFIXES.iter().find_map(|(prefix, radix)| {
        text.get(..2)
            .filter(|head| head.eq_ignore_ascii_case(prefix))
            .and_then(|_| text.get(2..))
            .map(|digits| (digits, *radix))
    });
    match radix_literal {
        Some((digits, radix)) if !digits.is_empty() => digits.chars().try_fold(0.0, |acc, c| {
            c.to_digit(radix)
                .map(|digit| acc * f64::from(radix) + f64::from(digit))
        }),
        Some(_) => None,
        None => text.parse().ok(),
    }
}
