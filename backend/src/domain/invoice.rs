//! Invoice primitives shared by the form validator, the action services and
//! the persistence port.
//!
//! ## Invariants
//! - [`InvoiceAmount`] is always a strictly positive number of cents that
//!   fits the store's 32-bit integer column.
//! - [`CustomerId`] is never blank.
//! - Identifier and date are assigned on creation and never change.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Format used for invoice dates (`YYYY-MM-DD`).
pub const INVOICE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Identifier of a stored invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InvoiceId(Uuid);

/// Error returned when an invoice identifier cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invoice id must be a valid UUID: {value}")]
pub struct InvoiceIdParseError {
    value: String,
}

impl InvoiceId {
    /// Parse an identifier received from the caller.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, InvoiceIdParseError> {
        let raw = raw.as_ref();
        Uuid::parse_str(raw.trim())
            .map(Self)
            .map_err(|_| InvoiceIdParseError {
                value: raw.to_owned(),
            })
    }

    /// Wrap an identifier produced by the store.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<InvoiceId> for String {
    fn from(value: InvoiceId) -> Self {
        value.0.to_string()
    }
}

impl TryFrom<String> for InvoiceId {
    type Error = InvoiceIdParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Opaque reference to a customer record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomerId(String);

impl CustomerId {
    /// Wrap a customer reference, rejecting blank input.
    #[must_use]
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for CustomerId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reasons a currency amount cannot become an [`InvoiceAmount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvoiceAmountError {
    /// Zero, negative, not a number, or rounds down to zero cents.
    #[error("amount must be greater than zero")]
    NotPositive,
    /// More cents than the store can hold.
    #[error("amount exceeds the largest storable value")]
    TooLarge,
}

/// Monetary amount in integer cents.
///
/// # Examples
/// ```
/// use dashboard::domain::InvoiceAmount;
///
/// let amount = InvoiceAmount::from_currency_units(42.5).unwrap();
/// assert_eq!(amount.cents(), 4250);
/// assert!(InvoiceAmount::from_currency_units(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InvoiceAmount(i32);

impl InvoiceAmount {
    /// Convert decimal currency units to cents, rounding to the nearest cent.
    pub fn from_currency_units(units: f64) -> Result<Self, InvoiceAmountError> {
        if !units.is_finite() || units <= 0.0 {
            return Err(InvoiceAmountError::NotPositive);
        }
        let cents = (units * 100.0).round();
        if cents < 1.0 {
            return Err(InvoiceAmountError::NotPositive);
        }
        if cents > f64::from(i32::MAX) {
            return Err(InvoiceAmountError::TooLarge);
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "value is integral and bounds-checked against i32::MAX above"
        )]
        let cents = cents as i32;
        Ok(Self(cents))
    }

    /// Wrap a stored cent value, rejecting non-positive input.
    pub fn from_cents(cents: i32) -> Result<Self, InvoiceAmountError> {
        if cents > 0 {
            Ok(Self(cents))
        } else {
            Err(InvoiceAmountError::NotPositive)
        }
    }

    /// Amount in cents.
    #[must_use]
    pub const fn cents(self) -> i32 {
        self.0
    }
}

/// Payment status of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Awaiting payment.
    Pending,
    /// Settled.
    Paid,
}

impl InvoiceStatus {
    /// Value stored in the `status` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for anything other than `pending` or `paid`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown invoice status: {0}")]
pub struct UnknownInvoiceStatus(String);

impl FromStr for InvoiceStatus {
    type Err = UnknownInvoiceStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            other => Err(UnknownInvoiceStatus(other.to_owned())),
        }
    }
}

/// Mutable invoice fields: the only ones a form may set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceChanges {
    /// Customer billed by the invoice.
    pub customer_id: CustomerId,
    /// Amount due in cents.
    pub amount: InvoiceAmount,
    /// Payment status.
    pub status: InvoiceStatus,
}

/// Invoice about to be inserted; the store assigns its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInvoice {
    /// Customer billed by the invoice.
    pub customer_id: CustomerId,
    /// Amount due in cents.
    pub amount: InvoiceAmount,
    /// Payment status.
    pub status: InvoiceStatus,
    /// Creation date.
    pub date: NaiveDate,
}

impl NewInvoice {
    /// Stamp validated fields with the creation date.
    #[must_use]
    pub fn dated(changes: InvoiceChanges, date: NaiveDate) -> Self {
        let InvoiceChanges {
            customer_id,
            amount,
            status,
        } = changes;
        Self {
            customer_id,
            amount,
            status,
            date,
        }
    }

    /// Creation date formatted as `YYYY-MM-DD`.
    #[must_use]
    pub fn formatted_date(&self) -> String {
        self.date.format(INVOICE_DATE_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(42.5, 4250)]
    #[case(0.01, 1)]
    #[case(19.99, 1999)]
    #[case(0.005, 1)]
    #[case(100.0, 10_000)]
    fn converts_units_to_rounded_cents(#[case] units: f64, #[case] cents: i32) {
        let amount = InvoiceAmount::from_currency_units(units).expect("valid amount");
        assert_eq!(amount.cents(), cents);
    }

    #[rstest]
    #[case(0.0, InvoiceAmountError::NotPositive)]
    #[case(-5.0, InvoiceAmountError::NotPositive)]
    #[case(0.004, InvoiceAmountError::NotPositive)]
    #[case(f64::NAN, InvoiceAmountError::NotPositive)]
    #[case(f64::INFINITY, InvoiceAmountError::NotPositive)]
    #[case(21_474_836.48, InvoiceAmountError::TooLarge)]
    fn rejects_unstorable_amounts(#[case] units: f64, #[case] expected: InvoiceAmountError) {
        assert_eq!(
            InvoiceAmount::from_currency_units(units).expect_err("must fail"),
            expected
        );
    }

    #[rstest]
    fn largest_storable_amount_is_accepted() {
        let amount = InvoiceAmount::from_currency_units(21_474_836.47).expect("fits in i32");
        assert_eq!(amount.cents(), i32::MAX);
    }

    #[rstest]
    #[case("pending", Some(InvoiceStatus::Pending))]
    #[case("paid", Some(InvoiceStatus::Paid))]
    #[case("Paid", None)]
    #[case(" paid", None)]
    #[case("overdue", None)]
    #[case("", None)]
    fn parses_only_known_statuses(#[case] raw: &str, #[case] expected: Option<InvoiceStatus>) {
        assert_eq!(raw.parse::<InvoiceStatus>().ok(), expected);
    }

    #[rstest]
    #[case("", None)]
    #[case("   ", None)]
    #[case(" c1 ", Some("c1"))]
    fn customer_id_rejects_blank(#[case] raw: &str, #[case] expected: Option<&str>) {
        assert_eq!(CustomerId::new(raw).as_ref().map(AsRef::as_ref), expected);
    }

    #[rstest]
    fn invoice_id_round_trips_through_string() {
        let raw = "3958dc9e-712f-4377-85e9-fec4b6a6442a";
        let id = InvoiceId::new(raw).expect("valid id");
        assert_eq!(id.to_string(), raw);
        assert!(InvoiceId::new("42").is_err());
    }

    #[rstest]
    fn new_invoice_formats_iso_date() {
        let changes = InvoiceChanges {
            customer_id: CustomerId::new("c1").expect("customer"),
            amount: InvoiceAmount::from_cents(100).expect("amount"),
            status: InvoiceStatus::Paid,
        };
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).expect("valid date");
        let invoice = NewInvoice::dated(changes, date);
        assert_eq!(invoice.formatted_date(), "2024-03-07");
    }
}
