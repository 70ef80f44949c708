//! Raw form submissions as received from the caller.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Field name → raw string value of a submitted form.
///
/// Values are kept exactly as submitted; trimming and coercion are the
/// validator's job.
///
/// # Examples
/// ```
/// use dashboard::domain::FormPayload;
///
/// let form = FormPayload::from_iter([("customerId", "c1"), ("amount", "42.50")]);
/// assert_eq!(form.get("amount"), Some("42.50"));
/// assert_eq!(form.get("status"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormPayload(BTreeMap<String, String>);

impl FormPayload {
    /// Create an empty payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value submitted for `field`, if present.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Set or replace a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    /// Names of the submitted fields, in lexical order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for FormPayload
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}
