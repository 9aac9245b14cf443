//! Canonical order identifier.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Example shown to users whenever an id is rejected.
pub const ORDER_ID_EXAMPLE: &str = "ORD-12345";

static CANONICAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ORD-[0-9]{5}$").expect("canonical order id pattern"));

/// Returns true exactly for strings of the form `ORD-` followed by 5 ASCII digits.
pub fn is_valid_order_id(candidate: &str) -> bool {
    CANONICAL.is_match(candidate)
}

/// An order identifier in canonical `ORD-ddddd` form.
///
/// # Invariants
///
/// - Always matches `^ORD-[0-9]{5}$`; there is no way to build one that doesn't.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderId(String);

impl OrderId {
    /// Validates a candidate and wraps it.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the candidate is blank
    /// - `InvalidFormat` if it is not canonical
    pub fn parse(candidate: impl Into<String>) -> Result<Self, ValidationError> {
        let candidate = candidate.into();
        if candidate.trim().is_empty() {
            return Err(ValidationError::empty_field("order_id"));
        }
        if !is_valid_order_id(&candidate) {
            return Err(ValidationError::invalid_format(
                "order_id",
                format!("expected the form {}, got '{}'", ORDER_ID_EXAMPLE, candidate),
            ));
        }
        Ok(Self(candidate))
    }

    /// Returns the canonical string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for OrderId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for OrderId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<OrderId> for String {
    fn from(id: OrderId) -> Self {
        id.0
    }
}
