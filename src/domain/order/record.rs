//! Order records as returned by the order-management system.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fulfilment status of an order.
///
/// Unknown values from the backend are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Processing,
    Shipped,
    Delivered,
    Other(String),
}

impl OrderStatus {
    /// Returns the wire name of the status.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Other(raw) => raw,
        }
    }

    /// Returns true once the parcel has reached the customer.
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered)
    }
}

impl From<String> for OrderStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "processing" => Self::Processing,
            "shipped" => Self::Shipped,
            "delivered" => Self::Delivered,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for OrderStatus {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl LineItem {
    pub fn new(name: impl Into<String>, quantity: u32, unit_price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price,
        }
    }
}

/// Snapshot of an order owned by the order-management system.
///
/// `eta` is free text: an arrival window for open orders, the delivery
/// sentence for delivered ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub status: OrderStatus,
    pub eta: String,
    pub items: Vec<LineItem>,
}

impl OrderRecord {
    pub fn new(status: impl Into<OrderStatus>, eta: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            eta: eta.into(),
            items: Vec::new(),
        }
    }

    /// Adds a line item.
    pub fn with_item(mut self, item: LineItem) -> Self {
        self.items.push(item);
        self
    }
}
