//! Order Service Port - Interface to the order-management system.
//!
//! The assistant never owns order data; it asks this collaborator.
//! Conceptually these are two REST calls:
//!
//! - `GET order(id)` → [`OrderRecord`], or 404 / 500
//! - `POST cancel(id, reason)` → [`CancellationReceipt`], or 500

use async_trait::async_trait;

use crate::domain::dialogue::ServiceFailure;
use crate::domain::foundation::ErrorCode;
use crate::domain::order::{CancellationReceipt, OrderId, OrderRecord};

/// Port for order lookups and cancellations.
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Fetches the current record of an order.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the id is unknown
    /// - `Transient` on backend instability
    async fn get_order_status(&self, order_id: &OrderId) -> Result<OrderRecord, OrderServiceError>;

    /// Cancels an order, returning the return id and instructions.
    ///
    /// # Errors
    ///
    /// - `Transient` on backend instability
    async fn cancel_order(
        &self,
        order_id: &OrderId,
        reason: &str,
    ) -> Result<CancellationReceipt, OrderServiceError>;
}

/// Errors reported by the order-management system.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderServiceError {
    /// The order id is unknown to the system of record.
    #[error("order not found: {0}")]
    NotFound(OrderId),

    /// The backend failed in a way that may succeed later.
    #[error("order service unavailable: {message}")]
    Transient {
        /// Error details.
        message: String,
    },

    /// Anything else the backend reported.
    #[error("unexpected order service error: {0}")]
    Unexpected(String),
}

impl OrderServiceError {
    /// Creates a transient error.
    pub fn transient(message: impl Into<String>) -> Self {
        Self::Transient {
            message: message.into(),
        }
    }

    /// HTTP-like status code for the failure.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Transient { .. } | Self::Unexpected(_) => 500,
        }
    }

    /// Error code reported alongside the failure.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::NotFound(_) => ErrorCode::OrderNotFound,
            Self::Transient { .. } => ErrorCode::ServiceUnavailable,
            Self::Unexpected(_) => ErrorCode::InternalError,
        }
    }

    /// Returns true if retrying later could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transient { .. })
    }
}

impl From<&OrderServiceError> for ServiceFailure {
    fn from(err: &OrderServiceError) -> Self {
        match err {
            OrderServiceError::NotFound(_) => ServiceFailure::NotFound,
            OrderServiceError::Transient { .. } => ServiceFailure::Transient,
            OrderServiceError::Unexpected(_) => ServiceFailure::Unexpected,
        }
    }
}
