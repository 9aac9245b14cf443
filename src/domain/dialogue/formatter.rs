//! Response formatting.
//!
//! Owns every sentence the assistant says, so the state machine only
//! decides *which* message to send.

use super::intent::Intent;
use crate::domain::order::{CancellationReceipt, OrderId, OrderRecord, OrderStatus};

const GREETING: &str = "Hi! I'm here to help you with your order status or cancellation requests. How can I assist you today?";
const STATUS_ORDER_ID_PROMPT: &str = "I'd be happy to check your order status! Could you please provide your order number? It usually starts with 'ORD-' followed by numbers.";
const CANCEL_ORDER_ID_PROMPT: &str =
    "I'd be happy to help you cancel your order. Could you please provide your order number?";
const INVALID_ORDER_ID: &str = "That doesn't look like a valid order number. It should look like 'ORD-12345'. Could you double-check and enter it again?";
const ORDER_NOT_FOUND: &str = "I'm not able to find an order with that number. Could you double-check the order number? It should look like 'ORD-12345'. If you're still having trouble, I can connect you with a specialist.";
const LOOKUP_UNAVAILABLE: &str = "I'm experiencing a temporary system issue while looking up your order. Let me connect you with a human agent who can assist you right away, or you can try again in a few minutes.";
const ALREADY_DELIVERED: &str = "I see this order has already been delivered. For returns of delivered items, please visit our returns portal or contact our returns department directly.";
const REASON_PROMPT: &str =
    "To process your cancellation, could you let me know the reason? This helps us improve our service.";
const CANCELLATION_UNAVAILABLE: &str = "I'm having trouble processing your cancellation request right now. To ensure this gets handled quickly, let me transfer you to our cancellation specialist, or you can call our direct cancellation line at 1-800-555-1234.";
const ANYTHING_ELSE: &str = "Is there anything else I can help you with today?";
const OUT_OF_SCOPE: &str = "I specialize in helping with order status and cancellations. For questions about other topics, I'd recommend reaching out to our support team. However, I'm here if you need help checking on an order or processing a cancellation!";
const UNEXPECTED_FAILURE: &str = "Sorry, something went wrong. Please try again.";

/// Renders order data and dialogue conditions into user-facing text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseFormatter;

impl ResponseFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Summarizes an order: status lead, arrival, items, offer of help.
    pub fn format_status(&self, record: &OrderRecord, order_id: &OrderId) -> String {
        let lead = match &record.status {
            OrderStatus::Processing => "Your order is being prepared in our warehouse",
            OrderStatus::Shipped => "Great news! Your order is on its way",
            OrderStatus::Delivered => "Your order has been delivered",
            OrderStatus::Other(_) => "Your order status has been updated",
        };

        let arrival = if record.status.is_delivered() {
            record.eta.clone()
        } else {
            format!("should arrive by {}", record.eta)
        };

        let items = record
            .items
            .iter()
            .map(|item| format!("{} ({}x)", item.name, item.quantity))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "{}! Order {} {}. This includes: {}. {}",
            lead, order_id, arrival, items, ANYTHING_ELSE
        )
    }

    /// Confirms a processed cancellation.
    pub fn format_cancellation(&self, receipt: &CancellationReceipt) -> String {
        format!(
            "Thank you for sharing your reason for cancellation. Your feedback helps us improve our service.\n\n\
             Your cancellation has been processed successfully.\n\
             Return ID: {}.\n{}",
            receipt.return_id, receipt.instructions
        )
    }

    pub fn greeting(&self) -> &'static str {
        GREETING
    }

    /// Asks for the order number, worded for the intent being served.
    pub fn order_id_prompt(&self, intent: Intent) -> &'static str {
        match intent {
            Intent::Status => STATUS_ORDER_ID_PROMPT,
            Intent::Cancel => CANCEL_ORDER_ID_PROMPT,
        }
    }

    pub fn invalid_order_id(&self) -> &'static str {
        INVALID_ORDER_ID
    }

    pub fn order_not_found(&self) -> &'static str {
        ORDER_NOT_FOUND
    }

    pub fn lookup_unavailable(&self) -> &'static str {
        LOOKUP_UNAVAILABLE
    }

    pub fn already_delivered(&self) -> &'static str {
        ALREADY_DELIVERED
    }

    pub fn reason_prompt(&self) -> &'static str {
        REASON_PROMPT
    }

    pub fn cancellation_unavailable(&self) -> &'static str {
        CANCELLATION_UNAVAILABLE
    }

    pub fn anything_else(&self) -> &'static str {
        ANYTHING_ELSE
    }

    pub fn out_of_scope(&self) -> &'static str {
        OUT_OF_SCOPE
    }

    pub fn unexpected_failure(&self) -> &'static str {
        UNEXPECTED_FAILURE
    }
}
