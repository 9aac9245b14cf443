//! Order domain module.
//!
//! Value objects for the records the order-management system owns:
//! canonical order identifiers, order records and cancellation receipts.

mod order_id;
mod receipt;
mod record;

pub use order_id::{is_valid_order_id, OrderId, ORDER_ID_EXAMPLE};
pub use receipt::{CancellationReceipt, ReturnId};
pub use record::{LineItem, OrderRecord, OrderStatus};
