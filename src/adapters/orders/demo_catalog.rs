//! Sample orders for demos and tests.

use std::collections::HashMap;

use crate::domain::order::{LineItem, OrderId, OrderRecord};

/// One shipped, one processing and one delivered order.
pub fn demo_catalog() -> HashMap<OrderId, OrderRecord> {
    [
        (
            "ORD-12345",
            OrderRecord::new("shipped", "2025-06-21 by 6:00 PM")
                .with_item(LineItem::new("Wireless Headphones", 1, 99.99)),
        ),
        (
            "ORD-67890",
            OrderRecord::new("processing", "2025-06-22 by 5:00 PM")
                .with_item(LineItem::new("Gaming Mouse", 1, 59.99)),
        ),
        (
            "ORD-11111",
            OrderRecord::new("delivered", "Delivered on 2025-06-18")
                .with_item(LineItem::new("Bluetooth Speaker", 1, 79.99)),
        ),
    ]
    .into_iter()
    .filter_map(|(raw, record)| OrderId::parse(raw).ok().map(|id| (id, record)))
    .collect()
}
