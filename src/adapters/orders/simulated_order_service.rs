//! Simulated order-management backend.
//!
//! Stands in for the real system of record:
//!
//! - every call waits `latency` on the injected clock
//! - then fails with `Transient` when a draw lands under `failure_rate`
//! - otherwise answers from an in-memory catalog
//!
//! # Example
//!
//! ```ignore
//! let service = SimulatedOrderService::new(clock, random)
//!     .with_catalog(demo_catalog())
//!     .with_failure_rate(0.0);
//!
//! let record = service.get_order_status(&order_id).await?;
//! ```

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::domain::order::{CancellationReceipt, OrderId, OrderRecord, ReturnId};
use crate::ports::{Clock, OrderService, OrderServiceError, RandomSource};

/// Instructions sent with every successful cancellation.
pub const CANCELLATION_INSTRUCTIONS: &str = "Your cancellation is confirmed. If the order has shipped, you can refuse delivery or use the prepaid return label that will be emailed to you within 2 hours.";

/// Return ids are `RET-` plus a number below this bound.
const RETURN_ID_BOUND: u32 = 100_000;

/// In-memory order service with simulated latency and failures.
#[derive(Clone)]
pub struct SimulatedOrderService {
    catalog: HashMap<OrderId, OrderRecord>,
    latency: Duration,
    failure_rate: f64,
    clock: Arc<dyn Clock>,
    random: Arc<dyn RandomSource>,
}

impl SimulatedOrderService {
    /// Empty catalog, 1 s latency, 5% failure rate.
    pub fn new(clock: Arc<dyn Clock>, random: Arc<dyn RandomSource>) -> Self {
        Self {
            catalog: HashMap::new(),
            latency: Duration::from_millis(1000),
            failure_rate: 0.05,
            clock,
            random,
        }
    }

    /// Replaces the catalog.
    pub fn with_catalog(mut self, catalog: HashMap<OrderId, OrderRecord>) -> Self {
        self.catalog = catalog;
        self
    }

    /// Adds or replaces one order.
    pub fn with_order(mut self, order_id: OrderId, record: OrderRecord) -> Self {
        self.catalog.insert(order_id, record);
        self
    }

    /// Sets the simulated processing delay.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Sets the share of calls that fail, clamped to `[0, 1]`.
    pub fn with_failure_rate(mut self, failure_rate: f64) -> Self {
        self.failure_rate = failure_rate.clamp(0.0, 1.0);
        self
    }

    pub fn failure_rate(&self) -> f64 {
        self.failure_rate
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Waits out the latency, then rolls for an injected failure.
    async fn simulate_call(&self, operation: &'static str) -> Result<(), OrderServiceError> {
        self.clock.sleep(self.latency).await;

        if self.random.next_unit() < self.failure_rate {
            warn!(operation, failure_rate = self.failure_rate, "Injected order service failure");
            return Err(OrderServiceError::transient(format!("{} failed", operation)));
        }
        Ok(())
    }
}

impl std::fmt::Debug for SimulatedOrderService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulatedOrderService")
            .field("orders", &self.catalog.len())
            .field("latency", &self.latency)
            .field("failure_rate", &self.failure_rate)
            .finish()
    }
}

#[async_trait]
impl OrderService for SimulatedOrderService {
    async fn get_order_status(&self, order_id: &OrderId) -> Result<OrderRecord, OrderServiceError> {
        debug!(%order_id, "Looking up order");
        self.simulate_call("order lookup").await?;

        self.catalog
            .get(order_id)
            .cloned()
            .ok_or_else(|| OrderServiceError::NotFound(order_id.clone()))
    }

    async fn cancel_order(
        &self,
        order_id: &OrderId,
        reason: &str,
    ) -> Result<CancellationReceipt, OrderServiceError> {
        debug!(%order_id, reason, "Cancelling order");
        self.simulate_call("cancellation").await?;

        let return_id = ReturnId::from_number(self.random.next_below(RETURN_ID_BOUND));
        debug!(%order_id, %return_id, "Cancellation accepted");

        Ok(CancellationReceipt {
            return_id,
            instructions: CANCELLATION_INSTRUCTIONS.to_string(),
        })
    }
}
