//! Order Assistant - scripted customer-service chat for orders
//!
//! A rule-based assistant that answers "where is my order?" and processes
//! cancellations. A small dialogue state machine tracks which piece of
//! information it is waiting for, asks an order-management service on the
//! user's behalf and paces its replies like a human agent typing.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
