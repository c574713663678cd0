//! # pay-cli
//!
//! Checkout driver for lightning-checkout-rs.
//!
//! Wires a payment processor to an authorization provider from environment
//! configuration, runs one checkout and reports the outcome as JSON.

pub mod checkout;
pub mod config;

pub use checkout::{build_authorizer, run_checkout, CheckoutReport};
pub use config::{load_order, AuthKind, CheckoutConfig};
