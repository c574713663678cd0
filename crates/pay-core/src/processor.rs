//! # Payment Processor Trait
//!
//! Core trait for payment methods (debit card, credit card, PayPal, ...).
//!
//! Every processor exposes the same `pay(order)` contract with the same three
//! outcomes, so callers holding a `BoxedPaymentProcessor` never need a
//! method-specific call to finish a checkout. Secondary authorization is not
//! part of this trait: processors that need it receive an
//! `AuthorizationProvider` at construction time.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  PaymentProcessor (trait)                   │
//! │  ├── pay(order) -> Paid | NotAuthorized | AlreadyPaid       │
//! │  └── method_name()                                          │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!          ┌─────────────────┼─────────────────┐
//!          │                 │                 │
//!  ┌───────┴───────┐ ┌───────┴───────┐ ┌───────┴───────┐
//!  │DebitProcessor │ │CreditProcessor│ │PaypalProcessor│
//!  │  + authorizer │ │ (no 2nd factor│ │  + authorizer │
//!  └───────────────┘ └───────────────┘ └───────────────┘
//! ```

use crate::error::{PaymentError, PaymentResult};
use crate::order::Order;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Core trait for payment method implementations.
pub trait PaymentProcessor: Send + Sync {
    /// Attempt to pay the order.
    ///
    /// # Returns
    /// - `Ok(PaymentReceipt)` when the order moved to `Paid`
    /// - `Err(PaymentError::NotAuthorized)` when the injected authorizer has
    ///   not authenticated; the order is untouched
    /// - `Err(PaymentError::AlreadyPaid)` when the order was already paid
    fn pay(&self, order: &mut Order) -> PaymentResult<PaymentReceipt>;

    /// Payment method name (for logging, receipts and registry lookup).
    fn method_name(&self) -> &'static str;
}

/// Type alias for a boxed payment processor (dynamic dispatch)
pub type BoxedPaymentProcessor = Arc<dyn PaymentProcessor>;

/// The three observable results of `pay`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentOutcome {
    Paid,
    NotAuthorized,
    AlreadyPaid,
}

impl PaymentOutcome {
    /// Classify a `pay` result. `None` means the error is not a `pay` outcome.
    pub fn of(result: &PaymentResult<PaymentReceipt>) -> Option<Self> {
        match result {
            Ok(_) => Some(PaymentOutcome::Paid),
            Err(e) => e.outcome(),
        }
    }
}

/// Proof of a successful payment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentReceipt {
    /// Unique receipt ID (generated)
    pub receipt_id: String,

    /// Paid order
    pub order_id: String,

    /// Payment method name (e.g., "debit")
    pub method: String,

    /// Amount charged: the order total at the time of payment
    pub amount: f64,

    /// Payment timestamp
    pub paid_at: DateTime<Utc>,
}

impl PaymentReceipt {
    /// Issue a receipt for an order that was just marked paid
    pub fn issue(order: &Order, method: impl Into<String>) -> Self {
        Self {
            receipt_id: Uuid::new_v4().to_string(),
            order_id: order.id.clone(),
            method: method.into(),
            amount: order.total_price(),
            paid_at: Utc::now(),
        }
    }
}

/// Mask a credential for logging, keeping only the last two characters
pub fn mask_credential(credential: &str) -> String {
    let chars: Vec<char> = credential.chars().collect();
    if chars.len() <= 2 {
        return "*".repeat(chars.len());
    }
    let visible: String = chars[chars.len() - 2..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 2), visible)
}

/// Registry of payment processors keyed by method name
#[derive(Clone)]
pub struct ProcessorRegistry {
    processors: HashMap<String, BoxedPaymentProcessor>,
    default_method: String,
}

impl ProcessorRegistry {
    /// Create a new registry with a default method
    pub fn new(default_method: impl Into<String>) -> Self {
        Self {
            processors: HashMap::new(),
            default_method: default_method.into(),
        }
    }

    /// Register a payment processor
    pub fn register(&mut self, processor: BoxedPaymentProcessor) {
        let name = processor.method_name().to_string();
        self.processors.insert(name, processor);
    }

    /// Register with builder pattern
    pub fn with_processor(mut self, processor: BoxedPaymentProcessor) -> Self {
        self.register(processor);
        self
    }

    /// Get a processor by method name
    pub fn get(&self, method: &str) -> PaymentResult<&BoxedPaymentProcessor> {
        self.processors
            .get(method)
            .ok_or_else(|| PaymentError::UnsupportedPaymentType {
                method: method.to_string(),
            })
    }

    /// Get the default processor
    pub fn default_processor(&self) -> PaymentResult<&BoxedPaymentProcessor> {
        self.get(&self.default_method)
    }

    /// List all registered method names
    pub fn methods(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.processors.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Check if a method is registered
    pub fn has_method(&self, method: &str) -> bool {
        self.processors.contains_key(method)
    }
}

impl Default for ProcessorRegistry {
    fn default() -> Self {
        Self::new("credit")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct VoucherProcessor;

    impl PaymentProcessor for VoucherProcessor {
        fn pay(&self, order: &mut Order) -> PaymentResult<PaymentReceipt> {
            order.mark_paid()?;
            Ok(PaymentReceipt::issue(order, self.method_name()))
        }

        fn method_name(&self) -> &'static str {
            "voucher"
        }
    }

    #[test]
    fn test_registry_lookup() {
        let registry =
            ProcessorRegistry::new("voucher").with_processor(Arc::new(VoucherProcessor));

        assert!(registry.has_method("voucher"));
        assert_eq!(registry.methods(), vec!["voucher"]);
        assert!(registry.default_processor().is_ok());
    }

    #[test]
    fn test_registry_unknown_method() {
        let registry = ProcessorRegistry::default();

        let err = registry.get("bitcoin").err().unwrap();
        assert_eq!(
            err,
            PaymentError::UnsupportedPaymentType {
                method: "bitcoin".into()
            }
        );
        assert!(registry.default_processor().is_err());
    }

    #[test]
    fn test_receipt_and_outcomes() {
        let mut order = Order::new();
        order.add_line_item("Keyboard", 2, 50.0).unwrap();

        let first = VoucherProcessor.pay(&mut order);
        assert_eq!(PaymentOutcome::of(&first), Some(PaymentOutcome::Paid));

        let receipt = first.unwrap();
        assert_eq!(receipt.order_id, order.id);
        assert_eq!(receipt.method, "voucher");
        assert_eq!(receipt.amount, 100.0);

        let second = VoucherProcessor.pay(&mut order);
        assert_eq!(PaymentOutcome::of(&second), Some(PaymentOutcome::AlreadyPaid));
    }

    #[rstest]
    #[case("1234", "**34")]
    #[case("test@test.com", "***********om")]
    #[case("12", "**")]
    #[case("", "")]
    fn test_mask_credential(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(mask_credential(input), expected);
    }
}
