//! # pay-core
//!
//! Core types and traits for the lightning-checkout payment engine.
//!
//! This crate provides:
//! - `Order` and `LineItem` for accumulating a purchase
//! - `AuthorizationProvider` trait with `NullAuthorizer`, `SmsAuthorizer`
//!   and `CaptchaAuthorizer`
//! - `PaymentProcessor` trait and `ProcessorRegistry` for payment methods
//! - `PaymentError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use pay_core::{Order, SmsAuthorizer, AuthorizationProvider, PaymentProcessor};
//! use pay_methods::DebitProcessor;
//!
//! let mut order = Order::new();
//! order.add_line_item("Keyboard", 1, 50.0)?;
//!
//! let sms = SmsAuthorizer::shared();
//! let processor = DebitProcessor::new("1234", sms.clone());
//!
//! sms.verify("123456")?;
//! let receipt = processor.pay(&mut order)?;
//! ```

pub mod auth;
pub mod error;
pub mod order;
pub mod processor;

// Re-exports for convenience
pub use auth::{
    AuthorizationProvider, BoxedAuthorizer, CaptchaAuthorizer, NullAuthorizer, SmsAuthorizer,
};
pub use error::{PaymentError, PaymentResult};
pub use order::{LineItem, Order, OrderStatus};
pub use processor::{
    mask_credential, BoxedPaymentProcessor, PaymentOutcome, PaymentProcessor, PaymentReceipt,
    ProcessorRegistry,
};
