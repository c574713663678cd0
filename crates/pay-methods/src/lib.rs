//! # pay-methods
//!
//! Built-in payment processors for lightning-checkout-rs.
//!
//! 1. **DebitProcessor** - card security code + injected authorizer
//! 2. **CreditProcessor** - card security code, no secondary factor
//! 3. **PaypalProcessor** - account e-mail + injected authorizer
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pay_core::{AuthorizationProvider, Order, PaymentProcessor, SmsAuthorizer};
//! use pay_methods::{build_processor, PaymentMethod};
//!
//! let sms = SmsAuthorizer::shared();
//! let processor = build_processor("paypal".parse::<PaymentMethod>()?, "test@test.com", sms.clone());
//!
//! sms.verify("6789")?;
//! let receipt = processor.pay(&mut order)?;
//! ```

pub mod credit;
pub mod debit;
pub mod method;
pub mod paypal;

// Re-exports
pub use credit::CreditProcessor;
pub use debit::DebitProcessor;
pub use method::{build_processor, build_processor_by_name, default_registry, PaymentMethod};
pub use paypal::PaypalProcessor;
