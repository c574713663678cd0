//! # Payment Error Types
//!
//! Typed error handling for the checkout engine.
//! All order, authorization and payment operations return `Result<T, PaymentError>`.

use crate::processor::PaymentOutcome;
use thiserror::Error;

/// Core error type for all checkout operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// Line item rejected (quantity <= 0, negative or non-finite price)
    #[error("Invalid line item '{name}': {reason}")]
    InvalidLineItem { name: String, reason: String },

    /// The injected authorizer has not authenticated the transaction
    #[error("Payment not authorized for {method}")]
    NotAuthorized { method: String },

    /// The order has already been paid
    #[error("Order {order_id} is already paid")]
    AlreadyPaid { order_id: String },

    /// The authorization provider has no verification step
    #[error("Authorization provider '{provider}' does not support verification")]
    UnsupportedAuthorization { provider: String },

    /// Requested payment method does not exist
    #[error("Unsupported payment type: {method}")]
    UnsupportedPaymentType { method: String },

    /// Verification code was empty or did not match
    #[error("Invalid verification code for '{provider}'")]
    InvalidVerificationCode { provider: String },

    /// Configuration errors (bad env values, unreadable order file)
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl PaymentError {
    /// Returns true if the caller can fix the problem and try again
    /// (collect a new code, then call `verify`/`pay` once more)
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PaymentError::NotAuthorized { .. } | PaymentError::InvalidVerificationCode { .. }
        )
    }

    /// Maps the error onto a `pay` outcome, if it is one
    pub fn outcome(&self) -> Option<PaymentOutcome> {
        match self {
            PaymentError::NotAuthorized { .. } => Some(PaymentOutcome::NotAuthorized),
            PaymentError::AlreadyPaid { .. } => Some(PaymentOutcome::AlreadyPaid),
            _ => None,
        }
    }
}

/// Result type alias for checkout operations
pub type PaymentResult<T> = Result<T, PaymentError>;
