//! # PayPal Payments
//!
//! Same control flow as debit, but the credential is the account's e-mail
//! address instead of a card security code.

use pay_core::{
    mask_credential, AuthorizationProvider, BoxedAuthorizer, Order, PaymentError,
    PaymentProcessor, PaymentReceipt, PaymentResult,
};
use tracing::{info, instrument, warn};

/// PayPal processor
pub struct PaypalProcessor {
    email_address: String,
    authorizer: BoxedAuthorizer,
}

impl PaypalProcessor {
    /// Create a PayPal processor for an account e-mail and an injected
    /// authorizer
    pub fn new(email_address: impl Into<String>, authorizer: BoxedAuthorizer) -> Self {
        Self {
            email_address: email_address.into(),
            authorizer,
        }
    }

    pub fn email_address(&self) -> &str {
        &self.email_address
    }
}

impl PaymentProcessor for PaypalProcessor {
    #[instrument(skip(self, order), fields(order_id = %order.id, method = "paypal"))]
    fn pay(&self, order: &mut Order) -> PaymentResult<PaymentReceipt> {
        if !self.authorizer.is_authenticated() {
            warn!(
                authorizer = self.authorizer.provider_name(),
                "PayPal payment refused: not authorized"
            );
            return Err(PaymentError::NotAuthorized {
                method: self.method_name().to_string(),
            });
        }

        order.mark_paid()?;

        info!("Processing PayPal payment type");
        info!(
            email = %mask_credential(&self.email_address),
            "Verifying email address"
        );

        Ok(PaymentReceipt::issue(order, self.method_name()))
    }

    fn method_name(&self) -> &'static str {
        "paypal"
    }
}
