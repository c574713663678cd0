//! # Credit Card Payments
//!
//! Credit payments need no secondary factor and go straight to
//! `Order::mark_paid`.

use pay_core::{mask_credential, Order, PaymentProcessor, PaymentReceipt, PaymentResult};
use tracing::{info, instrument};

/// Credit card processor
pub struct CreditProcessor {
    security_code: String,
}

impl CreditProcessor {
    pub fn new(security_code: impl Into<String>) -> Self {
        Self {
            security_code: security_code.into(),
        }
    }
}

impl PaymentProcessor for CreditProcessor {
    #[instrument(skip(self, order), fields(order_id = %order.id, method = "credit"))]
    fn pay(&self, order: &mut Order) -> PaymentResult<PaymentReceipt> {
        order.mark_paid()?;

        info!("Processing credit payment type");
        info!(
            security_code = %mask_credential(&self.security_code),
            "Verifying security code"
        );

        Ok(PaymentReceipt::issue(order, self.method_name()))
    }

    fn method_name(&self) -> &'static str {
        "credit"
    }
}
