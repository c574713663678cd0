//! # Debit Card Payments
//!
//! Debit payments require a secondary factor (SMS code in practice) supplied
//! through an injected `AuthorizationProvider`.

use pay_core::{
    mask_credential, AuthorizationProvider, BoxedAuthorizer, Order, PaymentError,
    PaymentProcessor, PaymentReceipt, PaymentResult,
};
use tracing::{info, instrument, warn};

/// Debit card processor
pub struct DebitProcessor {
    security_code: String,
    authorizer: BoxedAuthorizer,
}

impl DebitProcessor {
    /// Create a debit processor with the card's security code and an
    /// injected authorizer
    pub fn new(security_code: impl Into<String>, authorizer: BoxedAuthorizer) -> Self {
        Self {
            security_code: security_code.into(),
            authorizer,
        }
    }
}

impl PaymentProcessor for DebitProcessor {
    #[instrument(skip(self, order), fields(order_id = %order.id, method = "debit"))]
    fn pay(&self, order: &mut Order) -> PaymentResult<PaymentReceipt> {
        if !self.authorizer.is_authenticated() {
            warn!(
                authorizer = self.authorizer.provider_name(),
                "Debit payment refused: not authorized"
            );
            return Err(PaymentError::NotAuthorized {
                method: self.method_name().to_string(),
            });
        }

        order.mark_paid()?;

        info!("Processing debit payment type");
        info!(
            security_code = %mask_credential(&self.security_code),
            "Verifying security code"
        );

        Ok(PaymentReceipt::issue(order, self.method_name()))
    }

    fn method_name(&self) -> &'static str {
        "debit"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pay_core::{AuthorizationProvider, OrderStatus, SmsAuthorizer};

    fn order() -> Order {
        let mut order = Order::new();
        order.add_line_item("Keyboard", 1, 50.0).unwrap();
        order.add_line_item("Mouse", 1, 25.0).unwrap();
        order.add_line_item("Monitor", 2, 200.0).unwrap();
        order
    }

    #[test]
    fn test_debit_after_verify() {
        let sms = SmsAuthorizer::shared();
        let processor = DebitProcessor::new("1234", sms.clone());
        let mut order = order();

        sms.verify("123456").unwrap();
        let receipt = processor.pay(&mut order).unwrap();

        assert_eq!(order.status(), OrderStatus::Paid);
        assert_eq!(receipt.amount, 525.0);
        assert_eq!(receipt.method, "debit");
    }

    #[test]
    fn test_debit_without_verify() {
        let processor = DebitProcessor::new("1234", SmsAuthorizer::shared());
        let mut order = order();

        let err = processor.pay(&mut order).unwrap_err();

        assert_eq!(
            err,
            PaymentError::NotAuthorized {
                method: "debit".into()
            }
        );
        assert_eq!(order.status(), OrderStatus::Open);
    }

    #[test]
    fn test_debit_retry_after_verify() {
        let sms = SmsAuthorizer::shared();
        let processor = DebitProcessor::new("1234", sms.clone());
        let mut order = order();

        let err = processor.pay(&mut order).unwrap_err();
        assert!(err.is_retryable());

        sms.verify("000111").unwrap();
        assert!(processor.pay(&mut order).is_ok());
    }

    #[test]
    fn test_debit_already_paid() {
        let sms = SmsAuthorizer::shared();
        sms.verify("123456").unwrap();
        let processor = DebitProcessor::new("1234", sms);
        let mut order = order();

        processor.pay(&mut order).unwrap();
        let err = processor.pay(&mut order).unwrap_err();

        assert!(matches!(err, PaymentError::AlreadyPaid { .. }));
        assert!(order.is_paid());
    }
}
