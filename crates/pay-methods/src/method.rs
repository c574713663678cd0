//! # Payment Method Dispatch
//!
//! Maps a method name chosen by the caller onto a concrete processor.
//! Unknown names fail here, at construction time, never later in `pay`.

use crate::{CreditProcessor, DebitProcessor, PaypalProcessor};
use pay_core::{
    AuthorizationProvider, BoxedAuthorizer, BoxedPaymentProcessor, PaymentError, ProcessorRegistry,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

/// Built-in payment methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Debit,
    Credit,
    Paypal,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Debit,
        PaymentMethod::Credit,
        PaymentMethod::Paypal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Debit => "debit",
            PaymentMethod::Credit => "credit",
            PaymentMethod::Paypal => "paypal",
        }
    }

    /// Whether the processor consults an injected authorizer
    pub fn requires_authorization(&self) -> bool {
        !matches!(self, PaymentMethod::Credit)
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debit" => Ok(PaymentMethod::Debit),
            "credit" => Ok(PaymentMethod::Credit),
            "paypal" => Ok(PaymentMethod::Paypal),
            other => Err(PaymentError::UnsupportedPaymentType {
                method: other.to_string(),
            }),
        }
    }
}

/// Build a processor for `method` with its credential.
///
/// `authorizer` is injected into methods that need a secondary factor;
/// credit ignores it.
pub fn build_processor(
    method: PaymentMethod,
    credential: impl Into<String>,
    authorizer: BoxedAuthorizer,
) -> BoxedPaymentProcessor {
    let credential = credential.into();
    match method {
        PaymentMethod::Debit => Arc::new(DebitProcessor::new(credential, authorizer)),
        PaymentMethod::Paypal => Arc::new(PaypalProcessor::new(credential, authorizer)),
        PaymentMethod::Credit => {
            debug!(
                authorizer = authorizer.provider_name(),
                "Credit needs no secondary factor, authorizer not used"
            );
            Arc::new(CreditProcessor::new(credential))
        }
    }
}

/// Parse a method name and build its processor in one step
pub fn build_processor_by_name(
    method: &str,
    credential: impl Into<String>,
    authorizer: BoxedAuthorizer,
) -> Result<BoxedPaymentProcessor, PaymentError> {
    let method = method.parse::<PaymentMethod>()?;
    Ok(build_processor(method, credential, authorizer))
}

/// Registry with one processor per built-in method, all sharing `authorizer`
pub fn default_registry(
    security_code: impl Into<String>,
    email_address: impl Into<String>,
    authorizer: BoxedAuthorizer,
) -> ProcessorRegistry {
    let security_code = security_code.into();
    ProcessorRegistry::new(PaymentMethod::Debit.as_str())
        .with_processor(build_processor(
            PaymentMethod::Debit,
            security_code.clone(),
            authorizer.clone(),
        ))
        .with_processor(build_processor(
            PaymentMethod::Credit,
            security_code,
            authorizer.clone(),
        ))
        .with_processor(build_processor(PaymentMethod::Paypal, email_address, authorizer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pay_core::{NullAuthorizer, Order, PaymentProcessor, SmsAuthorizer};
    use rstest::rstest;

    #[rstest]
    #[case("debit", PaymentMethod::Debit)]
    #[case("Credit", PaymentMethod::Credit)]
    #[case(" PAYPAL ", PaymentMethod::Paypal)]
    fn test_parse_method(#[case] input: &str, #[case] expected: PaymentMethod) {
        assert_eq!(input.parse::<PaymentMethod>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_method() {
        let err = "bitcoin".parse::<PaymentMethod>().unwrap_err();

        assert_eq!(
            err,
            PaymentError::UnsupportedPaymentType {
                method: "bitcoin".into()
            }
        );
    }

    #[test]
    fn test_build_by_name_fails_before_pay() {
        let result = build_processor_by_name("cash", "1234", NullAuthorizer::shared());

        assert!(matches!(
            result,
            Err(PaymentError::UnsupportedPaymentType { .. })
        ));
    }

    #[rstest]
    #[case(PaymentMethod::Debit, true)]
    #[case(PaymentMethod::Credit, false)]
    #[case(PaymentMethod::Paypal, true)]
    fn test_requires_authorization(#[case] method: PaymentMethod, #[case] expected: bool) {
        assert_eq!(method.requires_authorization(), expected);
    }

    #[test]
    fn test_build_processor_names() {
        for method in PaymentMethod::ALL {
            let processor = build_processor(method, "1234", NullAuthorizer::shared());
            assert_eq!(processor.method_name(), method.as_str());
        }
    }

    #[test]
    fn test_default_registry() {
        let registry = default_registry("1234", "test@test.com", SmsAuthorizer::shared());

        assert_eq!(registry.methods(), vec!["credit", "debit", "paypal"]);

        let mut order = Order::new();
        let credit = registry.get("credit").unwrap();
        assert!(credit.pay(&mut order).is_ok());

        let mut order = Order::new();
        let debit = registry.default_processor().unwrap();
        assert!(debit.pay(&mut order).is_err());
    }
}
