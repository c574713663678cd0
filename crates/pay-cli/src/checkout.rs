//! # Checkout Flow
//!
//! Composition root: picks the authorizer, wires it into the chosen
//! processor, drives verification and calls `pay`.

use crate::config::{AuthKind, CheckoutConfig};
use pay_core::{
    AuthorizationProvider, BoxedAuthorizer, CaptchaAuthorizer, LineItem, NullAuthorizer, Order,
    PaymentOutcome, PaymentReceipt, PaymentResult, SmsAuthorizer,
};
use pay_methods::{build_processor, PaymentMethod};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Summary of one checkout attempt
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutReport {
    pub order_id: String,
    pub items: Vec<LineItem>,
    pub total: f64,
    pub method: PaymentMethod,
    pub authorizer: &'static str,
    pub outcome: PaymentOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<PaymentReceipt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckoutReport {
    pub fn is_paid(&self) -> bool {
        self.outcome == PaymentOutcome::Paid
    }
}

/// Build the authorizer selected by configuration
pub fn build_authorizer(config: &CheckoutConfig) -> BoxedAuthorizer {
    match config.auth {
        AuthKind::None => NullAuthorizer::shared(),
        AuthKind::Sms => SmsAuthorizer::shared(),
        AuthKind::Captcha => CaptchaAuthorizer::shared(config.captcha_answer.clone()),
    }
}

/// Run one checkout against `order`.
///
/// `NotAuthorized` and `AlreadyPaid` are reported as outcomes. Errors that
/// are not `pay` outcomes (a rejected verification code) are returned.
#[instrument(skip(config, order), fields(order_id = %order.id, method = %config.method))]
pub fn run_checkout(config: &CheckoutConfig, order: &mut Order) -> PaymentResult<CheckoutReport> {
    let authorizer = build_authorizer(config);
    let processor = build_processor(
        config.method,
        config.credential.clone(),
        Arc::clone(&authorizer),
    );

    info!("Total price: {:.2}", order.total_price());

    if let Some(code) = &config.verify_code {
        authorizer.verify(code)?;
    }

    let (outcome, receipt, error) = match processor.pay(order) {
        Ok(receipt) => {
            info!(receipt_id = %receipt.receipt_id, "Checkout complete");
            (PaymentOutcome::Paid, Some(receipt), None)
        }
        Err(e) => match e.outcome() {
            Some(outcome) => {
                warn!("Checkout not completed: {}", e);
                (outcome, None, Some(e.to_string()))
            }
            None => return Err(e),
        },
    };

    Ok(CheckoutReport {
        order_id: order.id.clone(),
        items: order.line_items().to_vec(),
        total: order.total_price(),
        method: config.method,
        authorizer: authorizer.provider_name(),
        outcome,
        receipt,
        error,
    })
}
