//! # Checkout Configuration
//!
//! Configuration for the checkout driver.
//! Values come from environment variables (a `.env` file is honoured).

use pay_core::{Order, PaymentError, PaymentResult};
use pay_methods::PaymentMethod;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Which authorization provider to wire into the processor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthKind {
    None,
    Sms,
    Captcha,
}

impl FromStr for AuthKind {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(AuthKind::None),
            "sms" => Ok(AuthKind::Sms),
            "captcha" => Ok(AuthKind::Captcha),
            other => Err(PaymentError::Configuration(format!(
                "CHECKOUT_AUTH must be one of none, sms, captcha (got '{}')",
                other
            ))),
        }
    }
}

/// Checkout driver configuration
#[derive(Debug, Clone)]
pub struct CheckoutConfig {
    /// Payment method to use
    pub method: PaymentMethod,
    /// Security code or e-mail address, depending on the method
    pub credential: String,
    /// Authorization provider to inject
    pub auth: AuthKind,
    /// Code handed to the authorizer's `verify` before paying
    pub verify_code: Option<String>,
    /// Expected answer for the captcha authorizer
    pub captcha_answer: String,
    /// Explicit order file
    pub order_file: Option<PathBuf>,
}

impl CheckoutConfig {
    /// Load configuration from environment variables.
    ///
    /// Env vars (all optional):
    /// - `CHECKOUT_METHOD` (debit | credit | paypal, default debit)
    /// - `CHECKOUT_CREDENTIAL` (default 1234)
    /// - `CHECKOUT_AUTH` (none | sms | captcha)
    /// - `CHECKOUT_VERIFY_CODE`
    /// - `CHECKOUT_CAPTCHA_ANSWER` (default not-a-robot)
    /// - `CHECKOUT_ORDER_FILE`
    pub fn from_env() -> PaymentResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> PaymentResult<Self> {
        let method = lookup("CHECKOUT_METHOD")
            .unwrap_or_else(|| "debit".to_string())
            .parse::<PaymentMethod>()?;

        let auth = match lookup("CHECKOUT_AUTH") {
            Some(value) => value.parse()?,
            None if method.requires_authorization() => AuthKind::Sms,
            None => AuthKind::None,
        };

        Ok(Self {
            method,
            credential: lookup("CHECKOUT_CREDENTIAL").unwrap_or_else(|| "1234".to_string()),
            auth,
            verify_code: lookup("CHECKOUT_VERIFY_CODE").filter(|c| !c.is_empty()),
            captcha_answer: lookup("CHECKOUT_CAPTCHA_ANSWER")
                .unwrap_or_else(|| "not-a-robot".to_string()),
            order_file: lookup("CHECKOUT_ORDER_FILE").map(PathBuf::from),
        })
    }
}

/// Order file layout
#[derive(Debug, Deserialize)]
struct OrderFile {
    #[serde(default)]
    items: Vec<OrderFileItem>,
}

#[derive(Debug, Deserialize)]
struct OrderFileItem {
    name: String,
    quantity: i64,
    unit_price: f64,
}

/// Parse an order from TOML. Every item goes through `add_line_item`.
pub fn order_from_toml(toml_str: &str) -> PaymentResult<Order> {
    let file: OrderFile = toml::from_str(toml_str)
        .map_err(|e| PaymentError::Configuration(format!("Invalid order file: {}", e)))?;

    let mut order = Order::new();
    for item in file.items {
        order.add_line_item(item.name, item.quantity, item.unit_price)?;
    }
    Ok(order)
}

/// Load the order to check out.
///
/// An explicit path must exist. Otherwise `config/order.toml` is tried and
/// the built-in demo order is the fallback.
pub fn load_order(explicit: Option<&Path>) -> anyhow::Result<Order> {
    if let Some(path) = explicit {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let order = order_from_toml(&content)?;
        tracing::info!("Loaded {} items from {}", order.line_items().len(), path.display());
        return Ok(order);
    }

    let config_paths = ["config/order.toml", "../config/order.toml", "../../config/order.toml"];

    for path in config_paths {
        if let Ok(content) = std::fs::read_to_string(path) {
            let order = order_from_toml(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path, e))?;
            tracing::info!("Loaded {} items from {}", order.line_items().len(), path);
            return Ok(order);
        }
    }

    tracing::warn!("No order file found, using demo order");
    Ok(demo_order()?)
}

/// Keyboard, mouse and two monitors (total 525)
pub fn demo_order() -> PaymentResult<Order> {
    let mut order = Order::new();
    order.add_line_item("Keyboard", 1, 50.0)?;
    order.add_line_item("Mouse", 1, 25.0)?;
    order.add_line_item("Monitor", 2, 200.0)?;
    Ok(order)
}
