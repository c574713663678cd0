//! # Lightning-Checkout RS
//!
//! Runs a single checkout from environment configuration.
//!
//! ## Usage
//!
//! ```bash
//! export CHECKOUT_METHOD=debit
//! export CHECKOUT_CREDENTIAL=1234
//! export CHECKOUT_VERIFY_CODE=123456
//!
//! lightning-checkout
//! ```

use pay_cli::{checkout::run_checkout, config::load_order, CheckoutConfig};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    print_banner();

    let config = CheckoutConfig::from_env()?;
    let mut order = load_order(config.order_file.as_deref())?;

    info!("Payment method: {}", config.method);
    info!("Authorizer: {:?}", config.auth);

    let report = run_checkout(&config, &mut order)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    if !report.is_paid() {
        anyhow::bail!(
            "Checkout not completed: {}",
            report.error.unwrap_or_default()
        );
    }

    Ok(())
}

fn print_banner() {
    eprintln!(
        r#"
  ⚡ Lightning-Checkout RS ⚡
  ━━━━━━━━━━━━━━━━━━━━━━━━━━
  Version: {}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
