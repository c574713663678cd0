//! # Authorization Providers
//!
//! Secondary-factor authorization, composed into payment processors by
//! injection. A processor only ever asks `is_authenticated()`; how a
//! provider becomes authenticated is its own business.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              AuthorizationProvider (trait)                  │
//! │  ├── is_authenticated()                                     │
//! │  ├── verify(code)   (default: UnsupportedAuthorization)     │
//! │  └── provider_name()                                        │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!          ┌─────────────────┼─────────────────┐
//!          │                 │                 │
//!  ┌───────┴───────┐ ┌───────┴───────┐ ┌───────┴───────┐
//!  │NullAuthorizer │ │ SmsAuthorizer │ │   Captcha     │
//!  │ (always true) │ │ (one-way latch│ │  Authorizer   │
//!  └───────────────┘ └───────────────┘ └───────────────┘
//! ```
//!
//! The SMS provider is intentionally weak: no expiry, no replay protection
//! and no binding to a particular order. It is not a production-grade
//! second factor.

use crate::error::{PaymentError, PaymentResult};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Capability answering "is this transaction authorized?"
pub trait AuthorizationProvider: Send + Sync {
    /// Whether the secondary factor has been satisfied.
    fn is_authenticated(&self) -> bool;

    /// Run the provider's verification step.
    ///
    /// Providers without such a step keep this default, which fails with
    /// `UnsupportedAuthorization`.
    fn verify(&self, code: &str) -> PaymentResult<()> {
        let _ = code;
        Err(PaymentError::UnsupportedAuthorization {
            provider: self.provider_name().to_string(),
        })
    }

    /// Get the provider name (for logging and errors).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared authorization provider (dynamic dispatch)
pub type BoxedAuthorizer = Arc<dyn AuthorizationProvider>;

/// Authorizer for methods that need no secondary factor
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAuthorizer;

impl NullAuthorizer {
    pub fn new() -> Self {
        Self
    }

    /// Shared instance, ready to inject
    pub fn shared() -> BoxedAuthorizer {
        Arc::new(Self)
    }
}

impl AuthorizationProvider for NullAuthorizer {
    fn is_authenticated(&self) -> bool {
        true
    }

    fn verify(&self, _code: &str) -> PaymentResult<()> {
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "none"
    }
}

/// SMS code authorizer.
///
/// Starts unverified; any non-empty code latches it to verified. Once
/// verified it stays verified for the life of the instance and further
/// `verify` calls succeed whatever the code.
#[derive(Debug, Default)]
pub struct SmsAuthorizer {
    verified: AtomicBool,
}

impl SmsAuthorizer {
    pub fn new() -> Self {
        Self {
            verified: AtomicBool::new(false),
        }
    }

    /// Shared instance, ready to inject. Keep a clone to call `verify` later.
    pub fn shared() -> BoxedAuthorizer {
        Arc::new(Self::new())
    }
}

impl AuthorizationProvider for SmsAuthorizer {
    fn is_authenticated(&self) -> bool {
        self.verified.load(Ordering::SeqCst)
    }

    fn verify(&self, code: &str) -> PaymentResult<()> {
        if self.is_authenticated() {
            debug!("SMS authorizer already verified");
            return Ok(());
        }

        if code.is_empty() {
            warn!("Rejected empty SMS code");
            return Err(PaymentError::InvalidVerificationCode {
                provider: self.provider_name().to_string(),
            });
        }

        self.verified.store(true, Ordering::SeqCst);
        info!("SMS code verified");
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "sms"
    }
}

/// "Not a robot" challenge authorizer.
///
/// Verified when the submitted answer matches the expected one
/// (trimmed, case-insensitive). Same one-way latch as `SmsAuthorizer`.
#[derive(Debug)]
pub struct CaptchaAuthorizer {
    expected: String,
    verified: AtomicBool,
}

impl CaptchaAuthorizer {
    pub fn new(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into().trim().to_lowercase(),
            verified: AtomicBool::new(false),
        }
    }

    pub fn shared(expected: impl Into<String>) -> BoxedAuthorizer {
        Arc::new(Self::new(expected))
    }
}

impl AuthorizationProvider for CaptchaAuthorizer {
    fn is_authenticated(&self) -> bool {
        self.verified.load(Ordering::SeqCst)
    }

    fn verify(&self, code: &str) -> PaymentResult<()> {
        if self.is_authenticated() {
            return Ok(());
        }

        let answer = code.trim().to_lowercase();
        if answer.is_empty() || answer != self.expected {
            warn!("Captcha answer rejected");
            return Err(PaymentError::InvalidVerificationCode {
                provider: self.provider_name().to_string(),
            });
        }

        self.verified.store(true, Ordering::SeqCst);
        info!("Captcha solved");
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "captcha"
    }
}
