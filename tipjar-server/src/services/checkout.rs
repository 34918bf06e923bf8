//! Checkout orchestration
//!
//! Turns a (token, amount) pair into a redirectable payment session:
//! resolve the token, build the line-item description from the bound
//! staff/point context, convert the amount to minor units, and delegate
//! session creation to the configured [`PaymentProcessor`].

use std::sync::Arc;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::Config;
use crate::db::repository::QrRepository;
use crate::services::payment::{CheckoutSession, PaymentProcessor, SessionRequest};
use crate::utils::{AppError, AppResult};

/// Fallback display name when the bound staff record is missing
const UNKNOWN_STAFF: &str = "staff";

#[derive(Clone)]
pub struct CheckoutService {
    qr: QrRepository,
    processor: Arc<dyn PaymentProcessor>,
    base_url: String,
    currency: String,
    note_max_chars: usize,
}

impl CheckoutService {
    pub fn new(qr: QrRepository, processor: Arc<dyn PaymentProcessor>, config: &Config) -> Self {
        Self {
            qr,
            processor,
            base_url: config.public_base_url.trim_end_matches('/').to_string(),
            currency: config.currency.clone(),
            note_max_chars: config.note_max_chars,
        }
    }

    /// Create a payment session for a tip
    pub async fn create_session(
        &self,
        token: Option<String>,
        amount: Option<f64>,
        note: Option<String>,
    ) -> AppResult<CheckoutSession> {
        let token = token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::Validation("token and amount are required".to_string()))?
            .to_string();
        let amount = amount
            .ok_or_else(|| AppError::Validation("token and amount are required".to_string()))?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(AppError::Validation(
                "amount must be a positive number".to_string(),
            ));
        }

        let resolved = self.qr.resolve(&token)?;

        // Best-effort: a dangling staff reference still gets a session
        let staff_name = resolved
            .staff
            .as_ref()
            .map(|s| s.name.as_str())
            .unwrap_or(UNKNOWN_STAFF);
        let description = format!(
            "Tip for {} ({} {})",
            staff_name, resolved.point_type, resolved.point_label
        );

        let amount_minor = amount_to_minor_units(amount)
            .ok_or_else(|| AppError::Validation("amount out of range".to_string()))?;

        let request = SessionRequest {
            description,
            note: note.map(|n| truncate_chars(&n, self.note_max_chars)),
            amount_minor,
            currency: self.currency.clone(),
            success_url: format!("{}/success?token={}&amount={}", self.base_url, token, amount),
            cancel_url: format!("{}/cancel?token={}", self.base_url, token),
        };

        let session = self.processor.create_session(request).await?;
        Ok(session)
    }
}

/// Convert a major-unit amount to the processor's minor unit
///
/// Multiplies by 100 and rounds half away from zero, in decimal space:
/// `12.345` becomes `1235`, which naive f64 arithmetic gets wrong
/// (`12.345 * 100.0 == 1234.4999…`).
pub(crate) fn amount_to_minor_units(amount: f64) -> Option<i64> {
    Decimal::from_f64(amount)?
        .checked_mul(Decimal::ONE_HUNDRED)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
}

/// Character-boundary-safe truncation
fn truncate_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
