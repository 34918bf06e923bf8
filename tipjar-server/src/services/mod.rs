//! Service layer
//!
//! - [`payment`] - payment-processor capability (Stripe REST / simulated)
//! - [`checkout`] - payment-session orchestration

pub mod checkout;
pub mod payment;

pub use checkout::CheckoutService;
pub use payment::{CheckoutSession, PaymentProcessor, ProcessorError};
