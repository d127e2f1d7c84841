//! Payment SDK status mapping
//!
//! The payment provider owns confirmation; this module only maps its
//! terminal statuses and confirmation errors to the single user-facing
//! message each one gets.

/// Terminal payment-intent status as reported by the SDK.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Succeeded,
    Processing,
    RequiresPaymentMethod,
    Unknown,
}

impl PaymentStatus {
    pub fn from_status(status: &str) -> Self {
        match status {
            "succeeded" => Self::Succeeded,
            "processing" => Self::Processing,
            "requires_payment_method" => Self::RequiresPaymentMethod,
            _ => Self::Unknown,
        }
    }

    /// The message shown to the customer for this status.
    pub fn user_message(self) -> &'static str {
        match self {
            Self::Succeeded => "Payment succeeded!",
            Self::Processing => "Your payment is processing.",
            Self::RequiresPaymentMethod => "Your payment was not successful, please try again.",
            Self::Unknown => "Something went wrong.",
        }
    }
}

/// Map a confirmation error to a user-facing message.
///
/// Card and validation errors carry a provider message worth surfacing;
/// everything else collapses to a generic failure. Not retried
/// automatically.
pub fn confirm_error_message(error_type: &str, provider_message: Option<&str>) -> String {
    match error_type {
        "card_error" | "validation_error" => provider_message
            .unwrap_or("An unexpected error occurred.")
            .to_string(),
        _ => "An unexpected error occurred.".to_string(),
    }
}
