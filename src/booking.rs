//! Booking handoff

use async_trait::async_trait;
use mockall::automock;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::quote::Quote;

/// Errors crossing the delivery boundary.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The HTTP request to the email endpoint failed or was rejected.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// A required environment variable is not set.
    #[error("missing {0} in environment")]
    MissingEnv(&'static str),

    /// A backend-specific failure, e.g. from a submission log.
    #[error("delivery backend error: {0}")]
    Backend(String),
}

/// The payload handed to the external quote-email capability.
///
/// An owned snapshot of the quote plus the visitor's contact details; it holds
/// no references to live session state, so the visitor can keep editing the
/// builder while delivery is in flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    /// Visitor's name.
    pub recipient_name: String,

    /// Visitor's email address.
    pub recipient_email: String,

    /// Optional free-form notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// The quoted price, currency-formatted for display and the email body.
    pub final_price: String,

    /// Labels of the quoted services, in catalogue order.
    pub selected_service_labels: Vec<String>,
}

impl BookingRequest {
    /// Snapshot a quote together with the visitor's contact details.
    pub fn from_quote(
        quote: &Quote,
        recipient_name: impl Into<String>,
        recipient_email: impl Into<String>,
        notes: Option<String>,
    ) -> Self {
        BookingRequest {
            recipient_name: recipient_name.into(),
            recipient_email: recipient_email.into(),
            notes,
            final_price: quote.formatted_price(),
            selected_service_labels: quote.selected_labels().to_vec(),
        }
    }
}

/// External capability that emails a quote to the visitor.
#[automock]
#[async_trait]
pub trait QuoteDelivery: Send + Sync {
    /// Send the quote email.
    ///
    /// # Errors
    ///
    /// Returns a [`DeliveryError`] when the underlying transport fails.
    async fn send_quote(&self, request: &BookingRequest) -> Result<(), DeliveryError>;
}

/// Optional external capability that records a submission for later follow-up.
#[automock]
#[async_trait]
pub trait SubmissionLog: Send + Sync {
    /// Record the submission.
    ///
    /// # Errors
    ///
    /// Returns a [`DeliveryError`] when the backing store rejects the write.
    async fn record(&self, request: &BookingRequest) -> Result<(), DeliveryError>;
}

/// Submit a booking: log it best-effort, then send the quote email.
///
/// The submission log is fire-and-forget: a failed write is logged and
/// swallowed, never surfaced to the visitor. The email send is the one effect
/// whose outcome the caller needs, so its failure is returned for retry UI.
///
/// # Errors
///
/// Returns a [`DeliveryError`] only when the quote email could not be sent.
#[tracing::instrument(skip_all, fields(recipient = %request.recipient_email))]
pub async fn submit(
    delivery: &dyn QuoteDelivery,
    log: Option<&dyn SubmissionLog>,
    request: &BookingRequest,
) -> Result<(), DeliveryError> {
    if let Some(log) = log {
        if let Err(error) = log.record(request).await {
            warn!(%error, "submission log write failed; continuing");
        }
    }

    delivery.send_quote(request).await?;
    info!("quote email dispatched");

    Ok(())
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;

    use super::*;

    fn quote() -> Quote {
        Quote::new(
            900,
            720,
            true,
            "Standard rate for the selected services, with the new-client promotion applied"
                .into(),
            smallvec!["Video Production".into(), "Website Development".into()],
        )
    }

    #[test]
    fn from_quote_snapshots_price_and_labels() {
        let request = BookingRequest::from_quote(&quote(), "Ada", "ada@example.com", None);

        assert_eq!(request.final_price, "$720.00");
        assert_eq!(
            request.selected_service_labels,
            ["Video Production".to_owned(), "Website Development".to_owned()]
        );
        assert_eq!(request.notes, None);
    }

    #[test]
    fn payload_serializes_with_camel_case_keys() -> testresult::TestResult {
        let request = BookingRequest::from_quote(
            &quote(),
            "Ada",
            "ada@example.com",
            Some("launch next month".into()),
        );

        let json = serde_json::to_value(&request)?;

        assert_eq!(
            json,
            serde_json::json!({
                "recipientName": "Ada",
                "recipientEmail": "ada@example.com",
                "notes": "launch next month",
                "finalPrice": "$720.00",
                "selectedServiceLabels": ["Video Production", "Website Development"],
            })
        );
        Ok(())
    }

    #[test]
    fn absent_notes_are_omitted_from_the_payload() -> testresult::TestResult {
        let request = BookingRequest::from_quote(&quote(), "Ada", "ada@example.com", None);

        let json = serde_json::to_value(&request)?;

        assert!(json.get("notes").is_none());
        Ok(())
    }
}
