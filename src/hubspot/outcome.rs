use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::hubspot::contact::{Contact, Property, Value};

/// Outcome of a single lead score update.
///
/// Both request-level failure modes (a completed request the API rejected,
/// and a request that never completed) land in `Failure` so callers branch
/// on the variant alone. Failures never propagate as `Err` from the client.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum UpdateOutcome {
    /// The API accepted the update with HTTP 200.
    Success {
        message: String,
        /// Record identifier echoed from the response body, when present.
        contact_id: Option<String>,
        /// Property map returned by the API after the update.
        updated_properties: HashMap<Property, Value>,
        timestamp: DateTime<Utc>,
    },
    /// The request was rejected or never completed.
    Failure {
        message: String,
        /// HTTP status of a completed-but-rejected request; `None` when the
        /// request never reached the server.
        status_code: Option<u16>,
        /// Raw response body of a rejected request.
        error: Option<String>,
        timestamp: DateTime<Utc>,
    },
}

impl UpdateOutcome {
    /// Build the success outcome for an accepted update.
    pub(crate) fn accepted(requested_id: &str, contact: Contact) -> Self {
        UpdateOutcome::Success {
            message: format!("Successfully updated contact {requested_id}"),
            contact_id: contact.id,
            updated_properties: contact.properties,
            timestamp: Utc::now(),
        }
    }

    /// Build the failure outcome for a completed request the API rejected.
    ///
    /// The status stays out of the message text; callers needing it read the
    /// dedicated field.
    pub(crate) fn rejected(status_code: u16, body: String) -> Self {
        UpdateOutcome::Failure {
            message: "Failed to update contact".to_string(),
            status_code: Some(status_code),
            error: Some(body),
            timestamp: Utc::now(),
        }
    }

    /// Build the failure outcome for a request that never completed.
    pub(crate) fn transport_failure(message: String) -> Self {
        UpdateOutcome::Failure {
            message,
            status_code: None,
            error: None,
            timestamp: Utc::now(),
        }
    }

    /// Whether the update was accepted by the API.
    pub fn is_success(&self) -> bool {
        matches!(self, UpdateOutcome::Success { .. })
    }

    /// Human-readable summary of the outcome.
    pub fn message(&self) -> &str {
        match self {
            UpdateOutcome::Success { message, .. } => message,
            UpdateOutcome::Failure { message, .. } => message,
        }
    }
}

/// Outcome of a contact fetch.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum FetchOutcome {
    /// The API returned the record with HTTP 200.
    Success {
        /// Full parsed response body.
        data: serde_json::Value,
    },
    /// The request was rejected or never completed.
    Failure {
        /// Raw response body of a rejected request, or the stringified
        /// transport error.
        error: String,
        status_code: Option<u16>,
    },
}

impl FetchOutcome {
    /// Whether the fetch returned a record.
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success { .. })
    }
}

/// One entry of a batch lead score update: the submitted pair plus its
/// individual outcome.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreUpdate {
    pub contact_id: String,
    pub score: f64,
    pub outcome: UpdateOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_outcome_names_the_contact() {
        let mut contact = Contact::new();
        contact.id = Some("3051".to_string());
        contact.properties.insert(
            "custom_lead_score_marshall".to_string(),
            Value::String("42.5".to_string()),
        );

        let outcome = UpdateOutcome::accepted("3051", contact);
        assert!(outcome.is_success());
        assert!(outcome.message().contains("3051"));
    }

    #[test]
    fn rejected_outcome_keeps_status_out_of_the_message() {
        let outcome = UpdateOutcome::rejected(409, "conflict".to_string());
        assert!(!outcome.is_success());
        assert!(!outcome.message().contains("409"));
        match outcome {
            UpdateOutcome::Failure {
                status_code, error, ..
            } => {
                assert_eq!(status_code, Some(409));
                assert_eq!(error.as_deref(), Some("conflict"));
            }
            UpdateOutcome::Success { .. } => unreachable!(),
        }
    }

    #[test]
    fn transport_failure_has_no_status() {
        let outcome =
            UpdateOutcome::transport_failure("Request failed: connection refused".to_string());
        match &outcome {
            UpdateOutcome::Failure {
                status_code, error, ..
            } => {
                assert!(status_code.is_none());
                assert!(error.is_none());
            }
            UpdateOutcome::Success { .. } => unreachable!(),
        }
        assert!(outcome.message().contains("connection refused"));
    }

    #[test]
    fn outcomes_serialize_with_a_tag() {
        let outcome = UpdateOutcome::rejected(404, "not found".to_string());
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["outcome"], "failure");
        assert_eq!(json["status_code"], 404);
    }
}
