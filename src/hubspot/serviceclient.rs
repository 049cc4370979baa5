use std::collections::HashMap;

use reqwest::Client;
use serde_json::{Value, json};

use crate::LogLevel;
use crate::hubspot::outcome::{FetchOutcome, ScoreUpdate, UpdateOutcome};
use crate::hubspot::parse::parse_contact_from_response;

/// Production endpoint for the HubSpot Web API.
pub const HUBSPOT_BASE_URL: &str = "https://api.hubapi.com";

/// Internal name of the custom lead score property.
pub const LEAD_SCORE_PROPERTY: &str = "custom_lead_score_marshall";

/// HTTP client for the HubSpot contacts Web API.
///
/// Holds an already-resolved private app access token; see
/// `auth::credentials::resolve_access_token` for environment fallback.
/// Configuration is immutable after construction.
pub struct ServiceClient {
    client: Client,
    base_url: std::string::String,
    token: std::string::String,
    log_level: LogLevel,
}

impl ServiceClient {
    /// Create a new client against the production endpoint.
    pub fn new(token: &str, log_level: LogLevel) -> Self {
        Self::with_base_url(HUBSPOT_BASE_URL, token, log_level)
    }

    /// Create a new client for the given base URL and access token.
    pub fn with_base_url(base_url: &str, token: &str, log_level: LogLevel) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            log_level,
        }
    }

    /// Set the custom lead score property on a single contact.
    ///
    /// Issues one PATCH against the contact resource and converts its
    /// terminal state into an `UpdateOutcome`. Never returns `Err`: rejected
    /// and failed requests become `Failure` outcomes.
    pub async fn update_lead_score(&self, contact_id: &str, score: f64) -> UpdateOutcome {
        let url = format!("{}/crm/v3/objects/contacts/{}", self.base_url, contact_id);

        // The API stores the score as a string property.
        let body = json!({
            "properties": {
                LEAD_SCORE_PROPERTY: score.to_string()
            }
        });

        if matches!(self.log_level, LogLevel::Debug) {
            println!("Url: {:?}", url);
            println!("Body: {}", body);
        }

        let resp = match self
            .client
            .patch(&url)
            .bearer_auth(&self.token)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                return UpdateOutcome::transport_failure(format!("Request failed: {e}"));
            }
        };

        let status = resp.status();

        if status.as_u16() != 200 {
            let body = resp.text().await.unwrap_or_default();
            return UpdateOutcome::rejected(status.as_u16(), body);
        }

        let json: Value = match resp.json().await {
            Ok(json) => json,
            Err(e) => {
                return UpdateOutcome::Failure {
                    message: format!("Failed to parse JSON: {e}"),
                    status_code: Some(200),
                    error: None,
                    timestamp: chrono::Utc::now(),
                };
            }
        };

        UpdateOutcome::accepted(contact_id, parse_contact_from_response(&json))
    }

    /// Retrieve a contact record.
    ///
    /// A non-empty `properties` slice is passed comma-joined as the
    /// `properties` query parameter; an empty slice requests the server
    /// default property set.
    pub async fn get_contact(&self, contact_id: &str, properties: &[&str]) -> FetchOutcome {
        let mut url = format!("{}/crm/v3/objects/contacts/{}", self.base_url, contact_id);
        if !properties.is_empty() {
            url.push_str("?properties=");
            url.push_str(&urlencoding::encode(&properties.join(",")));
        }

        if matches!(self.log_level, LogLevel::Debug) {
            println!("Url: {:?}", url);
        }

        let resp = match self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                return FetchOutcome::Failure {
                    error: format!("Request failed: {e}"),
                    status_code: None,
                };
            }
        };

        let status = resp.status();

        if status.as_u16() != 200 {
            let body = resp.text().await.unwrap_or_default();
            return FetchOutcome::Failure {
                error: body,
                status_code: Some(status.as_u16()),
            };
        }

        match resp.json().await {
            Ok(data) => FetchOutcome::Success { data },
            Err(e) => FetchOutcome::Failure {
                error: format!("Failed to parse JSON: {e}"),
                status_code: Some(200),
            },
        }
    }

    /// Set lead scores for multiple contacts, one request per entry.
    ///
    /// Entries run strictly sequentially in the map's iteration order and
    /// every entry is attempted: a rejected or failed update is recorded in
    /// its own `ScoreUpdate` and does not stop the remaining entries. The
    /// returned vector always has one entry per input pair.
    pub async fn update_lead_scores(&self, scores: &HashMap<std::string::String, f64>) -> Vec<ScoreUpdate> {
        let mut results = Vec::with_capacity(scores.len());

        for (contact_id, score) in scores {
            let outcome = self.update_lead_score(contact_id, *score).await;

            if matches!(self.log_level, LogLevel::Debug) && !outcome.is_success() {
                println!("Update failed for contact {}: {}", contact_id, outcome.message());
            }

            results.push(ScoreUpdate {
                contact_id: contact_id.clone(),
                score: *score,
                outcome,
            });
        }

        results
    }
}
