use std::collections::HashMap;

use serde_json::Value;

use crate::hubspot::contact::Value::{Boolean, Float, Int, Null, String};
use crate::hubspot::contact::{Contact, Property, Value as PropertyValue};

/// Parse a contact from a v3 object response body.
///
/// The API contract is lenient here: a 200 body missing `id` yields a contact
/// without an identifier, and a missing or malformed `properties` object
/// yields an empty property map.
pub(crate) fn parse_contact_from_response(json: &Value) -> Contact {
    let mut contact = Contact::new();

    contact.id = json
        .get("id")
        .and_then(|value| value.as_str())
        .map(|id| id.to_string());

    if let Some(record) = json.get("properties").and_then(|value| value.as_object()) {
        for (key, value) in record {
            add_property(&mut contact.properties, key, value);
        }
    }

    contact
}

/// Convert a JSON value into a contact property value.
///
/// Arrays and objects never appear as property values in v3 responses and
/// are skipped rather than guessed at.
fn add_property(properties: &mut HashMap<Property, PropertyValue>, key: &str, value: &Value) {
    if value.is_null() {
        properties.insert(key.to_string(), Null);
        return;
    }

    if let Some(i) = value.as_i64() {
        properties.insert(key.to_string(), Int(i));
        return;
    }

    if let Some(u) = value.as_u64() {
        if let Ok(as_i64) = i64::try_from(u) {
            properties.insert(key.to_string(), Int(as_i64));
        } else {
            properties.insert(key.to_string(), Float(u as f64));
        }
        return;
    }

    if let Some(f) = value.as_f64() {
        properties.insert(key.to_string(), Float(f));
        return;
    }

    if let Some(s) = value.as_str() {
        properties.insert(key.to_string(), String(s.to_string()));
        return;
    }

    if let Some(b) = value.as_bool() {
        properties.insert(key.to_string(), Boolean(b));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn full_body_parses_id_and_properties() {
        let body = json!({
            "id": "512",
            "properties": {
                "custom_lead_score_marshall": "85.5",
                "hs_object_id": 512,
                "email": null
            }
        });

        let contact = parse_contact_from_response(&body);
        assert_eq!(contact.id.as_deref(), Some("512"));
        assert_eq!(
            contact.properties.get("custom_lead_score_marshall"),
            Some(&String("85.5".to_string()))
        );
        assert_eq!(contact.properties.get("hs_object_id"), Some(&Int(512)));
        assert_eq!(contact.properties.get("email"), Some(&Null));
    }

    #[test]
    fn missing_id_falls_back_to_none() {
        let body = json!({ "properties": { "email": "a@b.example" } });
        let contact = parse_contact_from_response(&body);
        assert!(contact.id.is_none());
        assert_eq!(contact.properties.len(), 1);
    }

    #[test]
    fn missing_properties_falls_back_to_empty_map() {
        let body = json!({ "id": "512" });
        let contact = parse_contact_from_response(&body);
        assert_eq!(contact.id.as_deref(), Some("512"));
        assert!(contact.properties.is_empty());
    }

    #[test]
    fn non_object_body_yields_empty_contact() {
        let contact = parse_contact_from_response(&json!("unexpected"));
        assert!(contact.id.is_none());
        assert!(contact.properties.is_empty());
    }

    #[test]
    fn numeric_id_is_not_treated_as_a_string() {
        let contact = parse_contact_from_response(&json!({ "id": 512 }));
        assert!(contact.id.is_none());
    }

    #[test]
    fn nested_values_are_skipped() {
        let body = json!({
            "id": "1",
            "properties": { "raw": { "nested": true }, "email": "a@b.example" }
        });
        let contact = parse_contact_from_response(&body);
        assert!(contact.properties.get("raw").is_none());
        assert_eq!(
            contact.properties.get("email"),
            Some(&String("a@b.example".to_string()))
        );
    }
}
