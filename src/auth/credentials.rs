use std::env;

/// Environment variable consulted when no token is supplied explicitly.
pub const ACCESS_TOKEN_ENV_VAR: &str = "HUBSPOT_ACCESS_TOKEN";

/// Resolve the private app access token to use for a client session.
///
/// An explicitly supplied token always wins; otherwise the
/// `HUBSPOT_ACCESS_TOKEN` environment variable is consulted. A token that is
/// missing or blank from both sources is a configuration error.
pub fn resolve_access_token(explicit: Option<&str>) -> Result<String, String> {
    let token = match explicit {
        Some(value) => value.to_string(),
        None => {
            log::debug!("no explicit token supplied, consulting {ACCESS_TOKEN_ENV_VAR}");
            env::var(ACCESS_TOKEN_ENV_VAR).unwrap_or_default()
        }
    };

    if token.trim().is_empty() {
        return Err(format!(
            "HubSpot access token required. Pass one explicitly or set {ACCESS_TOKEN_ENV_VAR}."
        ));
    }

    Ok(token)
}
