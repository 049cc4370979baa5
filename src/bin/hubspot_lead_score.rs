//! hubspot-lead-score: Set the custom lead score on a HubSpot contact
//!
//! Usage:
//!   hubspot-lead-score 3051 85.5
//!   hubspot-lead-score --token pat-na1-... 3051 85.5
//!
//! The access token falls back to HUBSPOT_ACCESS_TOKEN when not passed.
//! Exit code 0 means the update was accepted; 1 means anything else.

use clap::Parser;
use hubspot_contacts_client::LogLevel;
use hubspot_contacts_client::auth::credentials::resolve_access_token;
use hubspot_contacts_client::hubspot::serviceclient::ServiceClient;

#[derive(Parser, Debug)]
#[clap(name = "hubspot-lead-score")]
#[clap(about = "Update a HubSpot contact's custom lead score", long_about = None)]
struct Args {
    /// The HubSpot contact ID to update
    contact_id: String,

    /// The lead score value to set
    score: f64,

    /// Private app access token (defaults to HUBSPOT_ACCESS_TOKEN)
    #[clap(short, long, value_name = "TOKEN")]
    token: Option<String>,

    /// Print request URLs and bodies while running
    #[clap(long)]
    debug: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let token = match resolve_access_token(args.token.as_deref()) {
        Ok(token) => token,
        Err(message) => {
            eprintln!("Error: {message}");
            std::process::exit(1);
        }
    };

    let log_level = if args.debug {
        LogLevel::Debug
    } else {
        LogLevel::Information
    };

    let client = ServiceClient::new(&token, log_level);
    let outcome = client.update_lead_score(&args.contact_id, args.score).await;

    if outcome.is_success() {
        println!("✓ Successfully updated contact {}", args.contact_id);
        println!("  Lead score set to: {}", args.score);
    } else {
        println!("✗ Failed to update contact {}", args.contact_id);
        println!("  Error: {}", outcome.message());
        std::process::exit(1);
    }
}
