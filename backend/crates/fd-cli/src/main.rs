//! fd - Food donation marketplace CLI
//!
//! # Examples
//!
//! ```bash
//! # Register as a donor
//! fd user register --email bakery@example.org --name "Corner Bakery" --role donor
//!
//! # Post an offer
//! fd --user-id <uuid> offer create --title "Sourdough" --category bakery --quantity 20 --unit loaves
//!
//! # Dashboard numbers
//! fd analytics flow --pretty
//! ```

use fd_cli::{
    CliClientResult, Client, OfferFields, UserFields, analytics_commands::AnalyticsCommands,
    claim_commands::ClaimCommands, cli::Cli, commands::Commands, offer_commands::OfferCommands,
    user_commands::UserCommands,
};
use fd_config::PortFileInfo;

use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Discover server URL: explicit flag > port file > error
    let server_url = match cli.server {
        Some(url) => url,
        None => match discover_server_url() {
            Some(url) => url,
            None => return ExitCode::FAILURE,
        },
    };

    let client = Client::new(&server_url, cli.user_id.as_deref());

    let result = run(&client, cli.command).await;

    // Handle result
    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &Client, command: Commands) -> CliClientResult<Value> {
    match command {
        Commands::Offer { action } => match action {
            OfferCommands::List {
                status,
                category,
                donor_id,
            } => {
                client
                    .list_offers(status.as_deref(), category.as_deref(), donor_id.as_deref())
                    .await
            }
            OfferCommands::Get { id } => client.get_offer(&id).await,
            OfferCommands::Create {
                title,
                category,
                quantity,
                unit,
                details,
            } => {
                let fields = OfferFields {
                    title: Some(title),
                    category: Some(category),
                    quantity: Some(quantity),
                    unit: Some(unit),
                    ..details.into_fields()
                };
                client.create_offer(&fields).await
            }
            OfferCommands::Update {
                id,
                title,
                category,
                quantity,
                unit,
                details,
            } => {
                let fields = OfferFields {
                    title,
                    category,
                    quantity,
                    unit,
                    ..details.into_fields()
                };
                client.update_offer(&id, &fields).await
            }
            OfferCommands::Delete { id } => client.delete_offer(&id).await,
        },

        Commands::Claim { action } => match action {
            ClaimCommands::List {
                offer_id,
                recipient_id,
            } => {
                client
                    .list_claims(offer_id.as_deref(), recipient_id.as_deref())
                    .await
            }
            ClaimCommands::Get { id } => client.get_claim(&id).await,
            ClaimCommands::Create { offer_id, notes } => {
                client.create_claim(&offer_id, notes.as_deref()).await
            }
            ClaimCommands::Delete { id } => client.delete_claim(&id).await,
        },

        Commands::User { action } => match action {
            UserCommands::Register {
                email,
                name,
                role,
                details,
            } => {
                let fields = UserFields {
                    email: Some(email),
                    name: Some(name),
                    role: Some(role),
                    ..details.into_fields()
                };
                client.register_user(&fields).await
            }
            UserCommands::Check { email } => client.check_user(&email).await,
            UserCommands::Get { id } => client.get_user(&id).await,
            UserCommands::Update {
                id,
                email,
                name,
                role,
                details,
            } => {
                let fields = UserFields {
                    email,
                    name,
                    role,
                    ..details.into_fields()
                };
                client.update_user(&id, &fields).await
            }
        },

        Commands::Analytics { action } => match action {
            AnalyticsCommands::Flow => client.flow_summary().await,
        },
    }
}

/// Discover the server URL from the port discovery file.
///
/// fd-server writes `server.json` after binding. Stale files left by a dead
/// process are ignored. Prints guidance and returns `None` when no server
/// is found.
fn discover_server_url() -> Option<String> {
    let port_path = PortFileInfo::path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| ".food/server.json".to_string());

    match PortFileInfo::read_live() {
        Ok(Some(info)) => Some(format!("http://{}:{}", info.host, info.port)),
        Ok(None) => {
            eprintln!("Error: No running fd-server found.");
            eprintln!();
            eprintln!("Checked: {}", port_path);
            eprintln!();
            eprintln!("Start the server first:");
            eprintln!("  cargo run -p fd-server");
            eprintln!();
            eprintln!("Or specify a server URL explicitly:");
            eprintln!("  fd --server http://127.0.0.1:8000 <command>");
            None
        }
        Err(e) => {
            eprintln!("Error reading port file ({}): {}", port_path, e);
            eprintln!();
            eprintln!("Specify a server URL explicitly:");
            eprintln!("  fd --server http://127.0.0.1:8000 <command>");
            None
        }
    }
}
