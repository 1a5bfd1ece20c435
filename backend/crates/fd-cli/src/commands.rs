use crate::{
    analytics_commands::AnalyticsCommands, claim_commands::ClaimCommands,
    offer_commands::OfferCommands, user_commands::UserCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Offer operations
    Offer {
        #[command(subcommand)]
        action: OfferCommands,
    },

    /// Claim operations
    Claim {
        #[command(subcommand)]
        action: ClaimCommands,
    },

    /// User registration and profiles
    User {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Dashboard aggregates
    Analytics {
        #[command(subcommand)]
        action: AnalyticsCommands,
    },
}
