use crate::OfferFields;

use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum OfferCommands {
    /// List offers
    List {
        /// Filter by status (predicted, confirmed, claimed, delivered)
        #[arg(long)]
        status: Option<String>,

        /// Filter by category (case-insensitive)
        #[arg(long)]
        category: Option<String>,

        /// Filter by donor ID (UUID)
        #[arg(long)]
        donor_id: Option<String>,
    },

    /// Get an offer by ID
    Get {
        /// Offer ID (UUID)
        id: String,
    },

    /// Post a new offer (requires --user-id of a donor)
    Create {
        #[arg(long)]
        title: String,

        /// e.g. produce, bakery, prepared
        #[arg(long)]
        category: String,

        #[arg(long)]
        quantity: f64,

        /// e.g. kg, loaves, servings
        #[arg(long)]
        unit: String,

        #[command(flatten)]
        details: OfferDetails,
    },

    /// Update an offer (only the given fields change)
    Update {
        /// Offer ID (UUID)
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        quantity: Option<f64>,

        #[arg(long)]
        unit: Option<String>,

        #[command(flatten)]
        details: OfferDetails,
    },

    /// Delete an offer and its claims
    Delete {
        /// Offer ID (UUID)
        id: String,
    },
}

/// Optional offer fields shared by create and update
#[derive(Args)]
pub struct OfferDetails {
    #[arg(long)]
    pub description: Option<String>,

    /// predicted, confirmed, claimed or delivered
    #[arg(long)]
    pub status: Option<String>,

    #[arg(long)]
    pub pickup_address: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub latitude: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    pub longitude: Option<f64>,

    /// Unix timestamp (seconds)
    #[arg(long)]
    pub available_until: Option<i64>,
}

impl OfferDetails {
    pub fn into_fields(self) -> OfferFields {
        OfferFields {
            description: self.description,
            status: self.status,
            pickup_address: self.pickup_address,
            latitude: self.latitude,
            longitude: self.longitude,
            available_until: self.available_until,
            ..OfferFields::default()
        }
    }
}
