use clap::Subcommand;

#[derive(Subcommand)]
pub enum ClaimCommands {
    /// List claims
    List {
        /// Filter by offer ID (UUID)
        #[arg(long)]
        offer_id: Option<String>,

        /// Filter by recipient ID (UUID)
        #[arg(long)]
        recipient_id: Option<String>,
    },

    /// Get a claim by ID
    Get {
        /// Claim ID (UUID)
        id: String,
    },

    /// Claim an offer (requires --user-id of a recipient)
    Create {
        /// Offer ID (UUID)
        #[arg(long)]
        offer_id: String,

        /// Pickup notes for the donor
        #[arg(long)]
        notes: Option<String>,
    },

    /// Release a claim
    Delete {
        /// Claim ID (UUID)
        id: String,
    },
}
