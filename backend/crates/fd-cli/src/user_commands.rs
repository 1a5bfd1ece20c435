use crate::UserFields;

use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum UserCommands {
    /// Register a profile (--user-id, if given, becomes the profile ID)
    Register {
        #[arg(long)]
        email: String,

        #[arg(long)]
        name: String,

        /// donor, recipient or admin
        #[arg(long)]
        role: String,

        #[command(flatten)]
        details: UserDetails,
    },

    /// Check whether an email address is registered
    Check {
        #[arg(long)]
        email: String,
    },

    /// Get a profile by ID
    Get {
        /// User ID (UUID)
        id: String,
    },

    /// Update a profile (only the given fields change)
    Update {
        /// User ID (UUID)
        id: String,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        name: Option<String>,

        /// Admins only
        #[arg(long)]
        role: Option<String>,

        #[command(flatten)]
        details: UserDetails,
    },
}

/// Optional profile fields shared by register and update
#[derive(Args)]
pub struct UserDetails {
    #[arg(long)]
    pub organization: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub latitude: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    pub longitude: Option<f64>,
}

impl UserDetails {
    pub fn into_fields(self) -> UserFields {
        UserFields {
            organization: self.organization,
            phone: self.phone,
            address: self.address,
            latitude: self.latitude,
            longitude: self.longitude,
            ..UserFields::default()
        }
    }
}
