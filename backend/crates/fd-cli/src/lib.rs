//! fd-cli library
//!
//! Exports the HTTP client and the command definitions used by the `fd` binary.

pub mod analytics_commands;
pub mod claim_commands;
pub mod cli;
pub(crate) mod client;
pub mod commands;
pub mod offer_commands;
pub mod user_commands;

#[cfg(test)]
mod tests;

pub use client::{CliClientResult, Client, ClientError, OfferFields, UserFields};
