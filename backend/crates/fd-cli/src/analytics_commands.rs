use clap::Subcommand;

#[derive(Subcommand)]
pub enum AnalyticsCommands {
    /// Offer counts per stage: predicted, confirmed, claimed, delivered
    Flow,
}
