pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod fields;

pub use client::Client;
pub use error::{ClientError, Result as CliClientResult};
pub use fields::{OfferFields, UserFields};
