pub mod analytics;
pub mod claims;
pub mod delete_response;
pub mod error;
pub mod extractors;
pub mod offers;
pub mod users;
pub mod validator;
