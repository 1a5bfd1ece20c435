#[allow(clippy::module_inception)]
pub mod analytics;
pub mod flow_response;
