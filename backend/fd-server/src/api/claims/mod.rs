pub mod claim_dto;
pub mod claim_list_response;
pub mod claim_response;
#[allow(clippy::module_inception)]
pub mod claims;
pub mod create_claim_request;
pub mod list_claims_query;
