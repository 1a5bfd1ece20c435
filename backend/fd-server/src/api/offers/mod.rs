pub mod create_offer_request;
pub mod list_offers_query;
pub mod offer_dto;
pub mod offer_list_response;
pub mod offer_response;
#[allow(clippy::module_inception)]
pub mod offers;
pub mod update_offer_request;
