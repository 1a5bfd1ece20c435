pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod request_logging;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    analytics::{analytics::flow_summary, flow_response::FlowResponse},
    claims::{
        claim_dto::ClaimDto,
        claim_list_response::ClaimListResponse,
        claim_response::ClaimResponse,
        claims::{create_claim, delete_claim, get_claim, list_claims},
        create_claim_request::CreateClaimRequest,
        list_claims_query::ListClaimsQuery,
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::user_id::{USER_ID_HEADER, UserId},
    offers::{
        create_offer_request::CreateOfferRequest,
        list_offers_query::ListOffersQuery,
        offer_dto::OfferDto,
        offer_list_response::OfferListResponse,
        offer_response::OfferResponse,
        offers::{create_offer, delete_offer, get_offer, list_offers, update_offer},
        update_offer_request::UpdateOfferRequest,
    },
    users::{
        check_user_query::CheckUserQuery,
        check_user_response::CheckUserResponse,
        register_user_request::RegisterUserRequest,
        update_user_request::UpdateUserRequest,
        user_dto::UserDto,
        user_response::UserResponse,
        users::{check_user, get_user, register_user, update_user},
    },
    validator::{RequestValidator, sanitize_string},
};
pub use app_state::AppState;

pub use crate::routes::build_router;
