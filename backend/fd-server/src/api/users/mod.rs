pub mod check_user_query;
pub mod check_user_response;
pub mod register_user_request;
pub mod update_user_request;
pub mod user_dto;
pub mod user_response;
#[allow(clippy::module_inception)]
pub mod users;
