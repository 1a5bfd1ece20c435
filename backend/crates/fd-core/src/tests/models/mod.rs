mod offer;
mod offer_status;
mod user;
mod user_role;
