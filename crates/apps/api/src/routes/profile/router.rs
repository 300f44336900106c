use crate::api_state::ApiContext;
use crate::profile::handlers::{update_email, update_name, update_password};
use axum::{Router, routing::put};

pub fn profile_protected_router() -> Router<ApiContext> {
    Router::new()
        .route("/profile/name", put(update_name))
        .route("/profile/email", put(update_email))
        .route("/profile/password", put(update_password))
}
