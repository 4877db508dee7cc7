//! HTTP API Layer
//!
//! This crate provides the REST API for the review platform using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers per domain
//! - **Middleware**: Session authentication, audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! The session token only asserts a user id; the admin flag is resolved
//! against the profile store freshly on every call.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod notify;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_accounts::{AccountService, ProfileStore};
use domain_claims::ClaimService;
use domain_company::CompanyService;
use domain_reviews::ReviewService;

use crate::config::ApiConfig;
use crate::handlers::{accounts, claims, companies, health, reviews};
use crate::middleware::{audit_middleware, auth_middleware};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub claims: Arc<ClaimService>,
    pub companies: Arc<CompanyService>,
    pub reviews: Arc<ReviewService>,
    pub accounts: Arc<AccountService>,
    pub profiles: Arc<dyn ProfileStore>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Shared application state (services wired to their adapters)
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        // The verification token is itself the credential
        .route("/verify/:token", get(claims::verify_token))
        .route("/companies/:slug", get(companies::get_company));

    // Company routes
    let company_routes = Router::new()
        .route("/", post(companies::create_company))
        .route("/:id", put(companies::update_company))
        .route("/:id", delete(companies::delete_company))
        .route("/:id/transfer-ownership", post(companies::transfer_ownership))
        .route("/:id/claims/email", post(claims::submit_email_claim))
        .route("/:id/claims/manual", post(claims::submit_manual_claim))
        .route("/:id/reviews", post(reviews::submit_review));

    // Claim adjudication routes (admin)
    let claim_routes = Router::new()
        .route("/:id/approve", post(claims::approve_claim))
        .route("/:id/reject", post(claims::reject_claim));

    // Review routes
    let review_routes = Router::new()
        .route("/:id", put(reviews::update_review))
        .route("/:id", delete(reviews::delete_review))
        .route("/:id/response", post(reviews::respond_to_review))
        .route("/:id/status", put(reviews::set_review_status));

    // Admin moderation routes
    let admin_routes = Router::new().route("/reviews/:id", delete(reviews::delete_review_admin));

    // Account routes
    let account_routes = Router::new()
        .route("/profile", get(accounts::my_profile))
        .route("/display-name", put(accounts::update_display_name))
        .route("/", delete(accounts::delete_account));

    // Protected API routes
    let api_routes = Router::new()
        .nest("/companies", company_routes)
        .nest("/claims", claim_routes)
        .nest("/reviews", review_routes)
        .nest("/admin", admin_routes)
        .nest("/account", account_routes)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            audit_middleware,
        ))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
