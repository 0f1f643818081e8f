use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::accounts::approve_account;
use super::handlers::accounts::change_account_role;
use super::handlers::accounts::delete_account;
use super::handlers::accounts::list_accounts;
use super::handlers::accounts::register_account;
use super::handlers::login::login;
use super::handlers::reference::create_priority;
use super::handlers::reference::create_role;
use super::handlers::reference::create_status;
use super::handlers::reference::delete_priority;
use super::handlers::reference::delete_role;
use super::handlers::reference::delete_status;
use super::handlers::reference::list_priorities;
use super::handlers::reference::list_roles;
use super::handlers::reference::list_statuses;
use super::handlers::requests::delete_request;
use super::handlers::requests::get_request;
use super::handlers::requests::list_account_requests;
use super::handlers::requests::list_requests;
use super::handlers::requests::set_request_status;
use super::handlers::requests::submit_request;
use super::middleware::authenticate as auth_middleware;
use crate::domain::account::service::AccountService;
use crate::domain::reference::service::ReferenceService;
use crate::domain::request::service::RequestService;
use crate::domain::role::service::RoleService;
use crate::outbound::repositories::PostgresAccountRepository;
use crate::outbound::repositories::PostgresPriorityRepository;
use crate::outbound::repositories::PostgresRequestRepository;
use crate::outbound::repositories::PostgresRoleRepository;
use crate::outbound::repositories::PostgresStatusRepository;

#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountService<PostgresAccountRepository, PostgresRoleRepository>>,
    pub request_service: Arc<RequestService<PostgresRequestRepository, PostgresStatusRepository>>,
    pub role_service: Arc<RoleService<PostgresRoleRepository>>,
    pub reference_service: Arc<ReferenceService<PostgresPriorityRepository, PostgresStatusRepository>>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(state: AppState) -> Router {
    // Registration and login are the only endpoints reachable without a token
    let public_routes = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/accounts", post(register_account));

    let protected_routes = Router::new()
        .route("/api/accounts", get(list_accounts))
        .route("/api/accounts/:account_id/approve", patch(approve_account))
        .route("/api/accounts/:account_id/role", patch(change_account_role))
        .route("/api/accounts/:account_id", delete(delete_account))
        .route("/api/accounts/:account_id/requests", get(list_account_requests))
        .route("/api/requests", get(list_requests))
        .route("/api/requests", post(submit_request))
        .route("/api/requests/:request_id", get(get_request))
        .route("/api/requests/:request_id/status", patch(set_request_status))
        .route("/api/requests/:request_id", delete(delete_request))
        .route("/api/roles", get(list_roles))
        .route("/api/roles", post(create_role))
        .route("/api/roles/:role_id", delete(delete_role))
        .route("/api/priorities", get(list_priorities))
        .route("/api/priorities", post(create_priority))
        .route("/api/priorities/:code", delete(delete_priority))
        .route("/api/statuses", get(list_statuses))
        .route("/api/statuses", post(create_status))
        .route("/api/statuses/:code", delete(delete_status))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
                headers = ?request.headers(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
