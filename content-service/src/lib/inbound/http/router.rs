use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_journey;
use super::handlers::create_scenario;
use super::handlers::create_word;
use super::handlers::delete_journey;
use super::handlers::delete_scenario;
use super::handlers::delete_word;
use super::handlers::get_journey;
use super::handlers::get_scenario;
use super::handlers::get_word;
use super::handlers::health;
use super::handlers::list_journeys;
use super::handlers::login;
use super::handlers::me;
use super::handlers::register;
use super::handlers::update_journey;
use super::handlers::update_scenario;
use super::handlers::update_word;
use super::middleware::authenticate;
use crate::domain::content::ports::ContentServicePort;
use crate::domain::content::ports::JourneyRepository;
use crate::domain::content::ports::ScenarioRepository;
use crate::domain::content::ports::WordRepository;
use crate::domain::content::service::ContentService;
use crate::domain::ownership::ports::OwnershipPort;
use crate::domain::ownership::resolver::OwnershipResolver;
use crate::domain::user::ports::AuthServicePort;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::service::AuthService;

/// Shared state for every HTTP handler.
///
/// Services sit behind their ports so the same router runs on PostgreSQL in
/// production and on the in-memory store in tests.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub content_service: Arc<dyn ContentServicePort>,
    pub ownership: Arc<dyn OwnershipPort>,
    pub authenticator: Arc<Authenticator>,
}

impl AppState {
    /// Wire the services over the given repositories.
    ///
    /// # Arguments
    /// * `users` - Credential record persistence
    /// * `journeys` / `scenarios` / `words` - Content persistence, one per level
    /// * `authenticator` - Hasher and token codec bound to the signing secret
    /// * `lookup_timeout` - Upper bound for each repository read
    pub fn new<UR, JR, SR, WR>(
        users: Arc<UR>,
        journeys: Arc<JR>,
        scenarios: Arc<SR>,
        words: Arc<WR>,
        authenticator: Arc<Authenticator>,
        lookup_timeout: Duration,
    ) -> Self
    where
        UR: UserRepository,
        JR: JourneyRepository,
        SR: ScenarioRepository,
        WR: WordRepository,
    {
        let auth_service = AuthService::new(users, authenticator.clone(), lookup_timeout);
        let content_service = ContentService::new(
            journeys.clone(),
            scenarios.clone(),
            words.clone(),
            lookup_timeout,
        );
        let ownership = OwnershipResolver::new(journeys, scenarios, words, lookup_timeout);

        Self {
            auth_service: Arc::new(auth_service),
            content_service: Arc::new(content_service),
            ownership: Arc::new(ownership),
            authenticator,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login));

    let protected_routes = Router::new()
        .route("/auth/me", get(me))
        .route("/journeys", get(list_journeys).post(create_journey))
        .route(
            "/journeys/:journey_id",
            get(get_journey).put(update_journey).delete(delete_journey),
        )
        .route("/scenarios", post(create_scenario))
        .route(
            "/scenarios/:scenario_id",
            get(get_scenario).put(update_scenario).delete(delete_scenario),
        )
        .route("/words", post(create_word))
        .route(
            "/words/:word_id",
            get(get_word).put(update_word).delete(delete_word),
        )
        .route_layer(middleware::from_fn_with_state(
            state.authenticator.clone(),
            authenticate,
        ));

    // Headers are left out of the span: they carry bearer tokens.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
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
        .route("/health", get(health))
        .nest("/api/v1", public_routes.merge(protected_routes))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
