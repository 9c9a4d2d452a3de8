//! Heroes HTTP Server.
//!
//! Exposes hero CRUD under `/heroes` and the villain lookup under
//! `/heroes/villain/{hero_name}`. Not-found and bad-request responses carry
//! no body; fatal errors return an `ErrorResponse`.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

use crate::domain::errors::DomainError;
use crate::domain::models::{Hero, Villain};
use crate::domain::ports::HeroRepository;
use crate::services::HeroService;

/// Configuration for the heroes HTTP server.
#[derive(Debug, Clone)]
pub struct HeroesHttpConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Whether to enable CORS.
    pub enable_cors: bool,
}

impl Default for HeroesHttpConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            enable_cors: true,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
    /// Stable error code.
    pub code: String,
}

/// Handler failure rendered as an HTTP response.
enum ApiError {
    Domain(DomainError),
    MalformedBody(JsonRejection),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = match self {
            Self::Domain(err) => err,
            Self::MalformedBody(rejection) => {
                debug!(error = %rejection.body_text(), "Rejected hero body");
                return StatusCode::BAD_REQUEST.into_response();
            }
        };

        let (status, code) = match &err {
            DomainError::HeroNotFound(_) => return StatusCode::NOT_FOUND.into_response(),
            DomainError::HeroIdMismatch { .. } => return StatusCode::BAD_REQUEST.into_response(),
            DomainError::HeroAlreadyExists(_) => (StatusCode::CONFLICT, "ALREADY_EXISTS"),
            DomainError::RemoteInvocationFailed { .. } => (StatusCode::BAD_GATEWAY, "INVOCATION_ERROR"),
            DomainError::ConcurrencyConflict { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "CONCURRENCY_CONFLICT"),
            DomainError::StateStoreError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "STATE_STORE_ERROR"),
            DomainError::DatabaseError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
            DomainError::SerializationError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "SERIALIZATION_ERROR"),
        };

        if status.is_server_error() {
            error!(error = %err, code, "Request failed");
        }

        (
            status,
            Json(ErrorResponse {
                error: err.to_string(),
                code: code.to_string(),
            }),
        )
            .into_response()
    }
}

/// Shared state for the heroes HTTP server.
struct AppState<R: HeroRepository> {
    service: HeroService<R>,
}

/// Heroes HTTP Server.
pub struct HeroesHttpServer<R: HeroRepository + 'static> {
    config: HeroesHttpConfig,
    service: HeroService<R>,
}

impl<R: HeroRepository + 'static> HeroesHttpServer<R> {
    /// Create a new heroes HTTP server.
    pub fn new(service: HeroService<R>, config: HeroesHttpConfig) -> Self {
        Self { config, service }
    }

    /// Build the router.
    pub fn build_router(self) -> Router {
        let state = Arc::new(AppState {
            service: self.service,
        });

        let app = Router::new()
            .route("/heroes", get(list_heroes::<R>).post(create_hero::<R>))
            .route(
                "/heroes/{id}",
                get(get_hero::<R>).put(update_hero::<R>).delete(delete_hero::<R>),
            )
            .route("/heroes/villain/{hero_name}", get(get_villain::<R>))
            .route("/health", get(health_check))
            .with_state(state);

        if self.config.enable_cors {
            app.layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
                .layer(TraceLayer::new_for_http())
        } else {
            app.layer(TraceLayer::new_for_http())
        }
    }

    /// Start the server.
    pub async fn serve(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.serve_with_shutdown(std::future::pending()).await
    }

    /// Start the server with a shutdown signal.
    pub async fn serve_with_shutdown<F>(
        self,
        shutdown: F,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port).parse()?;
        let router = self.build_router();

        tracing::info!("Heroes HTTP server listening on {}", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;
        Ok(())
    }
}

// Handler functions

async fn health_check() -> &'static str {
    "OK"
}

async fn list_heroes<R: HeroRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<Json<Vec<Hero>>, ApiError> {
    Ok(Json(state.service.list_heroes().await?))
}

async fn get_hero<R: HeroRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<i64>,
) -> Result<Json<Hero>, ApiError> {
    Ok(Json(state.service.get_hero(id).await?))
}

async fn update_hero<R: HeroRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<i64>,
    body: Result<Json<Hero>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(hero) = body?;
    state.service.update_hero(id, &hero).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn create_hero<R: HeroRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    body: Result<Json<Hero>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(hero) = body?;
    let created = state.service.create_hero(&hero).await?;
    let location = format!("/heroes/{}", created.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

async fn delete_hero<R: HeroRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.service.delete_hero(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_villain<R: HeroRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(hero_name): Path<String>,
) -> Result<Json<Villain>, ApiError> {
    Ok(Json(state.service.find_villain(&hero_name).await?))
}
