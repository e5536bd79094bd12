/// Application state and router builder
///
/// This module defines the shared application state and builds the Axum
/// router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use todolist_api::{app::{build_router, AppState}, config::Config};
/// use todolist_shared::db::pool::create_pool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = create_pool(config.pool_config()).await?;
/// let state = AppState::new(pool, config);
/// let app = build_router(state);
///
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
/// axum::serve(listener, app).await?;
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned into every handler through Axum's `State` extractor. The pool is
/// the only thing requests share; it is created in `main` and injected here.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Routes
///
/// ```text
/// /
/// ├── GET    /health
/// ├── POST   /register
/// ├── POST   /login
/// ├── POST   /lists          # create list
/// ├── PUT    /lists          # rename list
/// ├── GET    /lists/:id      # lists of user :id
/// ├── DELETE /lists/:id      # delete list :id
/// ├── POST   /tasks          # create task
/// ├── PUT    /tasks          # update description
/// ├── GET    /tasks/:id      # tasks of list :id
/// ├── DELETE /tasks/:id      # delete task :id
/// ├── PUT    /movetask
/// └── PUT    /taskstatus
/// ```
///
/// `GET /lists/:id` takes a user id while `DELETE /lists/:id` takes a list
/// id; the router needs one parameter name per path segment.
///
/// # Middleware Stack
///
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer)
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let health_routes = Router::new().route("/health", get(routes::health::health_check));

    let auth_routes = Router::new()
        .route("/register", post(routes::auth::register))
        .route("/login", post(routes::auth::login));

    let list_routes = Router::new()
        .route(
            "/lists",
            post(routes::lists::create_list).put(routes::lists::update_list),
        )
        .route(
            "/lists/:id",
            get(routes::lists::list_by_user).delete(routes::lists::delete_list),
        );

    let task_routes = Router::new()
        .route(
            "/tasks",
            post(routes::tasks::create_task).put(routes::tasks::update_task_description),
        )
        .route(
            "/tasks/:id",
            get(routes::tasks::tasks_by_list).delete(routes::tasks::delete_task),
        )
        .route("/movetask", put(routes::tasks::move_task))
        .route("/taskstatus", put(routes::tasks::update_task_status));

    let cors = cors_layer(&state.config);

    Router::new()
        .merge(health_routes)
        .merge(auth_routes)
        .merge(list_routes)
        .merge(task_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}

/// Permissive CORS unless specific origins are configured
///
/// `Config::from_env` has already rejected origins that are not valid header values.
fn cors_layer(config: &Config) -> CorsLayer {
    if config.allows_any_origin() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .api
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, "Ignoring unparsable CORS origin: {}", e);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(std::time::Duration::from_secs(3600))
}
