// src/app.rs

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::auth::{self, AuthState};
use crate::handlers::{auth as auth_handlers, health, tasks, AppState};

/// Builds the full router. Everything under /todos sits behind the bearer
/// token middleware; /register, /login and /health are public.
pub fn build_router(state: AppState) -> Router {
    let auth_state = AuthState {
        jwt_service: state.jwt.clone(),
    };

    let protected = Router::new()
        .route("/todos", get(tasks::list_tasks).post(tasks::create_task))
        .route(
            "/todos/:id",
            put(tasks::update_task).delete(tasks::delete_task),
        )
        .layer(middleware::from_fn_with_state(
            auth_state,
            auth::auth_middleware,
        ));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/register", post(auth_handlers::register))
        .route("/login", post(auth_handlers::login))
        .merge(protected)
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
