use axum::{
    http::{HeaderValue, Method},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{app_state::AppState, config::ApplicationSettings, routes};

pub fn create(app_state: AppState, config: &ApplicationSettings) -> Router<()> {
    let app = Router::new()
        .nest("/projects", routes::projects::router())
        .merge(routes::health::router());

    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(allowed_origin(&config.app_url));

    app.with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}

fn allowed_origin(app_url: &str) -> AllowOrigin {
    let app_url = app_url.trim_end_matches('/').to_string();
    if HeaderValue::from_str(&app_url).is_err() {
        tracing::warn!("Invalid app_url '{}' for CORS, no origin will be allowed", app_url);
    }
    AllowOrigin::predicate(move |origin: &HeaderValue, _| {
        origin.to_str().is_ok_and(|origin| origin == app_url)
    })
}
