use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{app_state::AppState, config::Settings, routes};

pub fn create(app_state: AppState, config: &Settings) -> Router<()> {
    // Wrap the app with tracing layer, state and CORS
    let app_url = config.application.app_url.clone();
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_origin(AllowOrigin::predicate(move |origin, _| {
            origin.to_str().unwrap_or_default() == app_url
        }));

    app_routes()
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}

fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { "Discipline records are up" }))
        .nest("/violators", routes::violators::router())
        .nest("/violations", routes::violations::router())
        .nest("/events", routes::events::router())
        .nest("/sheets", routes::sheets::router())
        .merge(routes::dashboard::router())
}
