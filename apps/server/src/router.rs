use axum::Router;
use axum::http::HeaderValue;
use folio::domain::config::CorsConfig;
use folio::domain::constants::{CONTACT_TAG, PORTFOLIO_TAG, SYSTEM_TAG};
use folio::kernel::prelude::ApiState;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

pub(crate) const DOCS_PATH: &str = "/docs";

#[derive(OpenApi)]
#[openapi(
    info(title = "Folio Portfolio API", description = "Portfolio content and contact messages"),
    tags(
        (name = SYSTEM_TAG, description = "Service status"),
        (name = PORTFOLIO_TAG, description = "Static portfolio content"),
        (name = CONTACT_TAG, description = "Contact message intake and retrieval"),
    )
)]
struct ApiDoc;

pub(crate) fn init(state: ApiState) -> Router {
    let cors = cors_layer(&state.config.server.cors);

    // Separate the OpenAPI routes and the API documentation object
    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(folio::server::router::api_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .split_for_parts();

    let scalar_routes = Scalar::with_url(DOCS_PATH, api_doc);

    Router::new().merge(openapi_routes).merge(scalar_routes).layer(cors)
}

/// `*` opens the API to every origin without credentials; an explicit list allows
/// credentials for exactly those origins.
fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    if cors.allows_any() {
        return CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| {
            let parsed = HeaderValue::from_str(origin.trim());
            if parsed.is_err() {
                warn!(%origin, "Ignoring invalid CORS origin");
            }
            parsed.ok()
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
