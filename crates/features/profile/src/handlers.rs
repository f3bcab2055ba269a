use crate::content;
use crate::model::{AboutInfo, ApiInfo, Experience, PersonalInfo, Project, SkillCategory};
use axum::Json;
use folio_derive::api_handler;
use folio_domain::constants::{PORTFOLIO_TAG, SYSTEM_TAG};
use folio_kernel::server::ApiState;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Read-only content routes, mounted at the application root.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(api_root))
        .routes(routes!(personal_info))
        .routes(routes!(about))
        .routes(routes!(skills))
        .routes(routes!(experience))
        .routes(routes!(projects))
}

#[api_handler(
    get,
    path = "/api/",
    responses((status = OK, description = "API greeting", body = ApiInfo)),
    tag = SYSTEM_TAG,
)]
pub(crate) async fn api_root() -> Json<ApiInfo> {
    Json(content::api_info())
}

#[api_handler(
    get,
    path = "/api/portfolio/personal-info",
    responses((status = OK, description = "Owner identity and contact line", body = PersonalInfo)),
    tag = PORTFOLIO_TAG,
)]
pub(crate) async fn personal_info() -> Json<PersonalInfo> {
    Json(content::personal_info())
}

#[api_handler(
    get,
    path = "/api/portfolio/about",
    responses((status = OK, description = "Biography and headline figures", body = AboutInfo)),
    tag = PORTFOLIO_TAG,
)]
pub(crate) async fn about() -> Json<AboutInfo> {
    Json(content::about())
}

#[api_handler(
    get,
    path = "/api/portfolio/skills",
    responses((status = OK, description = "Skill categories", body = Vec<SkillCategory>)),
    tag = PORTFOLIO_TAG,
)]
pub(crate) async fn skills() -> Json<Vec<SkillCategory>> {
    Json(content::skills())
}

#[api_handler(
    get,
    path = "/api/portfolio/experience",
    responses((status = OK, description = "Work history, most recent first", body = Vec<Experience>)),
    tag = PORTFOLIO_TAG,
)]
pub(crate) async fn experience() -> Json<Vec<Experience>> {
    Json(content::experience())
}

#[api_handler(
    get,
    path = "/api/portfolio/projects",
    responses((status = OK, description = "Featured projects", body = Vec<Project>)),
    tag = PORTFOLIO_TAG,
)]
pub(crate) async fn projects() -> Json<Vec<Project>> {
    Json(content::projects())
}
