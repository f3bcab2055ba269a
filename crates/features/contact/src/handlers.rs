use crate::Contact;
use crate::model::{ContactMessage, ContactSubmission};
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use folio_derive::api_handler;
use folio_domain::constants::CONTACT_TAG;
use folio_kernel::server::{ApiResult, ApiState, ErrorBody};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Routes of the contact slice, mounted at the application root.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(submit_contact)).routes(routes!(list_messages))
}

#[api_handler(
    post,
    path = "/api/portfolio/contact",
    request_body = ContactSubmission,
    responses(
        (status = OK, description = "Message stored", body = ContactMessage),
        (status = BAD_REQUEST, description = "Malformed JSON", body = ErrorBody),
        (status = UNPROCESSABLE_ENTITY, description = "Invalid or incomplete submission", body = ErrorBody),
        (status = INTERNAL_SERVER_ERROR, description = "Store rejected the write", body = ErrorBody),
    ),
    tag = CONTACT_TAG,
)]
pub(crate) async fn submit_contact(
    State(state): State<ApiState>,
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> ApiResult<Json<ContactMessage>> {
    let Json(submission) = payload?;
    let contact = state.try_get_slice::<Contact>()?;
    let message = contact.service.submit(submission).await?;
    Ok(Json(message))
}

#[api_handler(
    get,
    path = "/api/portfolio/contact/messages",
    responses(
        (status = OK, description = "Newest messages first, at most 100", body = Vec<ContactMessage>),
        (status = INTERNAL_SERVER_ERROR, description = "Store query failed", body = ErrorBody),
    ),
    tag = CONTACT_TAG,
)]
pub(crate) async fn list_messages(State(state): State<ApiState>) -> ApiResult<Json<Vec<ContactMessage>>> {
    let contact = state.try_get_slice::<Contact>()?;
    let messages = contact.service.recent().await?;
    Ok(Json(messages))
}
