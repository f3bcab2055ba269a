//! HTTP plumbing shared by every slice: application state, error responses, and the
//! system router.

mod error;
mod health;
pub mod router;
mod state;

pub use error::{ApiError, ApiResult, ErrorBody, ErrorDetail};
pub use health::HealthResponse;
pub use state::{ApiState, ApiStateBuilder, ApiStateError, ApiStateInner};
