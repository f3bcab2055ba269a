pub use crate::safe_nanoid;
#[cfg(feature = "server")]
pub use crate::server::{ApiError, ApiResult, ApiState};
pub use crate::validation::FieldViolation;
