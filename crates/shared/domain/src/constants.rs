//! Names shared between slices, the database schema, and the `OpenAPI` document.

/// `OpenAPI` tag for infrastructure endpoints.
pub const SYSTEM_TAG: &str = "System";
/// `OpenAPI` tag for the static portfolio content.
pub const PORTFOLIO_TAG: &str = "Portfolio";
/// `OpenAPI` tag for contact intake and retrieval.
pub const CONTACT_TAG: &str = "Contact";

/// Table holding contact form submissions.
pub const CONTACT_MESSAGE: &str = "contact_message";
