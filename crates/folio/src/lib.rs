//! Facade crate for Folio features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `folio` with the `server` feature.
//! - Hand [`migrations`] to the database builder, then call [`init`] to build the feature
//!   slices registered in the API state.

use folio_database::{Database, Migration};
pub use folio_domain as domain;
pub use folio_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        use folio_kernel::server::ApiState;
        pub use folio_kernel::server::router::system_router;
        use utoipa_axum::router::OpenApiRouter;

        /// Every route of every enabled slice, with absolute paths.
        pub fn api_router() -> OpenApiRouter<ApiState> {
            system_router()
                .merge(folio_profile::handlers::router())
                .merge(folio_contact::handlers::router())
        }
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use folio_contact as contact;
    pub use folio_profile as profile;

    /// Build-time enabled features (by Cargo feature), logged at startup.
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "server")]
        "server",
        "contact",
        "profile",
    ];
}

/// Schema migrations of every slice that owns tables, in application order.
#[must_use]
pub fn migrations() -> Vec<Migration> {
    features::contact::MIGRATIONS.to_vec()
}

/// Initialize all stateful feature slices.
///
/// The connection must already carry the schema from [`migrations`].
#[must_use]
pub fn init(database: &Database) -> Vec<domain::registry::InitializedSlice> {
    vec![features::contact::init(database)]
}
