use std::borrow::Cow;

/// Failures of the store connection and its schema.
#[folio_derive::folio_error]
pub enum DatabaseError {
    /// The builder is missing a required setting.
    #[error("Invalid database settings{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The engine did not start or never answered a health check.
    #[error("Database unreachable{}: {message}", format_context(.context))]
    Connection { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Root sign-in was refused.
    #[error("Database rejected credentials{}: {message}", format_context(.context))]
    Auth { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A query or statement failed inside `SurrealDB`.
    #[error("Database query failed{}: {source}", format_context(.context))]
    Surreal {
        #[source]
        source: surrealdb::Error,
        context: Option<Cow<'static, str>>,
    },

    /// A recorded migration no longer matches its script.
    #[error("Schema migration failed{}: {message}", format_context(.context))]
    Migration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
