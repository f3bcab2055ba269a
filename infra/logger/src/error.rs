use std::borrow::Cow;

/// Reasons [`LoggerBuilder::init`](crate::LoggerBuilder::init) can fail.
#[folio_derive::folio_error]
pub enum LoggerError {
    /// The rolling file appender rejected its directory or file name.
    #[error("Cannot open log file{}: {source}", format_context(.context))]
    Appender { source: tracing_appender::rolling::InitError, context: Option<Cow<'static, str>> },

    /// Another global subscriber is already installed in this process.
    #[error("Logger already installed{}: {source}", format_context(.context))]
    Subscriber {
        source: tracing_subscriber::util::TryInitError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Cannot prepare log directory{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// Unknown level, bad filter directive, or no output enabled.
    #[error("Invalid logger configuration{}: {message}", format_context(.context))]
    InvalidConfiguration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
