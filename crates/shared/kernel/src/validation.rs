//! Transport-independent validation results.

use folio_derive::api_model;
use std::borrow::Cow;

/// A single rejected input field.
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Name of the offending field as it appears on the wire.
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub field: Cow<'static, str>,
    /// Human-readable reason.
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub message: Cow<'static, str>,
}

impl FieldViolation {
    pub fn new(field: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}
