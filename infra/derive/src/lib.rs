#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by every crate of the workspace: error enums,
//! API data models, HTTP handlers, and feature slice handles.
//!
//! The examples below are `ignore`d because a proc-macro crate cannot use its own macros.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Attribute macro to define a standard API data model.
///
/// # Injected Behaviors
///
/// * **Derives**: `Debug`, `Serialize`, and `Deserialize` when missing.
/// * **`OpenAPI`**: `utoipa::ToSchema` behind the consuming crate's `server` feature.
/// * **Serde Policy**: `rename_all = "snake_case"` and `deny_unknown_fields` unless overridden.
///
/// # Arguments
///
/// * `rename_all = "camelCase"` - Overrides the default Serde rename policy.
/// * `deny_unknown_fields = false` - Accepts and drops unknown input fields.
///
/// # Example
///
/// ```rust,ignore
/// use folio_derive::api_model;
///
/// #[api_model(deny_unknown_fields = false)]
/// pub struct ContactSubmission {
///     pub name: String,
///     pub email: String,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Attribute macro to bridge Axum handlers with `OpenAPI` documentation.
///
/// Accepts the regular `utoipa::path` arguments (`get`, `post`, `path = "..."`,
/// `responses(...)`, `tag = ...`) and forwards them when the consuming crate enables
/// its `server` feature.
///
/// # Example
///
/// ```rust,ignore
/// #[api_handler(
///     get,
///     path = "/health",
///     responses((status = OK, body = HealthResponse)),
///     tag = "System"
/// )]
/// pub async fn health_handler() -> impl IntoResponse { /* ... */ }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Attribute macro for defining crate-level error enums.
///
/// # Features
///
/// * **Automatic Derives**: `Debug` and `thiserror::Error`.
/// * **Context Support**: a companion `<Name>Ext` trait adding `.context(...)` to results.
/// * **Conversions**: `From<T>` for every variant whose `source` type is unique within
///   the enum. When two variants wrap the same type (e.g. an intake and a retrieval
///   failure both caused by the store) no conversion is generated for that type, and
///   the variant has to be constructed explicitly.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an `Internal`
///   variant exists.
///
/// # Requirements
///
/// 1. Only enums with named-field variants are accepted.
/// 2. Variants with a source must carry `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use folio_derive::folio_error;
/// use std::borrow::Cow;
///
/// #[folio_error]
/// pub enum DatabaseError {
///     #[error("SurrealDB error{}: {source}", format_context(.context))]
///     Surreal { source: surrealdb::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn folio_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Attribute macro to define a feature slice handle.
///
/// Turns the annotated struct into `<Name>Inner`, wraps it in a cloneable
/// `Arc` handle named `<Name>`, implements `Deref` to the inner state and
/// registers the handle as a `FeatureSlice` for the kernel registry.
///
/// # Example
/// ```rust,ignore
/// #[folio_derive::folio_slice]
/// pub struct Contact {
///     pub service: ContactService,
/// }
///
/// let slice = Contact::new(ContactInner { service });
/// ```
#[proc_macro_attribute]
pub fn folio_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
