#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros shared by the watchface settings crates.
//!
//! Only the error macro lives here for now. Consumers depend on this crate together with
//! `thiserror`, since the generated code derives `thiserror::Error`.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining crate-level error enums.
///
/// Turns a plain enum into an error type wired into the workspace conventions.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless those derives are already present.
/// * `<ErrorName>Ext` trait adding `.context(...)` to `Result<T, ErrorName>` and to
///   `Result<T, SourceError>` for every variant that wraps a source error.
/// * `From<SourceError>` for every variant with a `source` field (or a field marked
///   `#[source]`/`#[from]`).
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }`
///   variant is present.
/// * A private `format_context` helper for use inside `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants only.
/// 2. Variants carrying a source must also carry `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[wfh_derive::wfh_error]
/// pub enum SchemaError {
///     #[error("Malformed schema JSON{}: {source}", format_context(.context))]
///     Json { source: serde_json::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal schema error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn parse(raw: &str) -> Result<serde_json::Value, SchemaError> {
///     serde_json::from_str(raw).context("Parsing settings schema")
/// }
/// ```
#[proc_macro_attribute]
pub fn wfh_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).unwrap_or_else(syn::Error::into_compile_error).into()
}
