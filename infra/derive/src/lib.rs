#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the Shutter crates.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! shutter-derive.workspace = true
//! thiserror.workspace = true
//! ```
//!
//! The generated code names `::thiserror` directly, so every consumer must depend on it.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for crate-level error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `<Name>Ext` trait that adds `.context(..)`
///   to `Result<T, Name>` and to `Result<T, Source>` for every wrapped source error.
/// * **Standard Conversions**: Implements `From<Source>` for variants with a `source` field
///   (or a field marked `#[source]`/`#[from]`), enabling `?` on upstream errors.
/// * **Internal Fallback**: Implements `From<&'static str>` and `From<String>` when an
///   `Internal { message, context }` variant exists.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants only.
/// 2. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 3. Variants wrapping a source error must carry a `context` field.
///
/// A private `format_context` helper is emitted next to the enum for use inside
/// `#[error(..)]` strings, so only one annotated enum may live in a module.
///
/// # Example
///
/// ```rust,ignore
/// use shutter_derive::shutter_error;
/// use std::borrow::Cow;
///
/// #[shutter_error]
/// pub enum StoreError {
///     #[error("IO error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read() -> Result<String, StoreError> {
///     std::fs::read_to_string("photos.json").context("Reading the photo index")
/// }
/// ```
#[proc_macro_attribute]
pub fn shutter_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
