#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by every crate of the workspace.
//!
//! * [`macro@rupture_error`] turns an enum into a `thiserror` error with context support.
//! * [`macro@component`] wires a friction-law component struct into the kernel's
//!   `FamilyBound` trait.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! rupture-derive.workspace = true
//! ```
//!
//! The examples below are `ignore`d because a proc-macro crate cannot depend on the crates
//! its expansions refer to; they are compiled by the UI tests under `tests/ui`.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// Defines a domain error enum with context support.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()` to any
///   `Result` carrying this error (or a wrapped source error).
/// * **Source Conversions**: Implements `From<Source>` for variants whose only fields are
///   `source` and `context`, so `?` works on upstream errors.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an `Internal { message, context }`
///   variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants only.
/// 2. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 3. Variants wrapping an upstream error (a `source` field or a `#[source]` field) must carry
///    a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[rupture_derive::rupture_error]
/// pub enum InputError {
///     #[error("Input file error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal input error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &str) -> Result<String, InputError> {
///     std::fs::read_to_string(path).context("Reading fault input")
/// }
/// ```
#[proc_macro_attribute]
pub fn rupture_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}

/// Marks a struct as one of the four components of a friction-law bundle.
///
/// The struct must own a `family: Family` field. The macro adds `Debug` (if not derived)
/// and implements `rupture_kernel::component::FamilyBound` by returning that field, so the
/// storage, initializer, kernel and writer of a bundle all report the family their builder
/// constructed them with.
///
/// # Example
/// ```rust,ignore
/// use rupture_kernel::domain::Family;
///
/// #[rupture_derive::component]
/// pub struct LockedKernel {
///     family: Family,
/// }
/// ```
#[proc_macro_attribute]
pub fn component(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::component::expand(input).into()
}
