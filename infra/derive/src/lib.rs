#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros for the factory registry: the `Product` derive and the
//! `fabrik_error` attribute used by its error enums.
//!
//! Consumers normally reach the derive through `fabrik_factory::Product`, which
//! re-exports it next to the trait of the same name:
//! ```toml
//! [dependencies]
//! fabrik-factory = { path = "../crates/factory" }
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that implements `fabrik_factory::Product` for a concrete type.
///
/// The bases the type can be built as are listed in one or more `#[product(...)]`
/// attributes. One `Product<Base>` impl is generated per base, each moving the
/// value into a `Box<Base>` or an `Arc<Base>`.
///
/// # Arguments
///
/// * `dyn Trait, ...` - Base types (usually trait objects) the type upcasts to.
/// * `crate = "path"` - Path to the factory crate when it is re-exported under
///   another name. Defaults to `::fabrik_factory`.
///
/// # Errors
///
/// Emits a compile-time error when no base is given, when a base is listed twice,
/// or when `crate` is set more than once.
///
/// # Example
///
/// ```rust,ignore
/// use fabrik_factory::Product;
///
/// trait Shape {
///     fn area(&self) -> f64;
/// }
///
/// #[derive(Default, Product)]
/// #[product(dyn Shape, dyn std::fmt::Debug)]
/// #[derive(Debug)]
/// struct Circle {
///     radius: f64,
/// }
/// ```
#[proc_macro_derive(Product, attributes(product))]
pub fn product(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::product::expand_derive(input).into()
}

/// Attribute macro for the crate's error enums.
///
/// Every variant carries named fields: either a `message` or a `source` (a field
/// named `source`, or one marked `#[source]`/`#[from]`), plus
/// `context: Option<Cow<'static, str>>`.
///
/// Generates:
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * A `{Name}Ext<T>` trait with `.context(...)` for `Result<T, Name>`.
/// * For each source variant, `From<Source>` and `{Name}Ext` for `Result<T, Source>`.
/// * A module-local `format_context` helper for `#[error(...)]` strings.
///
/// # Errors
///
/// Emits a compile-time error when applied to anything but an enum, when a variant
/// has unnamed fields, when `context` has the wrong type, or when a source variant
/// lacks `context`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[fabrik_derive::fabrik_error]
/// pub enum LoadError {
///     #[error("Io error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn fabrik_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_error(input).into()
}
