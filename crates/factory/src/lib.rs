//! # Factory
//!
//! A keyed registry that builds fresh instances of registered concrete types
//! behind a shared base, usually a trait object. Register `key -> Type` bindings
//! once, then ask for new instances by key as often as needed.
//!
//! ## Features
//!
//! * **Two ownership modes**: [`Factory::create_unique`] hands back a `Box<B>`,
//!   [`Factory::create_shared`] an `Arc<B>`.
//! * **Compile-time checks**: only types implementing [`Product<B>`] (default
//!   constructible and upcastable to `B`) can be registered.
//! * **Ordered keys**: [`Factory::list_keys`] is ascending by the key's `Ord`.
//! * **Explicit duplicates**: [`DuplicatePolicy`] decides whether a second
//!   registration for the same key replaces the first or is rejected.
//! * **Missing keys are not errors**: creation returns `None` for unknown keys.
//!
//! ## Example
//!
//! ```rust
//! use fabrik_factory::{DuplicatePolicy, Factory, Product};
//!
//! trait Handler {
//!     fn handle(&self, input: &str) -> String;
//! }
//!
//! #[derive(Default, Product)]
//! #[product(dyn Handler)]
//! struct Upper;
//!
//! #[derive(Default, Product)]
//! #[product(dyn Handler)]
//! struct Echo;
//!
//! impl Handler for Upper {
//!     fn handle(&self, input: &str) -> String {
//!         input.to_uppercase()
//!     }
//! }
//!
//! impl Handler for Echo {
//!     fn handle(&self, input: &str) -> String {
//!         input.to_owned()
//!     }
//! }
//!
//! let mut handlers = Factory::<String, dyn Handler>::with_policy(DuplicatePolicy::Replace);
//! handlers.register::<Echo>("default").unwrap();
//! handlers.register::<Upper>("default").unwrap();
//!
//! let handler = handlers.create_unique("default").unwrap();
//! assert_eq!(handler.handle("hi"), "HI");
//! assert_eq!(handlers.list_keys(), vec!["default".to_owned()]);
//! ```
//!
//! Bindings are only made through [`Factory::register`]; the creators behind
//! them are not part of the public API:
//!
//! ```compile_fail
//! use fabrik_factory::Creator;
//! ```

#[cfg(feature = "config")]
pub mod config;
mod creator;
mod error;
mod factory;
mod policy;
mod product;

pub use crate::error::{FactoryError, FactoryErrorExt};
pub use crate::factory::{Factory, StringFactory};
pub use crate::policy::{DuplicatePolicy, FactoryConfig};
pub use crate::product::Product;
#[cfg(feature = "derive")]
pub use fabrik_derive::Product;
