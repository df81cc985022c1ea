//! # Fibre Wire
//!
//! A small field-injection engine for Rust.
//!
//! Target types declare, once, which of their fields are injectable and by
//! which marker. An [`Injector`] then walks those declarations, resolves an
//! implementation for each marked field, constructs it and writes it into the
//! target through a wiring entry point only the engine can call.
//!
//! ## Core Concepts
//!
//! - **BindingRegistry**: an immutable contract→implementation mapping, built
//!   once and passed to the injector. There is no global registry.
//! - **Generic path**: `Injector::new(&registry)` wires fields marked
//!   `Inject`, looking contracts up in the registry.
//! - **Strategy path**: `Injector::strategies()` wires fields marked
//!   `FilterByName` or `FilterByPrice` from a fixed table, ignoring the
//!   registry.
//! - **Unwired fields** stay `None`; using them returns
//!   [`MissingDependency`] rather than panicking.
//!
//! ## Quick Start
//!
//! ```
//! use fibre_wire::{injectable, instantiate_default, BindingRegistry, Injector};
//!
//! trait Greeter: Send + Sync {
//!   fn greet(&self) -> String;
//! }
//!
//! #[derive(Default)]
//! struct EnglishGreeter;
//!
//! impl Greeter for EnglishGreeter {
//!   fn greet(&self) -> String {
//!     "Hello, World!".to_string()
//!   }
//! }
//!
//! instantiate_default!(EnglishGreeter);
//!
//! #[derive(Default)]
//! struct Reception {
//!   greeter: Option<Box<dyn Greeter>>,
//! }
//!
//! injectable!(Reception {
//!   greeter: Inject => contract dyn Greeter,
//! });
//!
//! let mut builder = BindingRegistry::builder();
//! builder.register::<dyn Greeter, EnglishGreeter>(|greeter| Box::new(greeter));
//! let registry = builder.build();
//!
//! let mut reception = Reception::default();
//! Injector::new(&registry).inject(&mut reception).unwrap();
//!
//! assert_eq!(reception.greeter.unwrap().greet(), "Hello, World!");
//! ```

mod core;
mod engine;
mod error;
mod filter;
mod logger;
mod macros;
mod manifest;
mod product;
mod registry;
mod slot;
mod strategy;

pub use crate::core::{Binding, ContractKey, Dependency, Implementation, Instantiate};
pub use engine::{Injector, Resolver, WiredField, WiringReport};
pub use error::{
  BoxError, FinderError, InjectionError, InvalidConfiguration, ManifestError, MissingDependency,
  Result,
};
pub use filter::{Filter, NameFilter, Parameter, ParameterKind, PriceFilter};
pub use logger::{Announcer, ConsoleLogger, Logger, COMPLETION_MESSAGE, LOG_PREFIX};
pub use manifest::{BindingManifest, ImplementationCatalog};
pub use product::{Product, ProductFinder};
pub use registry::{BindingRegistry, RegistryBuilder};
pub use slot::{
  undeclared_field, DeclaredType, FieldSlot, Injectable, Marker, Visibility, WireAccess,
};
pub use strategy::{StrategyTable, DEFAULT_PRICE_CEILING, DEFAULT_SEARCH_TEXT};

#[doc(hidden)]
pub mod __private {
  pub use once_cell::sync::Lazy;
}
