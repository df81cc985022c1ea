//! Per-type declaration of injectable fields, and the wiring entry point.

use crate::core::{Binding, ContractKey, Dependency, Instantiate};
use crate::error::InjectionError;
use std::any::type_name;

/// The tag on a field selecting how it takes part in wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
  /// Resolved through the [`BindingRegistry`](crate::BindingRegistry).
  Inject,
  /// Receives a [`NameFilter`](crate::NameFilter) from the strategy table.
  FilterByName,
  /// Receives a [`PriceFilter`](crate::PriceFilter) from the strategy table.
  FilterByPrice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
  Public,
  Private,
}

impl Visibility {
  /// Maps the stringified `vis` token of a field declaration.
  pub fn from_token(token: &str) -> Self {
    if token.is_empty() {
      Visibility::Private
    } else {
      Visibility::Public
    }
  }
}

/// What the field is declared as.
#[derive(Debug, Clone)]
pub enum DeclaredType {
  /// An abstract contract, resolved through a registry.
  Contract(ContractKey),
  /// A concrete type; it is its own implementation.
  Concrete(Binding),
}

impl DeclaredType {
  pub fn key(&self) -> ContractKey {
    match self {
      DeclaredType::Contract(key) => *key,
      DeclaredType::Concrete(binding) => binding.implementation(),
    }
  }
}

/// One declared field of an injection target.
#[derive(Debug, Clone)]
pub struct FieldSlot {
  declaring_type: &'static str,
  name: &'static str,
  declared: DeclaredType,
  visibility: Visibility,
  marker: Option<Marker>,
}

impl FieldSlot {
  /// A private, unmarked field of `T` declared as contract `C`.
  pub fn contract<T: ?Sized, C: ?Sized + 'static>(name: &'static str) -> Self {
    Self::new::<T>(name, DeclaredType::Contract(ContractKey::of::<C>()))
  }

  /// A private, unmarked field of `T` declared as concrete type `F`.
  pub fn concrete<T: ?Sized, F: Instantiate>(name: &'static str) -> Self {
    Self::new::<T>(name, DeclaredType::Concrete(Binding::concrete::<F>()))
  }

  fn new<T: ?Sized>(name: &'static str, declared: DeclaredType) -> Self {
    Self {
      declaring_type: type_name::<T>(),
      name,
      declared,
      visibility: Visibility::Private,
      marker: None,
    }
  }

  pub fn marked(mut self, marker: Marker) -> Self {
    self.marker = Some(marker);
    self
  }

  pub fn with_visibility(mut self, visibility: Visibility) -> Self {
    self.visibility = visibility;
    self
  }

  pub fn declaring_type(&self) -> &'static str {
    self.declaring_type
  }

  pub fn name(&self) -> &'static str {
    self.name
  }

  pub fn declared(&self) -> &DeclaredType {
    &self.declared
  }

  pub fn visibility(&self) -> Visibility {
    self.visibility
  }

  pub fn marker(&self) -> Option<Marker> {
    self.marker
  }
}

/// Capability required to call [`Injectable::wire`].
///
/// Only the engine can create one, so a target's wiring entry point is
/// unreachable from any other caller.
pub struct WireAccess {
  _sealed: (),
}

impl WireAccess {
  pub(crate) fn new() -> Self {
    Self { _sealed: () }
  }
}

/// A type whose fields can be wired by an [`Injector`](crate::Injector).
///
/// Usually implemented through [`injectable!`](crate::injectable).
pub trait Injectable: 'static {
  /// The fields declared by this type, in declaration order.
  fn declared_fields() -> &'static [FieldSlot]
  where
    Self: Sized;

  /// Writes `dependency` into the field described by `slot`.
  ///
  /// Must return [`InjectionError::FieldWriteDenied`] if the field is
  /// unknown or the dependency does not have the field's type.
  fn wire(
    &mut self,
    slot: &FieldSlot,
    dependency: Dependency,
    access: WireAccess,
  ) -> Result<(), InjectionError>;
}

/// Builds the error a `wire` impl returns for a field it does not own.
pub fn undeclared_field<T: ?Sized>(slot: &FieldSlot) -> InjectionError {
  InjectionError::field_write_denied(
    type_name::<T>(),
    slot.name(),
    "field is not declared injectable on this type",
  )
}
