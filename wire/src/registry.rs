//! The `BindingRegistry` and the builder that produces it.

use crate::core::{Binding, ContractKey, Instantiate};
use crate::error::{InjectionError, Result};
use crate::slot::FieldSlot;
use std::collections::HashMap;

/// Collects contract→implementation bindings before any injection runs.
///
/// Registering the same contract twice keeps the last registration.
#[derive(Default)]
pub struct RegistryBuilder {
  bindings: HashMap<ContractKey, Binding>,
}

impl RegistryBuilder {
  pub fn new() -> Self {
    Self::default()
  }

  /// Binds contract `C` to implementation `I`.
  ///
  /// ```
  /// use fibre_wire::{instantiate_default, BindingRegistry};
  ///
  /// trait Greeter { fn greet(&self) -> String; }
  ///
  /// #[derive(Default)]
  /// struct English;
  /// impl Greeter for English { fn greet(&self) -> String { "Hello!".into() } }
  /// instantiate_default!(English);
  ///
  /// let mut builder = BindingRegistry::builder();
  /// builder.register::<dyn Greeter, English>(|greeter| Box::new(greeter));
  /// let registry = builder.build();
  /// assert!(registry.contains::<dyn Greeter>());
  /// ```
  pub fn register<C, I>(
    &mut self,
    upcast: impl Fn(I) -> Box<C> + Send + Sync + 'static,
  ) -> &mut Self
  where
    C: ?Sized + 'static,
    I: Instantiate,
  {
    self.insert(ContractKey::of::<C>(), Binding::contract::<C, I>(upcast));
    self
  }

  pub(crate) fn insert(&mut self, key: ContractKey, binding: Binding) {
    if let Some(previous) = self.bindings.insert(key, binding) {
      tracing::debug!(
        contract = key.name(),
        previous = previous.implementation().name(),
        "overwrote binding"
      );
    }
  }

  /// Freezes the bindings. The returned registry has no mutating methods.
  pub fn build(self) -> BindingRegistry {
    BindingRegistry {
      bindings: self.bindings,
    }
  }
}

/// Immutable mapping from contract to the implementation that satisfies it.
///
/// Built once with [`RegistryBuilder`] and passed to the
/// [`Injector`](crate::Injector) explicitly. It is `Send + Sync`, so one
/// registry can serve injections on several threads.
#[derive(Debug, Default)]
pub struct BindingRegistry {
  bindings: HashMap<ContractKey, Binding>,
}

impl BindingRegistry {
  pub fn builder() -> RegistryBuilder {
    RegistryBuilder::new()
  }

  /// Looks up the binding for `contract` on behalf of `slot`.
  pub fn lookup(&self, contract: &ContractKey, slot: &FieldSlot) -> Result<&Binding> {
    self
      .bindings
      .get(contract)
      .ok_or(InjectionError::BindingNotFound {
        contract: contract.name(),
        field: slot.name(),
        target: slot.declaring_type(),
      })
  }

  pub fn get<C: ?Sized + 'static>(&self) -> Option<&Binding> {
    self.bindings.get(&ContractKey::of::<C>())
  }

  pub fn contains<C: ?Sized + 'static>(&self) -> bool {
    self.get::<C>().is_some()
  }

  pub fn len(&self) -> usize {
    self.bindings.len()
  }

  pub fn is_empty(&self) -> bool {
    self.bindings.is_empty()
  }
}
