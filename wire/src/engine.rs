//! The injection engine: field walk, resolution, instantiation and wiring.

use crate::core::{Binding, Implementation};
use crate::error::{InjectionError, Result};
use crate::registry::BindingRegistry;
use crate::slot::{DeclaredType, FieldSlot, Injectable, Marker, WireAccess};
use crate::strategy::StrategyTable;
use std::any::TypeId;

/// Decides which implementation, if any, a field receives.
///
/// `Ok(None)` means the field does not take part in this injection.
pub trait Resolver {
  fn resolve(&self, slot: &FieldSlot) -> Result<Option<Binding>>;
}

impl<R: Resolver + ?Sized> Resolver for &R {
  fn resolve(&self, slot: &FieldSlot) -> Result<Option<Binding>> {
    (**self).resolve(slot)
  }
}

/// Generic path: only `Inject` fields, concrete types stand for themselves,
/// contracts go through the registry.
impl Resolver for BindingRegistry {
  fn resolve(&self, slot: &FieldSlot) -> Result<Option<Binding>> {
    if slot.marker() != Some(Marker::Inject) {
      return Ok(None);
    }
    match slot.declared() {
      DeclaredType::Concrete(binding) => Ok(Some(binding.clone())),
      DeclaredType::Contract(contract) => self.lookup(contract, slot).map(|b| Some(b.clone())),
    }
  }
}

/// Strategy path: the marker alone picks the implementation. A marked field
/// not declared as `dyn Filter` still resolves, and `inject` rejects it
/// before writing anything.
impl Resolver for StrategyTable {
  fn resolve(&self, slot: &FieldSlot) -> Result<Option<Binding>> {
    Ok(slot.marker().and_then(|marker| self.entry(marker)))
  }
}

/// One field written by a successful `inject` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WiredField {
  pub field: &'static str,
  pub implementation: Implementation,
}

/// What a successful `inject` call wrote, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WiringReport {
  target: &'static str,
  wired: Vec<WiredField>,
}

impl WiringReport {
  pub fn target(&self) -> &'static str {
    self.target
  }

  pub fn wired(&self) -> &[WiredField] {
    &self.wired
  }

  pub fn len(&self) -> usize {
    self.wired.len()
  }

  pub fn is_empty(&self) -> bool {
    self.wired.is_empty()
  }

  /// The concrete type written into `field`, if it was wired.
  pub fn implementation_of(&self, field: &str) -> Option<TypeId> {
    self
      .wired
      .iter()
      .find(|w| w.field == field)
      .map(|w| w.implementation.type_id())
  }
}

/// Wires the marked fields of injection targets.
///
/// ```
/// use fibre_wire::{Announcer, BindingRegistry, ConsoleLogger, Injector, Logger};
///
/// let mut builder = BindingRegistry::builder();
/// builder.register::<dyn Logger, ConsoleLogger>(|logger| Box::new(logger));
/// let registry = builder.build();
///
/// let mut announcer = Announcer::new();
/// Injector::new(&registry).inject(&mut announcer).unwrap();
/// announcer.run().unwrap();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Injector<R> {
  resolver: R,
}

impl<'r> Injector<&'r BindingRegistry> {
  /// The generic path, resolving `Inject` fields through `registry`.
  pub fn new(registry: &'r BindingRegistry) -> Self {
    Self { resolver: registry }
  }
}

impl Injector<StrategyTable> {
  /// The strategy path, resolving filter markers through the fixed table.
  pub fn strategies() -> Self {
    Self {
      resolver: StrategyTable,
    }
  }
}

impl<R: Resolver> Injector<R> {
  pub fn with_resolver(resolver: R) -> Self {
    Self { resolver }
  }

  /// Wires every field of `target` the resolver has a binding for.
  ///
  /// All bindings are resolved, checked against the declared field type and
  /// instantiated before the first write, so `BindingNotFound`,
  /// `InstantiationFailed` and a declared-type mismatch leave `target`
  /// untouched. Only a `wire` impl that disagrees with its own declarations
  /// can fail after a write. Calling this again replaces the fields with new
  /// instances.
  pub fn inject<T: Injectable>(&self, target: &mut T) -> Result<WiringReport> {
    let target_type = std::any::type_name::<T>();
    let span = tracing::debug_span!("inject", target = target_type);
    let _entered = span.enter();

    let mut pending = Vec::new();
    for slot in T::declared_fields() {
      let binding = match self.resolver.resolve(slot) {
        Ok(Some(binding)) => binding,
        Ok(None) => {
          tracing::trace!(field = slot.name(), marker = ?slot.marker(), "skipped field");
          continue;
        }
        Err(err) => {
          tracing::warn!(field = slot.name(), error = %err, "resolution failed");
          return Err(err);
        }
      };

      let declared = slot.declared().key();
      if binding.provides() != declared {
        let err = InjectionError::field_write_denied(
          slot.declaring_type(),
          slot.name(),
          format!(
            "field expects `{}`, binding provides `{}`",
            declared.name(),
            binding.provides().name()
          ),
        );
        tracing::warn!(field = slot.name(), error = %err, "declared type mismatch");
        return Err(err);
      }

      let dependency = binding.instantiate().map_err(|cause| {
        let err = InjectionError::InstantiationFailed {
          implementation: binding.implementation().name(),
          field: slot.name(),
          cause,
        };
        tracing::warn!(field = slot.name(), error = %err, "instantiation failed");
        err
      })?;
      pending.push((slot, dependency));
    }

    let mut wired = Vec::with_capacity(pending.len());
    for (slot, dependency) in pending {
      let implementation = dependency.implementation();
      target.wire(slot, dependency, WireAccess::new())?;
      tracing::debug!(
        field = slot.name(),
        visibility = ?slot.visibility(),
        implementation = implementation.name(),
        "wired field"
      );
      wired.push(WiredField {
        field: slot.name(),
        implementation,
      });
    }

    Ok(WiringReport {
      target: target_type,
      wired,
    })
  }
}
