//! Core data structures shared by the registry, the slots and the engine.

use crate::error::{BoxError, InjectionError};
use crate::slot::FieldSlot;
use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A type constructible with no arguments.
///
/// This is the zero-argument constructor the engine calls for every binding.
/// Returning an error aborts the surrounding `inject` call with
/// [`InjectionError::InstantiationFailed`].
///
/// Types whose constructor is `Default` can use
/// [`instantiate_default!`](crate::instantiate_default).
pub trait Instantiate: Sized + 'static {
  fn instantiate() -> Result<Self, BoxError>;
}

/// Identity of a contract (usually a `dyn Trait`) or of a concrete type.
///
/// Equality and hashing only look at the `TypeId`; the name is kept for
/// error messages.
#[derive(Clone, Copy)]
pub struct ContractKey {
  type_id: TypeId,
  name: &'static str,
}

impl ContractKey {
  pub fn of<C: ?Sized + Any>() -> Self {
    Self {
      type_id: TypeId::of::<C>(),
      name: type_name::<C>(),
    }
  }

  pub fn type_id(&self) -> TypeId {
    self.type_id
  }

  pub fn name(&self) -> &'static str {
    self.name
  }
}

impl PartialEq for ContractKey {
  fn eq(&self, other: &Self) -> bool {
    self.type_id == other.type_id
  }
}

impl Eq for ContractKey {}

impl Hash for ContractKey {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.type_id.hash(state);
  }
}

impl fmt::Debug for ContractKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Contract({})", self.name)
  }
}

/// Identity of the concrete type a binding produces.
pub type Implementation = ContractKey;

type Factory = dyn Fn() -> Result<Box<dyn Any>, BoxError> + Send + Sync;

/// A producible implementation: its identity plus a zero-argument factory.
///
/// Cloning is cheap; the factory is shared.
#[derive(Clone)]
pub struct Binding {
  provides: ContractKey,
  implementation: Implementation,
  factory: Arc<Factory>,
}

impl Binding {
  /// Binds contract `C` to implementation `I`.
  ///
  /// `upcast` turns the freshly constructed `I` into the contract's trait
  /// object, e.g. `|logger| Box::new(logger)`.
  pub fn contract<C, I>(upcast: impl Fn(I) -> Box<C> + Send + Sync + 'static) -> Self
  where
    C: ?Sized + 'static,
    I: Instantiate,
  {
    Self {
      provides: ContractKey::of::<C>(),
      implementation: Implementation::of::<I>(),
      factory: Arc::new(move || -> Result<Box<dyn Any>, BoxError> {
        let instance = I::instantiate()?;
        Ok(Box::new(upcast(instance)))
      }),
    }
  }

  /// Binds contract `C` to implementation `I` built by `build` instead of
  /// [`Instantiate`]. Used for strategies whose defaults are fixed.
  pub fn contract_with<C, I>(build: fn() -> Box<C>) -> Self
  where
    C: ?Sized + 'static,
    I: 'static,
  {
    Self {
      provides: ContractKey::of::<C>(),
      implementation: Implementation::of::<I>(),
      factory: Arc::new(move || -> Result<Box<dyn Any>, BoxError> { Ok(Box::new(build())) }),
    }
  }

  /// A concrete type that is its own implementation.
  pub fn concrete<T: Instantiate>() -> Self {
    Self {
      provides: ContractKey::of::<T>(),
      implementation: Implementation::of::<T>(),
      factory: Arc::new(|| -> Result<Box<dyn Any>, BoxError> {
        Ok(Box::new(T::instantiate()?))
      }),
    }
  }

  /// The contract (or concrete type) the produced value is typed as.
  pub fn provides(&self) -> ContractKey {
    self.provides
  }

  pub fn implementation(&self) -> Implementation {
    self.implementation
  }

  /// Runs the factory. Every call yields a new instance.
  pub fn instantiate(&self) -> Result<Dependency, BoxError> {
    let value = (self.factory)()?;
    Ok(Dependency {
      implementation: self.implementation,
      value,
    })
  }
}

impl fmt::Debug for Binding {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Binding({})", self.implementation.name())
  }
}

/// A constructed dependency on its way into a field.
pub struct Dependency {
  implementation: Implementation,
  value: Box<dyn Any>,
}

impl Dependency {
  pub fn implementation(&self) -> Implementation {
    self.implementation
  }

  /// Unwraps a dependency produced for contract `C`.
  pub fn into_contract<C: ?Sized + 'static>(
    self,
    slot: &FieldSlot,
  ) -> Result<Box<C>, InjectionError> {
    let implementation = self.implementation;
    self
      .value
      .downcast::<Box<C>>()
      .map(|boxed| *boxed)
      .map_err(|_| type_mismatch(slot, type_name::<C>(), implementation))
  }

  /// Unwraps a dependency produced for concrete type `T`.
  pub fn into_concrete<T: 'static>(self, slot: &FieldSlot) -> Result<T, InjectionError> {
    let implementation = self.implementation;
    self
      .value
      .downcast::<T>()
      .map(|boxed| *boxed)
      .map_err(|_| type_mismatch(slot, type_name::<T>(), implementation))
  }
}

impl fmt::Debug for Dependency {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Dependency({})", self.implementation.name())
  }
}

fn type_mismatch(slot: &FieldSlot, expected: &str, got: Implementation) -> InjectionError {
  InjectionError::field_write_denied(
    slot.declaring_type(),
    slot.name(),
    format!("field expects `{}`, got `{}`", expected, got.name()),
  )
}
