//! Error types for wiring and for the strategy contract.

use crate::filter::ParameterKind;
use thiserror::Error;

/// Boxed cause carried by [`InjectionError::InstantiationFailed`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while wiring a target. Any of them aborts the `inject` call.
#[derive(Debug, Error)]
pub enum InjectionError {
  #[error("no binding registered for contract `{contract}` (field `{field}` of `{target}`)")]
  BindingNotFound {
    contract: &'static str,
    field: &'static str,
    target: &'static str,
  },

  #[error("failed to instantiate `{implementation}` for field `{field}`: {cause}")]
  InstantiationFailed {
    implementation: &'static str,
    field: &'static str,
    #[source]
    cause: BoxError,
  },

  #[error("write to field `{field}` of `{target}` denied: {reason}")]
  FieldWriteDenied {
    target: &'static str,
    field: &'static str,
    reason: String,
  },
}

impl InjectionError {
  pub(crate) fn field_write_denied(
    target: &'static str,
    field: &'static str,
    reason: impl Into<String>,
  ) -> Self {
    InjectionError::FieldWriteDenied {
      target,
      field,
      reason: reason.into(),
    }
  }
}

/// A strategy rejected the parameter it was configured with.
///
/// The strategy keeps its previous criterion when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidConfiguration {
  #[error("invalid configuration: expected a {expected} parameter, got {got}")]
  WrongKind {
    expected: ParameterKind,
    got: ParameterKind,
  },

  #[error("invalid configuration: price ceiling is NaN")]
  NotANumber,
}

/// A target was used before its field was wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("`{target}` used before field `{field}` was wired")]
pub struct MissingDependency {
  pub target: &'static str,
  pub field: &'static str,
}

/// Errors from [`ProductFinder`](crate::ProductFinder) operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FinderError {
  #[error(transparent)]
  Missing(#[from] MissingDependency),

  #[error(transparent)]
  Configuration(#[from] InvalidConfiguration),
}

/// Errors raised while loading a binding manifest or turning it into a registry.
#[derive(Debug, Error)]
pub enum ManifestError {
  #[error("failed to read manifest: {0}")]
  Read(#[from] std::io::Error),

  #[error("failed to parse manifest: {0}")]
  Parse(#[from] serde_yaml::Error),

  #[error("manifest names unknown contract `{0}`")]
  UnknownContract(String),

  #[error("no implementation `{implementation}` offered for contract `{contract}`")]
  UnknownImplementation {
    contract: String,
    implementation: String,
  },

  #[error("contract `{contract}` already stands for `{registered}`, cannot offer `{offered}`")]
  ContractConflict {
    contract: String,
    registered: &'static str,
    offered: &'static str,
  },
}

/// A specialized `Result` type for wiring operations.
pub type Result<T, E = InjectionError> = std::result::Result<T, E>;
