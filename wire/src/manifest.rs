//! Binding manifests: choosing implementations by name from a YAML document.
//!
//! ```yaml
//! bindings:
//!   logger: console
//! ```

use crate::core::{Binding, ContractKey, Instantiate};
use crate::error::ManifestError;
use crate::logger::{ConsoleLogger, Logger};
use crate::registry::{BindingRegistry, RegistryBuilder};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Contract name → implementation name, as read from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BindingManifest {
  #[serde(default)]
  pub bindings: BTreeMap<String, String>,
}

impl BindingManifest {
  pub fn from_yaml_str(source: &str) -> Result<Self, ManifestError> {
    Ok(serde_yaml::from_str(source)?)
  }

  pub fn from_path(path: &Path) -> Result<Self, ManifestError> {
    let file = File::open(path)?;
    let manifest = serde_yaml::from_reader(BufReader::new(file))?;
    tracing::debug!(path = %path.display(), "loaded binding manifest");
    Ok(manifest)
  }

  /// Registers, for every entry, the implementation `catalog` offers under
  /// that name.
  pub fn build_registry(
    &self,
    catalog: &ImplementationCatalog,
  ) -> Result<BindingRegistry, ManifestError> {
    let mut builder = RegistryBuilder::new();
    for (contract, implementation) in &self.bindings {
      let offers = catalog
        .contracts
        .get(contract)
        .ok_or_else(|| ManifestError::UnknownContract(contract.clone()))?;
      let binding = offers.implementations.get(implementation).ok_or_else(|| {
        ManifestError::UnknownImplementation {
          contract: contract.clone(),
          implementation: implementation.clone(),
        }
      })?;
      builder.insert(offers.key, binding.clone());
    }
    Ok(builder.build())
  }
}

struct Offers {
  key: ContractKey,
  implementations: HashMap<String, Binding>,
}

impl Offers {
  fn of<C: ?Sized + 'static>() -> Self {
    Self {
      key: ContractKey::of::<C>(),
      implementations: HashMap::new(),
    }
  }
}

/// Named candidate implementations per named contract.
#[derive(Default)]
pub struct ImplementationCatalog {
  contracts: HashMap<String, Offers>,
}

impl ImplementationCatalog {
  pub fn new() -> Self {
    Self::default()
  }

  /// The implementations shipped with this crate.
  pub fn standard() -> Self {
    let mut logger = Offers::of::<dyn Logger>();
    logger.implementations.insert(
      "console".to_owned(),
      Binding::contract::<dyn Logger, ConsoleLogger>(|logger| Box::new(logger)),
    );
    Self {
      contracts: HashMap::from([("logger".to_owned(), logger)]),
    }
  }

  /// Offers `I` as `implementation` of the contract `C` named `contract`.
  ///
  /// The first offer under a contract name fixes which contract type the
  /// name stands for; offering a different contract type under it later is
  /// a [`ManifestError::ContractConflict`].
  pub fn offer<C, I>(
    &mut self,
    contract: &str,
    implementation: &str,
    upcast: impl Fn(I) -> Box<C> + Send + Sync + 'static,
  ) -> Result<&mut Self, ManifestError>
  where
    C: ?Sized + 'static,
    I: Instantiate,
  {
    let offers = self
      .contracts
      .entry(contract.to_owned())
      .or_insert_with(Offers::of::<C>);
    let offered = ContractKey::of::<C>();
    if offers.key != offered {
      return Err(ManifestError::ContractConflict {
        contract: contract.to_owned(),
        registered: offers.key.name(),
        offered: offered.name(),
      });
    }
    offers
      .implementations
      .insert(implementation.to_owned(), Binding::contract::<C, I>(upcast));
    Ok(self)
  }

  pub fn contains(&self, contract: &str, implementation: &str) -> bool {
    self
      .contracts
      .get(contract)
      .is_some_and(|offers| offers.implementations.contains_key(implementation))
  }
}
