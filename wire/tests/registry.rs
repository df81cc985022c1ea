use fibre_wire::{
  instantiate_default, Announcer, BindingRegistry, ConsoleLogger, ContractKey, FieldSlot,
  InjectionError, Injector, Logger, Marker,
};
use std::any::TypeId;
use std::thread;

// --- Test Fixtures ---

#[derive(Default)]
struct QuietLogger;
instantiate_default!(QuietLogger);

impl Logger for QuietLogger {
  fn log(&self, _message: &str) {}
}

fn assert_send_sync<T: Send + Sync>() {}

// --- Registry Tests ---

#[test]
fn test_lookup_names_contract_field_and_target() {
  // Arrange
  let mut builder = BindingRegistry::builder();
  builder.register::<dyn Logger, QuietLogger>(|logger| Box::new(logger));
  let registry = builder.build();
  let slot = FieldSlot::contract::<Announcer, dyn Logger>("logger").marked(Marker::Inject);
  let missing = FieldSlot::contract::<Announcer, dyn Send>("courier").marked(Marker::Inject);

  // Act
  let found = registry.lookup(&ContractKey::of::<dyn Logger>(), &slot).unwrap();
  let err = registry
    .lookup(&ContractKey::of::<dyn Send>(), &missing)
    .unwrap_err();

  // Assert
  assert_eq!(found.implementation().type_id(), TypeId::of::<QuietLogger>());
  assert_eq!(found.provides(), ContractKey::of::<dyn Logger>());
  match err {
    InjectionError::BindingNotFound {
      contract,
      field,
      target,
    } => {
      assert!(contract.contains("Send"));
      assert_eq!(field, "courier");
      assert!(target.ends_with("Announcer"));
    }
    other => panic!("unexpected error: {other}"),
  }
}

#[test]
fn test_empty_registry() {
  let registry = BindingRegistry::builder().build();

  assert!(registry.is_empty());
  assert!(!registry.contains::<dyn Logger>());
  assert!(registry.get::<dyn Logger>().is_none());
}

#[test]
fn test_registered_contract_is_found() {
  let mut builder = BindingRegistry::builder();
  builder.register::<dyn Logger, ConsoleLogger>(|logger| Box::new(logger));
  let registry = builder.build();

  assert_eq!(registry.len(), 1);
  let binding = registry.get::<dyn Logger>().unwrap();
  assert_eq!(binding.implementation().type_id(), TypeId::of::<ConsoleLogger>());
}

#[test]
fn test_last_registration_wins() {
  // Arrange
  let mut builder = BindingRegistry::builder();
  builder
    .register::<dyn Logger, ConsoleLogger>(|logger| Box::new(logger))
    .register::<dyn Logger, QuietLogger>(|logger| Box::new(logger));
  let registry = builder.build();

  // Act
  let mut announcer = Announcer::new();
  let report = Injector::new(&registry).inject(&mut announcer).unwrap();

  // Assert
  assert_eq!(registry.len(), 1);
  assert_eq!(
    report.implementation_of("logger"),
    Some(TypeId::of::<QuietLogger>())
  );
}

#[test]
fn test_contract_keys_compare_by_type() {
  assert_eq!(ContractKey::of::<dyn Logger>(), ContractKey::of::<dyn Logger>());
  assert_ne!(ContractKey::of::<dyn Logger>(), ContractKey::of::<ConsoleLogger>());
  assert!(ContractKey::of::<dyn Logger>().name().contains("Logger"));
}

#[test]
fn test_registry_is_shared_across_threads() {
  assert_send_sync::<BindingRegistry>();

  // Arrange
  let mut builder = BindingRegistry::builder();
  builder.register::<dyn Logger, QuietLogger>(|logger| Box::new(logger));
  let registry = builder.build();

  // Act: every thread wires its own target against the same registry.
  let wired = thread::scope(|s| {
    let handles: Vec<_> = (0..8)
      .map(|_| {
        s.spawn(|| {
          let mut announcer = Announcer::new();
          Injector::new(&registry).inject(&mut announcer).unwrap();
          announcer.is_wired()
        })
      })
      .collect();
    handles.into_iter().filter_map(|h| h.join().ok()).filter(|w| *w).count()
  });

  // Assert
  assert_eq!(wired, 8);
}
