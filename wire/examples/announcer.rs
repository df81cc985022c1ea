use fibre_wire::{Announcer, BindingRegistry, ConsoleLogger, Injector, Logger};
use tracing_subscriber::EnvFilter;

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  // --- Registration ---

  // Bind the `dyn Logger` contract to the console implementation, then freeze.
  let mut builder = BindingRegistry::builder();
  builder.register::<dyn Logger, ConsoleLogger>(|logger| Box::new(logger));
  let registry = builder.build();

  // --- Wiring ---

  // The announcer never builds its own logger; the injector hands it one.
  let mut announcer = Announcer::new();
  let report = Injector::new(&registry)
    .inject(&mut announcer)
    .expect("logger contract is bound");

  for wired in report.wired() {
    println!("wired `{}` with {}", wired.field, wired.implementation.name());
  }

  // --- Usage ---
  announcer.run().expect("announcer was wired");
}
