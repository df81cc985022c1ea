use fibre_wire::{Announcer, BindingRegistry, InjectionError, Injector};

fn main() {
  // --- Injecting with a registry that lacks the logger binding ---
  println!("Attempting to wire an Announcer against an empty registry...");

  let registry = BindingRegistry::builder().build();
  let mut announcer = Announcer::new();

  match Injector::new(&registry).inject(&mut announcer) {
    Err(InjectionError::BindingNotFound { contract, field, .. }) => {
      println!("Correctly failed: no binding for `{}` (field `{}`).", contract, field)
    }
    other => panic!("Expected BindingNotFound, got {:?}", other),
  }

  // --- Using the unwired component ---
  println!("\nNow using the component that was never wired...");

  match announcer.run() {
    Ok(()) => panic!("An unwired announcer should not run!"),
    Err(missing) => println!("Correctly received: {}", missing),
  }
}
