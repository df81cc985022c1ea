use fibre_wire::{Announcer, BindingManifest, ImplementationCatalog, Injector};

const MANIFEST: &str = "
bindings:
  logger: console
";

fn main() {
  // Pick implementations by name instead of hard-coding them at startup.
  let manifest = BindingManifest::from_yaml_str(MANIFEST).expect("manifest parses");
  let registry = manifest
    .build_registry(&ImplementationCatalog::standard())
    .expect("every name is offered");

  let mut announcer = Announcer::new();
  Injector::new(&registry)
    .inject(&mut announcer)
    .expect("logger contract is bound");
  announcer
    .announce("wired from a manifest")
    .expect("announcer was wired");
}
