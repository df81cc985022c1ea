use fibre_wire::{Injector, Product, ProductFinder};
use tracing_subscriber::EnvFilter;

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let products = vec![
    Product::new("iPhone 13", 999.99, "Phones"),
    Product::new("MacBook Pro", 1999.99, "Computers"),
    Product::new("iPad Air", 599.99, "Tablets"),
  ];

  // The strategy path needs no registry: each marker names its filter.
  let mut finder = ProductFinder::new();
  Injector::strategies()
    .inject(&mut finder)
    .expect("strategy table covers both markers");

  println!("Name contains \"iP\":");
  for product in finder.named(&products, "iP").expect("finder is wired") {
    println!("  {}", product);
  }

  println!("Price at most 1000.00:");
  for product in finder.priced_at_most(&products, 1000.0).expect("finder is wired") {
    println!("  {}", product);
  }
}
