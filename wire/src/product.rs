//! Products and the `ProductFinder` target that receives filter strategies.

use crate::error::{FinderError, MissingDependency};
use crate::filter::{Filter, Parameter};
use crate::injectable;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
  name: String,
  price: f64,
  category: String,
}

impl Product {
  pub fn new(name: impl Into<String>, price: f64, category: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      price,
      category: category.into(),
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn price(&self) -> f64 {
    self.price
  }

  pub fn category(&self) -> &str {
    &self.category
  }
}

impl fmt::Display for Product {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} - ${:.2} ({})", self.name, self.price, self.category)
  }
}

/// Searches product lists with two injected filter strategies.
///
/// Both fields start unwired; run the strategy injector before use.
#[derive(Default)]
pub struct ProductFinder {
  by_name: Option<Box<dyn Filter>>,
  by_price: Option<Box<dyn Filter>>,
}

injectable!(ProductFinder {
  by_name: FilterByName => contract dyn Filter,
  by_price: FilterByPrice => contract dyn Filter,
});

impl ProductFinder {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn name_filter(&self) -> Option<&dyn Filter> {
    self.by_name.as_deref()
  }

  pub fn price_filter(&self) -> Option<&dyn Filter> {
    self.by_price.as_deref()
  }

  /// Products whose name contains `text`, ignoring case.
  pub fn named(&mut self, products: &[Product], text: &str) -> Result<Vec<Product>, FinderError> {
    let filter = Self::require(&mut self.by_name, "by_name")?;
    filter.configure(Parameter::from(text))?;
    Ok(filter.filter(products))
  }

  /// Products priced at or below `ceiling`.
  pub fn priced_at_most(
    &mut self,
    products: &[Product],
    ceiling: f64,
  ) -> Result<Vec<Product>, FinderError> {
    let filter = Self::require(&mut self.by_price, "by_price")?;
    filter.configure(Parameter::from(ceiling))?;
    Ok(filter.filter(products))
  }

  fn require<'a>(
    slot: &'a mut Option<Box<dyn Filter>>,
    field: &'static str,
  ) -> Result<&'a mut Box<dyn Filter>, MissingDependency> {
    slot.as_mut().ok_or(MissingDependency {
      target: std::any::type_name::<Self>(),
      field,
    })
  }
}
