//! The `Filter` strategy contract and its two implementations.

use crate::error::InvalidConfiguration;
use crate::product::Product;
use std::fmt;

/// The criterion handed to [`Filter::configure`].
#[derive(Debug, Clone, PartialEq)]
pub enum Parameter {
  Text(String),
  Number(f64),
}

impl Parameter {
  pub fn kind(&self) -> ParameterKind {
    match self {
      Parameter::Text(_) => ParameterKind::Text,
      Parameter::Number(_) => ParameterKind::Number,
    }
  }
}

impl From<&str> for Parameter {
  fn from(text: &str) -> Self {
    Parameter::Text(text.to_owned())
  }
}

impl From<String> for Parameter {
  fn from(text: String) -> Self {
    Parameter::Text(text)
  }
}

impl From<f64> for Parameter {
  fn from(number: f64) -> Self {
    Parameter::Number(number)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
  Text,
  Number,
}

impl fmt::Display for ParameterKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ParameterKind::Text => f.write_str("text"),
      ParameterKind::Number => f.write_str("number"),
    }
  }
}

/// A configurable selection over a list of products.
pub trait Filter: Send + Sync {
  /// Replaces the matching criterion.
  ///
  /// A parameter of the wrong kind, or one the strategy cannot use, is
  /// rejected and the previous criterion is kept.
  fn configure(&mut self, parameter: Parameter) -> Result<(), InvalidConfiguration>;

  /// Returns the matching products in input order. The input is untouched.
  fn filter(&self, products: &[Product]) -> Vec<Product>;

  fn criterion(&self) -> Parameter;
}

/// Case-insensitive substring match on the product name.
#[derive(Debug, Clone)]
pub struct NameFilter {
  text: String,
  needle: String,
}

impl NameFilter {
  pub fn new(text: impl Into<String>) -> Self {
    let text = text.into();
    let needle = text.to_lowercase();
    Self { text, needle }
  }
}

impl Filter for NameFilter {
  fn configure(&mut self, parameter: Parameter) -> Result<(), InvalidConfiguration> {
    match parameter {
      Parameter::Text(text) => {
        *self = NameFilter::new(text);
        Ok(())
      }
      other => Err(InvalidConfiguration::WrongKind {
        expected: ParameterKind::Text,
        got: other.kind(),
      }),
    }
  }

  fn filter(&self, products: &[Product]) -> Vec<Product> {
    products
      .iter()
      .filter(|p| p.name().to_lowercase().contains(&self.needle))
      .cloned()
      .collect()
  }

  fn criterion(&self) -> Parameter {
    Parameter::Text(self.text.clone())
  }
}

/// Inclusive upper bound on the product price.
///
/// An infinite ceiling keeps every product. A NaN ceiling would keep none
/// and is rejected by `configure`.
#[derive(Debug, Clone, Copy)]
pub struct PriceFilter {
  ceiling: f64,
}

impl PriceFilter {
  pub fn new(ceiling: f64) -> Self {
    Self { ceiling }
  }
}

impl Filter for PriceFilter {
  fn configure(&mut self, parameter: Parameter) -> Result<(), InvalidConfiguration> {
    match parameter {
      Parameter::Number(ceiling) if ceiling.is_nan() => Err(InvalidConfiguration::NotANumber),
      Parameter::Number(ceiling) => {
        self.ceiling = ceiling;
        Ok(())
      }
      other => Err(InvalidConfiguration::WrongKind {
        expected: ParameterKind::Number,
        got: other.kind(),
      }),
    }
  }

  fn filter(&self, products: &[Product]) -> Vec<Product> {
    products
      .iter()
      .filter(|p| p.price() <= self.ceiling)
      .cloned()
      .collect()
  }

  fn criterion(&self) -> Parameter {
    Parameter::Number(self.ceiling)
  }
}
