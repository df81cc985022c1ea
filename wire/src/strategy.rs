//! The fixed marker→implementation table of the strategy path.

use crate::core::Binding;
use crate::filter::{Filter, NameFilter, PriceFilter};
use crate::slot::Marker;

/// Search text a freshly injected [`NameFilter`] starts with.
pub const DEFAULT_SEARCH_TEXT: &str = "";
/// Ceiling a freshly injected [`PriceFilter`] starts with.
pub const DEFAULT_PRICE_CEILING: f64 = 1000.0;

/// Selects a filter implementation by the marker on the field.
///
/// No registry is consulted. Markers without an entry, including
/// [`Marker::Inject`], resolve to nothing and the field is left as it is.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrategyTable;

impl StrategyTable {
  pub fn entry(&self, marker: Marker) -> Option<Binding> {
    match marker {
      Marker::FilterByName => Some(Binding::contract_with::<dyn Filter, NameFilter>(|| {
        Box::new(NameFilter::new(DEFAULT_SEARCH_TEXT))
      })),
      Marker::FilterByPrice => Some(Binding::contract_with::<dyn Filter, PriceFilter>(|| {
        Box::new(PriceFilter::new(DEFAULT_PRICE_CEILING))
      })),
      Marker::Inject => None,
    }
  }
}
