use fibre_wire::{
  injectable, Announcer, Filter, FinderError, InjectionError, InvalidConfiguration, Injector,
  Logger, NameFilter, Parameter, ParameterKind, PriceFilter, Product, ProductFinder,
  DEFAULT_PRICE_CEILING, DEFAULT_SEARCH_TEXT,
};
use pretty_assertions::assert_eq;
use std::any::TypeId;

// --- Test Fixtures ---

fn products() -> Vec<Product> {
  vec![
    Product::new("iPhone 13", 999.99, "Phones"),
    Product::new("MacBook Pro", 1999.99, "Computers"),
    Product::new("iPad Air", 599.99, "Tablets"),
  ]
}

fn wired_finder() -> ProductFinder {
  let mut finder = ProductFinder::new();
  Injector::strategies().inject(&mut finder).unwrap();
  finder
}

/// Mixes a strategy field with a generic one.
#[derive(Default)]
struct Storefront {
  search: Option<Box<dyn Filter>>,
  logger: Option<Box<dyn Logger>>,
}

injectable!(Storefront {
  search: FilterByName => contract dyn Filter,
  logger: Inject => contract dyn Logger,
});

/// A price marker on a field that cannot hold a filter.
#[derive(Default)]
struct MislabeledSink {
  search: Option<Box<dyn Filter>>,
  sink: Option<Box<dyn Logger>>,
}

injectable!(MislabeledSink {
  search: FilterByName => contract dyn Filter,
  sink: FilterByPrice => contract dyn Logger,
});

// --- Strategy Injection Tests ---

#[test]
fn test_markers_select_implementations() {
  // Arrange
  let mut finder = ProductFinder::new();

  // Act
  let report = Injector::strategies().inject(&mut finder).unwrap();

  // Assert
  assert_eq!(report.len(), 2);
  assert_eq!(
    report.implementation_of("by_name"),
    Some(TypeId::of::<NameFilter>())
  );
  assert_eq!(
    report.implementation_of("by_price"),
    Some(TypeId::of::<PriceFilter>())
  );
}

#[test]
fn test_strategies_start_with_default_criteria() {
  let finder = wired_finder();

  assert_eq!(
    finder.name_filter().unwrap().criterion(),
    Parameter::Text(DEFAULT_SEARCH_TEXT.to_string())
  );
  assert_eq!(
    finder.price_filter().unwrap().criterion(),
    Parameter::Number(DEFAULT_PRICE_CEILING)
  );
}

#[test]
fn test_default_name_filter_matches_everything() {
  let finder = wired_finder();
  let all = products();

  assert_eq!(finder.name_filter().unwrap().filter(&all), all);
}

#[test]
fn test_inject_fields_are_left_alone_by_strategy_path() {
  // Arrange
  let mut storefront = Storefront::default();

  // Act
  let report = Injector::strategies().inject(&mut storefront).unwrap();

  // Assert
  assert_eq!(report.len(), 1);
  assert!(storefront.search.is_some());
  assert!(storefront.logger.is_none());
}

#[test]
fn test_target_without_strategy_markers_is_not_an_error() {
  let mut announcer = Announcer::new();

  let report = Injector::strategies().inject(&mut announcer).unwrap();

  assert!(report.is_empty());
  assert!(!announcer.is_wired());
}

#[test]
fn test_filter_marker_on_non_filter_field_fails_before_any_write() {
  // Arrange
  let mut target = MislabeledSink::default();

  // Act
  let err = Injector::strategies().inject(&mut target).unwrap_err();

  // Assert
  match err {
    InjectionError::FieldWriteDenied {
      field,
      target: declaring,
      reason,
    } => {
      assert_eq!(field, "sink");
      assert!(declaring.ends_with("MislabeledSink"));
      assert!(reason.contains("Logger"));
      assert!(reason.contains("Filter"));
    }
    other => panic!("unexpected error: {other}"),
  }
  // The name filter resolved fine but was not written.
  assert!(target.search.is_none());
  assert!(target.sink.is_none());
}

#[test]
fn test_each_target_gets_its_own_strategy_instances() {
  // Arrange
  let mut first = wired_finder();
  let second = wired_finder();

  // Act: reconfiguring one finder's filter must not leak into the other.
  first.named(&products(), "Mac").unwrap();

  // Assert
  assert_eq!(
    first.name_filter().unwrap().criterion(),
    Parameter::from("Mac")
  );
  assert_eq!(
    second.name_filter().unwrap().criterion(),
    Parameter::from(DEFAULT_SEARCH_TEXT)
  );
}

// --- Finder Tests ---

#[test]
fn test_finder_by_name() {
  let mut finder = wired_finder();
  let all = products();

  let macs = finder.named(&all, "Mac").unwrap();
  assert_eq!(macs, vec![Product::new("MacBook Pro", 1999.99, "Computers")]);

  let ipx = finder.named(&all, "iP").unwrap();
  assert_eq!(
    ipx,
    vec![
      Product::new("iPhone 13", 999.99, "Phones"),
      Product::new("iPad Air", 599.99, "Tablets"),
    ]
  );
}

#[test]
fn test_finder_by_price() {
  let mut finder = wired_finder();
  let all = products();

  let under_thousand = finder.priced_at_most(&all, 1000.0).unwrap();
  assert_eq!(
    under_thousand,
    vec![
      Product::new("iPhone 13", 999.99, "Phones"),
      Product::new("iPad Air", 599.99, "Tablets"),
    ]
  );

  let under_six_hundred = finder.priced_at_most(&all, 600.0).unwrap();
  assert_eq!(
    under_six_hundred,
    vec![Product::new("iPad Air", 599.99, "Tablets")]
  );
}

#[test]
fn test_unwired_finder_reports_which_field_is_missing() {
  let mut finder = ProductFinder::new();

  let err = finder.named(&products(), "Apple").unwrap_err();

  match err {
    FinderError::Missing(missing) => assert_eq!(missing.field, "by_name"),
    other => panic!("unexpected error: {other}"),
  }
}

#[test]
fn test_price_filter_rejects_text_and_keeps_ceiling() {
  // Arrange
  let mut filter = PriceFilter::new(600.0);

  // Act
  let err = filter.configure(Parameter::from("cheap")).unwrap_err();

  // Assert
  assert_eq!(
    err,
    InvalidConfiguration::WrongKind {
      expected: ParameterKind::Number,
      got: ParameterKind::Text,
    }
  );
  assert_eq!(filter.criterion(), Parameter::Number(600.0));
  assert_eq!(
    err.to_string(),
    "invalid configuration: expected a number parameter, got text"
  );
}

#[test]
fn test_finder_rejects_nan_ceiling_and_keeps_previous_one() {
  // Arrange
  let mut finder = wired_finder();
  let all = products();

  // Act
  let err = finder.priced_at_most(&all, f64::NAN).unwrap_err();

  // Assert
  assert_eq!(
    err,
    FinderError::Configuration(InvalidConfiguration::NotANumber)
  );
  assert_eq!(
    finder.price_filter().unwrap().criterion(),
    Parameter::Number(DEFAULT_PRICE_CEILING)
  );
}
