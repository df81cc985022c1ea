//! Public macros for declaring injection targets.

/// Implements [`Injectable`](crate::Injectable) for a struct.
///
/// Each entry names a field, its marker and its declared type. Contract
/// fields must be `Option<Box<dyn Trait>>`, concrete fields `Option<Type>`.
/// A leading `pub` records the field as public; it does not change the
/// struct itself.
///
/// # Examples
///
/// ```
/// use fibre_wire::{injectable, instantiate_default, BindingRegistry, Injector};
///
/// trait Clock { fn now(&self) -> u64; }
///
/// #[derive(Default)]
/// struct FixedClock;
/// impl Clock for FixedClock { fn now(&self) -> u64 { 42 } }
/// instantiate_default!(FixedClock);
///
/// #[derive(Default)]
/// struct Scheduler {
///   clock: Option<Box<dyn Clock>>,
/// }
///
/// injectable!(Scheduler {
///   clock: Inject => contract dyn Clock,
/// });
///
/// let mut builder = BindingRegistry::builder();
/// builder.register::<dyn Clock, FixedClock>(|clock| Box::new(clock));
/// let registry = builder.build();
///
/// let mut scheduler = Scheduler::default();
/// Injector::new(&registry).inject(&mut scheduler).unwrap();
/// assert_eq!(scheduler.clock.unwrap().now(), 42);
/// ```
#[macro_export]
macro_rules! injectable {
  (@slot $target:ty, $field:ident, contract $decl:ty) => {
    $crate::FieldSlot::contract::<$target, $decl>(stringify!($field))
  };
  (@slot $target:ty, $field:ident, concrete $decl:ty) => {
    $crate::FieldSlot::concrete::<$target, $decl>(stringify!($field))
  };

  (@take contract $decl:ty, $dependency:ident, $slot:ident) => {
    $dependency.into_contract::<$decl>($slot)
  };
  (@take concrete $decl:ty, $dependency:ident, $slot:ident) => {
    $dependency.into_concrete::<$decl>($slot)
  };

  ($target:ty {
    $( $vis:vis $field:ident : $marker:ident => $kind:ident $decl:ty ),* $(,)?
  }) => {
    impl $crate::Injectable for $target {
      fn declared_fields() -> &'static [$crate::FieldSlot] {
        static FIELDS: $crate::__private::Lazy<::std::vec::Vec<$crate::FieldSlot>> =
          $crate::__private::Lazy::new(|| {
            ::std::vec![
              $(
                $crate::injectable!(@slot $target, $field, $kind $decl)
                  .marked($crate::Marker::$marker)
                  .with_visibility($crate::Visibility::from_token(stringify!($vis)))
              ),*
            ]
          });
        &FIELDS
      }

      fn wire(
        &mut self,
        slot: &$crate::FieldSlot,
        dependency: $crate::Dependency,
        _access: $crate::WireAccess,
      ) -> ::std::result::Result<(), $crate::InjectionError> {
        match slot.name() {
          $(
            stringify!($field) => {
              self.$field = ::std::option::Option::Some(
                $crate::injectable!(@take $kind $decl, dependency, slot)?,
              );
              Ok(())
            }
          )*
          _ => Err($crate::undeclared_field::<Self>(slot)),
        }
      }
    }
  };
}

/// Implements [`Instantiate`](crate::Instantiate) through `Default` for each
/// listed type.
#[macro_export]
macro_rules! instantiate_default {
  ($($type:ty),+ $(,)?) => {
    $(
      impl $crate::Instantiate for $type {
        fn instantiate() -> ::std::result::Result<Self, $crate::BoxError> {
          Ok(<Self as ::std::default::Default>::default())
        }
      }
    )+
  };
}
