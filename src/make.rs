use crate::any_value::AnyValue;
use crate::storage::Value;

/// Creates a container holding a `T` built from `args`.
///
/// Shorthand for [`AnyValue::new`] followed by [`AnyValue::emplace`].
///
/// # Examples
///
/// ```
/// use sovran_any::make_any;
///
/// let value = make_any::<String, _>("HI!");
/// assert!(value.is::<String>());
///
/// let value = make_any::<f64, _>(2u8);
/// assert_eq!(value.downcast_ref::<f64>(), Some(&2.0));
/// ```
pub fn make_any<T, A>(args: A) -> AnyValue
where
    T: Value + From<A>,
{
    let mut any = AnyValue::new();
    any.emplace::<T, A>(args);
    any
}

/// Creates a container holding the `T` returned by `f`
pub fn make_any_with<T, F>(f: F) -> AnyValue
where
    T: Value,
    F: FnOnce() -> T,
{
    let mut any = AnyValue::new();
    any.emplace_with(f);
    any
}

/// Creates a container holding a `T` collected from `items`.
///
/// # Examples
///
/// ```
/// use sovran_any::make_any_from_iter;
/// use std::collections::BTreeSet;
///
/// let value = make_any_from_iter::<BTreeSet<u8>, _>([3, 1, 2, 1]);
/// let set = value.downcast_ref::<BTreeSet<u8>>().unwrap();
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
pub fn make_any_from_iter<T, I>(items: I) -> AnyValue
where
    T: Value + FromIterator<I::Item>,
    I: IntoIterator,
{
    make_any_with(|| items.into_iter().collect::<T>())
}
