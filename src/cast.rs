//! Free-function accessors.
//!
//! Two families, mirroring what callers usually want:
//!
//! - [`any_cast_ref`] and [`any_cast_mut`] never fail loudly. They take an optional
//!   container and hand back the held value only when its type is exactly `T`.
//! - [`any_cast`] and [`any_cast_into`] return [`BadCast`] on a mismatch. The first copies
//!   the value out, the second moves it out of a consumed container. Borrowing variants
//!   live on the container as [`AnyValue::get`] and [`AnyValue::get_mut`].

use crate::any_value::AnyValue;
use crate::error::BadCast;

/// Get a reference to the held value if the container exists and holds exactly a `T`.
///
/// # Examples
///
/// ```
/// use sovran_any::{any_cast_ref, AnyValue};
///
/// let value = AnyValue::from_value(15i32);
///
/// assert_eq!(any_cast_ref::<i32>(Some(&value)), Some(&15));
/// assert_eq!(any_cast_ref::<i64>(Some(&value)), None);
/// assert_eq!(any_cast_ref::<i32>(None), None);
/// ```
pub fn any_cast_ref<T: 'static>(any: Option<&AnyValue>) -> Option<&T> {
    any?.downcast_ref::<T>()
}

/// Get a mutable reference to the held value if the container exists and holds exactly a `T`.
pub fn any_cast_mut<T: 'static>(any: Option<&mut AnyValue>) -> Option<&mut T> {
    any?.downcast_mut::<T>()
}

/// Copies the held value out as a `T`.
///
/// # Errors
///
/// Returns [`BadCast`] when the container is empty or holds another type.
///
/// # Examples
///
/// ```
/// use sovran_any::{any_cast, AnyValue, BadCast};
///
/// let value = AnyValue::new();
///
/// match any_cast::<char>(&value) {
///     Ok(c) => println!("held {}", c),
///     Err(e) => assert_eq!(e.to_string(), "bad any cast"),
/// }
/// ```
pub fn any_cast<T: Clone + 'static>(any: &AnyValue) -> Result<T, BadCast> {
    any.get::<T>().cloned()
}

/// Moves the held value out of `any` as a `T`.
///
/// The container is dropped on a mismatch; use [`AnyValue::downcast`] to get it back instead.
///
/// # Errors
///
/// Returns [`BadCast`] when the container is empty or holds another type.
pub fn any_cast_into<T: 'static>(any: AnyValue) -> Result<T, BadCast> {
    any.downcast::<T>().map_err(|any| any.bad_cast::<T>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;
    use std::sync::Arc;

    #[test]
    fn test_any_cast_ref_exact_match() {
        let value = AnyValue::from_value(String::from("123"));
        assert_eq!(
            any_cast_ref::<String>(Some(&value)).map(String::as_str),
            Some("123")
        );
        assert!(any_cast_ref::<&str>(Some(&value)).is_none());
    }

    #[test]
    fn test_any_cast_ref_no_numeric_conversion() {
        let value = AnyValue::from_value(1u8);
        assert!(any_cast_ref::<u16>(Some(&value)).is_none());
        assert!(any_cast_ref::<i8>(Some(&value)).is_none());
        assert!(any_cast_ref::<u8>(Some(&value)).is_some());
    }

    #[test]
    fn test_any_cast_ref_no_trait_object_match() {
        let shared: Arc<dyn fmt::Debug + Send + Sync> = Arc::new(5u32);
        let value = AnyValue::from_value(shared);
        assert!(any_cast_ref::<u32>(Some(&value)).is_none());
        assert!(any_cast_ref::<Arc<u32>>(Some(&value)).is_none());
        assert!(any_cast_ref::<Arc<dyn fmt::Debug + Send + Sync>>(Some(&value)).is_some());
    }

    #[test]
    fn test_any_cast_ref_empty_and_missing() {
        let empty = AnyValue::new();
        assert!(any_cast_ref::<()>(Some(&empty)).is_none());
        assert!(any_cast_ref::<()>(None).is_none());
    }

    #[test]
    fn test_any_cast_mut() {
        let mut value = AnyValue::from_value(vec![1u8]);
        if let Some(bytes) = any_cast_mut::<Vec<u8>>(Some(&mut value)) {
            bytes.push(2);
        }
        assert_eq!(value.downcast_ref::<Vec<u8>>(), Some(&vec![1, 2]));
        assert!(any_cast_mut::<Vec<i8>>(Some(&mut value)).is_none());
        assert!(any_cast_mut::<Vec<u8>>(None).is_none());
    }

    #[test]
    fn test_any_cast_copies() -> Result<(), BadCast> {
        let mut value = AnyValue::from_value(String::from("first"));
        let mut copy = any_cast::<String>(&value)?;
        copy.push_str(" changed");

        assert_eq!(value.get::<String>()?, "first");

        value.set(15i32);
        assert_eq!(any_cast::<i32>(&value)?, 15);
        Ok(())
    }

    #[test]
    fn test_any_cast_mismatch_and_empty() {
        let value = AnyValue::from_value(15i32);
        assert_eq!(any_cast::<u32>(&value), Err(BadCast));
        assert_eq!(any_cast::<char>(&AnyValue::new()), Err(BadCast));
    }

    #[test]
    fn test_any_cast_into() {
        let value = AnyValue::from_value(String::from("moved"));
        assert_eq!(any_cast_into::<String>(value), Ok(String::from("moved")));

        let value = AnyValue::from_value(String::from("dropped"));
        assert_eq!(any_cast_into::<i32>(value), Err(BadCast));
        assert_eq!(any_cast_into::<i32>(AnyValue::new()), Err(BadCast));
    }
}
