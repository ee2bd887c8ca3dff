use crate::error::BadCast;
use crate::storage::{Storage, Stored, Value};
use std::any::{Any, TypeId};
use std::fmt;
use std::mem;

/// A container holding zero or one value of any [`Value`] type.
///
/// The concrete type is captured when a value goes in and only comes back out through a
/// typed accessor, which checks it against the type the caller asks for. A match must be
/// exact: no numeric widening, no trait-object or subtype relationship is considered.
///
/// # Examples
///
/// ```
/// use sovran_any::{AnyValue, BadCast};
///
/// let mut value = AnyValue::from_value(String::from("123"));
/// let copy = value.clone();
///
/// assert_eq!(value.get::<String>()?, "123");
/// assert_eq!(copy.downcast_ref::<String>().map(String::as_str), Some("123"));
///
/// value.set(15i32);
/// assert_eq!(*value.get::<i32>()?, 15);
/// assert!(matches!(value.get::<i64>(), Err(BadCast)));
///
/// // The copy was never touched
/// assert!(copy.is::<String>());
/// # Ok::<(), BadCast>(())
/// ```
#[derive(Default)]
pub struct AnyValue {
    held: Option<Box<dyn Storage>>,
}

impl AnyValue {
    /// Creates an empty container
    pub const fn new() -> Self {
        Self { held: None }
    }

    /// Creates a container holding `value`.
    ///
    /// The stored type is exactly `T`. Passing an `AnyValue` does not wrap it a second
    /// time, the argument container is returned as-is.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_any::AnyValue;
    ///
    /// let value = AnyValue::from_value(42u16);
    /// assert!(value.is::<u16>());
    ///
    /// let same = AnyValue::from_value(value);
    /// assert!(same.is::<u16>());
    /// ```
    pub fn from_value<T: Value>(value: T) -> Self {
        let mut slot = Some(value);
        if let Some(inner) = (&mut slot as &mut dyn Any).downcast_mut::<Option<AnyValue>>() {
            return inner.take().unwrap_or_default();
        }
        match slot {
            Some(value) => Self {
                held: Some(Stored::boxed(value)),
            },
            None => Self::new(),
        }
    }

    /// Replaces the held value with `value`.
    ///
    /// The new record is built before the old one is released. Passing an `AnyValue`
    /// adopts its contents, the same as [`AnyValue::from_value`].
    pub fn set<T: Value>(&mut self, value: T) {
        let mut next = Self::from_value(value);
        self.swap(&mut next);
    }

    /// Constructs a `T` from `args` in the container, discarding the previous value.
    ///
    /// Several constructor arguments travel as a tuple, for any `T: From<(A, B, ..)>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_any::AnyValue;
    ///
    /// let mut value = AnyValue::from_value(15i32);
    /// let text = value.emplace::<String, _>("HI!");
    /// text.push('!');
    ///
    /// assert_eq!(value.downcast_ref::<String>().map(String::as_str), Some("HI!!"));
    /// ```
    pub fn emplace<T, A>(&mut self, args: A) -> &mut T
    where
        T: Value + From<A>,
    {
        self.emplace_with(|| T::from(args))
    }

    /// Constructs a `T` with `f` in the container, discarding the previous value.
    ///
    /// The previous value is released before `f` runs, so a panic in `f` leaves the
    /// container empty.
    pub fn emplace_with<T, F>(&mut self, f: F) -> &mut T
    where
        T: Value,
        F: FnOnce() -> T,
    {
        self.reset();
        let record = self.held.insert(Stored::boxed(f()));
        match record.downcast_mut::<T>() {
            Some(value) => value,
            // A record built from a T always reports T
            None => unreachable!(),
        }
    }

    /// Constructs a `T` with the fallible `f` in the container, discarding the previous value.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `f`; the container is left empty in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_any::AnyValue;
    /// use std::num::ParseIntError;
    ///
    /// let mut value = AnyValue::from_value("old");
    ///
    /// let parsed = value.try_emplace_with(|| "12".parse::<u32>())?;
    /// assert_eq!(*parsed, 12);
    ///
    /// assert!(value.try_emplace_with(|| "twelve".parse::<u32>()).is_err());
    /// assert!(!value.has_value());
    /// # Ok::<(), ParseIntError>(())
    /// ```
    pub fn try_emplace_with<T, E, F>(&mut self, f: F) -> Result<&mut T, E>
    where
        T: Value,
        F: FnOnce() -> Result<T, E>,
    {
        self.reset();
        match f() {
            Ok(value) => Ok(self.emplace_with(|| value)),
            Err(err) => {
                trace!(
                    "in-place construction of {:?} failed, container left empty",
                    TypeId::of::<T>()
                );
                Err(err)
            }
        }
    }

    /// Releases the held value, leaving the container empty
    pub fn reset(&mut self) {
        self.held = None;
    }

    /// Moves the contents out into a new container, leaving this one empty
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Exchanges the contents of two containers
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.held, &mut other.held);
    }

    /// Returns true if the container holds a value
    pub fn has_value(&self) -> bool {
        self.held.is_some()
    }

    /// Returns the type identity of the held value.
    ///
    /// An empty container reports [`empty_type_id`](crate::empty_type_id), which no stored
    /// value can ever have.
    pub fn value_type(&self) -> TypeId {
        self.held
            .as_ref()
            .map_or_else(crate::empty_type_id, |record| record.held_type())
    }

    /// Check if the held value is of exactly type T
    pub fn is<T: 'static>(&self) -> bool {
        self.held.as_ref().is_some_and(|record| record.is::<T>())
    }

    /// Get a reference to the held value if it is of type T.
    ///
    /// Returns `None` when the container is empty or holds another type.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.held.as_ref()?.downcast_ref::<T>()
    }

    /// Get a mutable reference to the held value if it is of type T.
    ///
    /// Returns `None` when the container is empty or holds another type.
    pub fn downcast_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.held.as_mut()?.downcast_mut::<T>()
    }

    /// Moves the held value out if it is of type T.
    ///
    /// # Errors
    ///
    /// Hands the container back unchanged when it is empty or holds another type.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_any::AnyValue;
    ///
    /// let value = AnyValue::from_value(vec![1, 2, 3]);
    ///
    /// let value = value.downcast::<String>().unwrap_err();
    /// assert_eq!(value.downcast::<Vec<i32>>().ok(), Some(vec![1, 2, 3]));
    /// ```
    pub fn downcast<T: 'static>(self) -> Result<T, Self> {
        if !self.is::<T>() {
            return Err(self);
        }
        self.held
            .and_then(|record| record.into_value::<T>())
            .ok_or_else(Self::new)
    }

    /// Get a reference to the held value as type T.
    ///
    /// # Errors
    ///
    /// Returns [`BadCast`] when the container is empty or holds another type.
    pub fn get<T: 'static>(&self) -> Result<&T, BadCast> {
        self.downcast_ref::<T>().ok_or_else(|| self.bad_cast::<T>())
    }

    /// Get a mutable reference to the held value as type T.
    ///
    /// # Errors
    ///
    /// Returns [`BadCast`] when the container is empty or holds another type.
    pub fn get_mut<T: 'static>(&mut self) -> Result<&mut T, BadCast> {
        if !self.is::<T>() {
            return Err(self.bad_cast::<T>());
        }
        self.downcast_mut::<T>().ok_or(BadCast)
    }

    pub(crate) fn bad_cast<T: 'static>(&self) -> BadCast {
        trace!(
            "bad cast: requested {:?}, held {:?}",
            TypeId::of::<T>(),
            self.value_type()
        );
        BadCast
    }
}

impl Clone for AnyValue {
    fn clone(&self) -> Self {
        Self {
            held: self.held.as_ref().map(|record| record.clone_storage()),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        let mut next = source.clone();
        self.swap(&mut next);
    }
}

impl fmt::Debug for AnyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.held {
            Some(record) => f
                .debug_struct("AnyValue")
                .field("type_id", &record.held_type())
                .finish(),
            None => f.write_str("AnyValue(<empty>)"),
        }
    }
}
