use std::any::{Any, TypeId};

/// Bound for anything an [`AnyValue`](crate::AnyValue) can hold.
///
/// Implemented for every `'static + Clone + Send + Sync` type, there is nothing to
/// implement by hand. `Clone` is what lets a container be copied without knowing what
/// it holds; `Send + Sync` carry over to the container itself.
pub trait Value: Any + Clone + Send + Sync {}

impl<T> Value for T where T: Any + Clone + Send + Sync {}

/// The erased record owned by a non-empty `AnyValue`.
///
/// `Stored<T>` is the only implementation, so `held_type` identifies the concrete record.
pub(crate) trait Storage: Send + Sync {
    /// Type identity of the stored value, fixed when the record was created
    fn held_type(&self) -> TypeId;

    /// Deep copy into a new record of the same concrete type
    fn clone_storage(&self) -> Box<dyn Storage>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any + Send + Sync>;
}

pub(crate) struct Stored<T> {
    pub(crate) value: T,
}

impl<T: Value> Stored<T> {
    pub(crate) fn boxed(value: T) -> Box<dyn Storage> {
        Box::new(Self { value })
    }
}

impl<T: Value> Storage for Stored<T> {
    fn held_type(&self) -> TypeId {
        TypeId::of::<T>()
    }

    fn clone_storage(&self) -> Box<dyn Storage> {
        Stored::boxed(self.value.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any + Send + Sync> {
        self
    }
}

impl dyn Storage {
    /// Check if the record holds a value of exactly type T
    pub(crate) fn is<T: 'static>(&self) -> bool {
        self.held_type() == TypeId::of::<T>()
    }

    /// Get a reference to the stored value if it is of type T
    pub(crate) fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        if !self.is::<T>() {
            return None;
        }
        self.as_any()
            .downcast_ref::<Stored<T>>()
            .map(|stored| &stored.value)
    }

    /// Get a mutable reference to the stored value if it is of type T
    pub(crate) fn downcast_mut<T: 'static>(&mut self) -> Option<&mut T> {
        if !self.is::<T>() {
            return None;
        }
        self.as_any_mut()
            .downcast_mut::<Stored<T>>()
            .map(|stored| &mut stored.value)
    }

    /// Move the stored value out if it is of type T
    pub(crate) fn into_value<T: 'static>(self: Box<Self>) -> Option<T> {
        self.into_any()
            .downcast::<Stored<T>>()
            .ok()
            .map(|stored| stored.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_type_matches_stored_value() {
        let record = Stored::boxed(42u8);
        assert_eq!(record.held_type(), TypeId::of::<u8>());
        assert!(record.is::<u8>());
        assert!(!record.is::<i32>());
    }

    #[test]
    fn test_clone_storage_is_independent() {
        let mut original = Stored::boxed(vec![1, 2, 3]);
        let copy = original.clone_storage();

        original
            .downcast_mut::<Vec<i32>>()
            .expect("vec record")
            .push(4);

        assert_eq!(copy.held_type(), TypeId::of::<Vec<i32>>());
        assert_eq!(copy.downcast_ref::<Vec<i32>>(), Some(&vec![1, 2, 3]));
        assert_eq!(original.downcast_ref::<Vec<i32>>(), Some(&vec![1, 2, 3, 4]));
    }

    #[test]
    fn test_downcast_ref_exact_type_only() {
        let record = Stored::boxed(7i64);
        assert_eq!(record.downcast_ref::<i64>(), Some(&7));
        assert!(record.downcast_ref::<i32>().is_none());
        assert!(record.downcast_ref::<u64>().is_none());
        // The record wrapper itself is never handed out
        assert!(record.downcast_ref::<Stored<i64>>().is_none());
    }

    #[test]
    fn test_into_value_moves_value_out() {
        let record = Stored::boxed(String::from("moved"));
        assert_eq!(record.into_value::<String>(), Some(String::from("moved")));

        let record = Stored::boxed(String::from("dropped"));
        assert_eq!(record.into_value::<i32>(), None);
    }
}
