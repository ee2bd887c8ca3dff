//! # sovran-any
//!
//! A type-erased value container with checked, exact-type retrieval.
//!
//! `sovran-any` provides [`AnyValue`], a container that holds zero or one value of any
//! cloneable type. The concrete type is decided at runtime when a value goes in, and the
//! caller recovers it later by asking for a specific type. The request only succeeds when
//! the stored type is exactly the requested one.
//!
//! ## Key Features
//!
//! - **Type-safe**: Every accessor compares type identities before handing out a value
//! - **Value semantics**: Cloning a container deep-copies whatever it holds
//! - **Two failure styles**: `Option` accessors that never fail loudly, and `Result`
//!   accessors that report a [`BadCast`]
//! - **Strong guarantee**: Assignments build the new contents before releasing the old
//! - **No macros**: Pure runtime solution without complex macro magic
//!
//! ## Usage Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use sovran_any::{any_cast, AnyValue, BadCast};
//!
//! fn main() -> Result<(), BadCast> {
//!     // Store a string and copy the container
//!     let x = AnyValue::from_value("123");
//!     let mut y = x.clone();
//!
//!     println!("{} {}", any_cast::<&str>(&x)?, any_cast::<&str>(&y)?);
//!
//!     // Replace the copy's contents with a value of another type
//!     y.set(15);
//!     println!("{}", any_cast::<i32>(&y)?);
//!
//!     // The original still holds its string
//!     assert_eq!(any_cast::<&str>(&x)?, "123");
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Handling Type Mismatches
//!
//! ```rust
//! use sovran_any::{any_cast, any_cast_ref, AnyValue, BadCast};
//!
//! let empty = AnyValue::new();
//! assert!(!empty.has_value());
//!
//! // The Option-returning accessor just reports "nothing here"
//! assert!(any_cast_ref::<char>(Some(&empty)).is_none());
//!
//! // The Result-returning accessor reports a BadCast
//! match any_cast::<char>(&empty) {
//!     Ok(c) => println!("Got {}", c),
//!     Err(BadCast) => println!("Nothing to cast"),
//! }
//!
//! // Exact types only: an i32 is not an i64
//! let number = AnyValue::from_value(15i32);
//! assert!(number.get::<i64>().is_err());
//! ```
//!
//! ### Building Values in Place
//!
//! ```rust
//! use sovran_any::{make_any, make_any_from_iter, AnyValue};
//!
//! let mut value = AnyValue::from_value(15);
//!
//! // Construct a String from its constructor argument inside the container
//! value.emplace::<String, _>("HI!");
//! assert_eq!(value.downcast_ref::<String>().map(String::as_str), Some("HI!"));
//!
//! // Or create a fresh container directly
//! let text = make_any::<String, _>("HI!");
//! let list = make_any_from_iter::<Vec<u8>, _>([1, 2, 3]);
//! assert!(text.is::<String>());
//! assert_eq!(list.downcast_ref::<Vec<u8>>().map(Vec::len), Some(3));
//! ```
//!
//! ## Logging
//!
//! With the default `log` feature, failed casts and failed in-place construction emit
//! `trace` records through the [`log`](https://docs.rs/log) facade. The crate never installs
//! a logger itself.

#[cfg(feature = "log")]
macro_rules! trace {
    ($($arg:tt)*) => {
        ::log::trace!($($arg)*)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! trace {
    ($($arg:tt)*) => {{
        let _ = format_args!($($arg)*);
    }};
}

mod any_value;
mod cast;
mod error;
mod make;
mod storage;

pub use any_value::AnyValue;
pub use cast::{any_cast, any_cast_into, any_cast_mut, any_cast_ref};
pub use error::BadCast;
pub use make::{make_any, make_any_from_iter, make_any_with};
pub use storage::Value;

// Re-export std::any for convenience
pub use std::any::{Any, TypeId};

/// The type identity an empty [`AnyValue`] reports from [`AnyValue::value_type`].
///
/// It is the identity of [`std::convert::Infallible`], which has no values and so can never be
/// held by a container.
pub fn empty_type_id() -> TypeId {
    TypeId::of::<std::convert::Infallible>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::{assert_impl_all, assert_not_impl_any};

    assert_impl_all!(AnyValue: Send, Sync, Clone, Default, std::fmt::Debug);
    assert_impl_all!(BadCast: std::error::Error, Send, Sync, Copy, Eq);
    assert_not_impl_any!(AnyValue: Copy, PartialEq);

    #[test]
    fn test_empty_type_id_is_not_unit() {
        assert_ne!(empty_type_id(), TypeId::of::<()>());
        assert_eq!(AnyValue::new().value_type(), empty_type_id());
    }
}
