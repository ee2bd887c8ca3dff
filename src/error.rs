use thiserror::Error;

/// Returned when a typed accessor asks for a type the container does not hold.
///
/// An empty container fails every such request the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("bad any cast")]
pub struct BadCast;
