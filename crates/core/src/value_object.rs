//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new value (for example with struct update syntax) instead of
/// mutating it in place.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
