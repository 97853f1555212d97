//! Value object trait: equality by value, not identity.
//!
//! Catalog entries have no identity beyond their position, and the numbers a
//! user types (prices, areas, selections) are plain values. Each of them is a
//! small newtype implementing this marker.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct UnitPrice(f64);
///
/// impl ValueObject for UnitPrice {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
