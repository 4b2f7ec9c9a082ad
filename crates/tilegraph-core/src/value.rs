//! Vertex payloads: the [`VertexValue`] trait and stock implementations.

use std::any::Any;
use std::fmt;

// ---------------------------------------------------------------------------
// VertexValue
// ---------------------------------------------------------------------------

/// Traversal rules attached to a vertex.
///
/// Both queries are asymmetric: `self` belongs to the vertex being entered,
/// `source` to the neighbor the move originates from. Implementations that
/// discriminate on the concrete source type can downcast through
/// [`as_any`](Self::as_any).
pub trait VertexValue: fmt::Debug {
    /// The concrete value as [`Any`], for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Whether this value's vertex can be entered from `source`'s vertex.
    fn is_enterable_from(&self, _source: &dyn VertexValue) -> bool {
        true
    }

    /// Multiplier applied against the edge weight when entering this
    /// value's vertex from `source`'s vertex.
    fn entering_cost_modifier(&self, _source: &dyn VertexValue) -> f64 {
        1.0
    }
}

// ---------------------------------------------------------------------------
// Stock values
// ---------------------------------------------------------------------------

/// Integer-labeled value for free graphs. Always enterable, unit modifier.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexValue(pub i32);

impl VertexValue for IndexValue {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A value that can never be entered, for obstacle cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockedValue;

impl VertexValue for BlockedValue {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn is_enterable_from(&self, _source: &dyn VertexValue) -> bool {
        false
    }
}
