//! Traits the caller's vertex, half-edge and face types have to implement.
//!
//! The subdivision does not own rich geometry. Callers bring their own
//! element types (database rows, parsed features, test fixtures) and the
//! builder only asks for the minimum it needs: a position per vertex, a
//! boundary curve per half edge, and an unbounded flag per face. Elements
//! are identified by `Eq`/`Hash`, so two values comparing equal denote the
//! same element regardless of any other payload they carry.

use std::fmt;
use std::hash::Hash;

use cgmath::Point2;


/// A vertex of the subdivision: a point where edges meet.
pub trait Vertex: Eq + Hash + Clone + fmt::Debug {
    /// The position of this vertex in the plane.
    fn position(&self) -> Point2<f64>;
}

/// A directed edge of the subdivision.
///
/// Each undirected boundary between two faces is represented by two half
/// edges with opposite directions, each incident to the face on its left.
pub trait HalfEdge: Eq + Hash + Clone + fmt::Debug {
    /// The curve traced by this half edge, ordered from its origin to its
    /// destination.
    ///
    /// Must contain at least two points. The first point is the origin's
    /// position, the last the destination's. A half edge and its twin trace
    /// the same curve in opposite directions.
    fn boundary(&self) -> &[Point2<f64>];
}

/// A face of the subdivision: a maximal connected region of the plane.
pub trait Face: Eq + Hash + Clone + fmt::Debug {
    /// Returns `true` if this is the single unbounded face surrounding
    /// everything else.
    fn is_unbounded(&self) -> bool;
}
