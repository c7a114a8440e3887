//! Incremental construction and querying of planar subdivisions.
//!
//! A planar subdivision partitions the plane into vertices, directed boundary
//! edges and faces. This crate represents such a partition as a half-edge
//! topology (a *doubly-connected edge list*, DCEL): every undirected edge is
//! stored as a pair of directed half edges, each knowing its origin vertex,
//! its twin, the face to its left, and its successor/predecessor in the
//! counter-clockwise walk along that face's boundary.
//!
//! The interesting part is building this structure *incrementally* from an
//! unordered stream of half-edge insertions: twin pairing, the cyclic order
//! of edges around each vertex, and the nesting of holes and islands inside
//! faces are all derived as edges arrive, without global knowledge of the
//! final rotation order. See [`SubdivisionBuilder`] for the entry point and
//! [`Subdivision`] for the finished, read-only structure.
//!
//! Vertices, half edges and faces are supplied by the caller as opaque
//! identities with minimal capabilities (a position, a boundary curve, an
//! unbounded flag), expressed by the traits in this crate's root. It does not
//! parse geometry formats, transform coordinates or serialize the structure;
//! those concerns live in collaborating layers.

pub mod handle;
pub mod map;
pub mod math;

mod builder;
mod entity;
mod error;
mod subdivision;

#[cfg(test)]
mod test_utils;

pub use self::{
    builder::SubdivisionBuilder,
    entity::{Face, HalfEdge, Vertex},
    error::{Element, Error},
    handle::{FaceHandle, HalfEdgeHandle, VertexHandle},
    math::Envelope,
    subdivision::Subdivision,
};
