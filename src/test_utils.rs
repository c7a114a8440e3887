//! Small entity types used by the tests in this crate.
//!
//! All three types carry identity (the part `Eq`/`Hash` sees) separately
//! from their geometric payload, so tests can look up elements in a built
//! subdivision with cheap probe values.

use std::hash::{Hash, Hasher};

use cgmath::Point2;

use crate::{Face, HalfEdge, Vertex};


#[derive(Debug, Clone)]
pub(crate) struct TVertex {
    pub(crate) id: u32,
    pub(crate) pos: Point2<f64>,
}

impl PartialEq for TVertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for TVertex {}
impl Hash for TVertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Vertex for TVertex {
    fn position(&self) -> Point2<f64> {
        self.pos
    }
}

#[derive(Debug, Clone)]
pub(crate) struct THalfEdge {
    pub(crate) name: &'static str,
    pub(crate) curve: Vec<Point2<f64>>,
}

impl PartialEq for THalfEdge {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
impl Eq for THalfEdge {}
impl Hash for THalfEdge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl HalfEdge for THalfEdge {
    fn boundary(&self) -> &[Point2<f64>] {
        &self.curve
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct TFace {
    pub(crate) id: u32,
    pub(crate) unbounded: bool,
}

impl Face for TFace {
    fn is_unbounded(&self) -> bool {
        self.unbounded
    }
}


pub(crate) fn vertex(id: u32, x: f64, y: f64) -> TVertex {
    TVertex {
        id,
        pos: Point2::new(x, y),
    }
}

/// A straight half edge from `origin` to `destination`.
pub(crate) fn half_edge(name: &'static str, origin: &TVertex, destination: &TVertex) -> THalfEdge {
    THalfEdge {
        name,
        curve: vec![origin.pos, destination.pos],
    }
}

pub(crate) fn face(id: u32) -> TFace {
    TFace {
        id,
        unbounded: false,
    }
}

pub(crate) fn unbounded_face(id: u32) -> TFace {
    TFace {
        id,
        unbounded: true,
    }
}
