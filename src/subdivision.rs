//! The finished, immutable subdivision and its query interface.

use std::collections::HashMap;

use crate::{
    entity::{Face, HalfEdge, Vertex},
    error::{Element, Error},
    handle::{hsize, FaceHandle, HalfEdgeHandle, VertexHandle},
    map::DenseMap,
    math::Envelope,
};


/// Fully resolved topology of one half edge.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HalfEdgeLinks {
    pub(crate) origin: VertexHandle,
    pub(crate) twin: HalfEdgeHandle,
    pub(crate) face: FaceHandle,
    pub(crate) next: HalfEdgeHandle,
    pub(crate) prev: HalfEdgeHandle,
}

/// Boundary components of one face: the outer boundary cycle (absent only
/// for the unbounded face) and one entry half edge per hole or island
/// inside the face.
#[derive(Debug, Clone)]
pub(crate) struct FaceLinks {
    pub(crate) outer: Option<HalfEdgeHandle>,
    pub(crate) inner: Vec<HalfEdgeHandle>,
}


/// An immutable planar subdivision.
///
/// Produced by [`crate::SubdivisionBuilder::finalize`]. All structural
/// queries take the caller's own element values (resolved through their
/// `Eq`/`Hash` identity), cost one hash lookup plus arena indexing, and
/// fail with [`Error::NotAnElement`] for elements that are not part of this
/// subdivision.
///
/// The structure holds no interior mutability, so it is `Send + Sync`
/// whenever the element types are and can be queried from multiple threads
/// without synchronization.
#[derive(Debug)]
pub struct Subdivision<V: Vertex, E: HalfEdge, F: Face> {
    pub(crate) envelope: Envelope,
    pub(crate) unbounded: FaceHandle,

    pub(crate) vertices: DenseMap<VertexHandle, V>,
    pub(crate) half_edges: DenseMap<HalfEdgeHandle, E>,
    pub(crate) faces: DenseMap<FaceHandle, F>,

    pub(crate) vertex_handles: HashMap<V, VertexHandle, ahash::RandomState>,
    pub(crate) half_edge_handles: HashMap<E, HalfEdgeHandle, ahash::RandomState>,
    pub(crate) face_handles: HashMap<F, FaceHandle, ahash::RandomState>,

    pub(crate) links: DenseMap<HalfEdgeHandle, HalfEdgeLinks>,
    pub(crate) incident: DenseMap<VertexHandle, HalfEdgeHandle>,
    pub(crate) face_links: DenseMap<FaceHandle, FaceLinks>,
}

impl<V: Vertex, E: HalfEdge, F: Face> Subdivision<V, E, F> {
    /// Returns one half edge with `vertex` as its origin.
    pub fn incident_edge(&self, vertex: &V) -> Result<&E, Error> {
        let vh = self.vertex_handle(vertex)?;
        Ok(&self.half_edges[self.incident[vh]])
    }

    /// Returns the vertex `edge` starts at.
    pub fn origin(&self, edge: &E) -> Result<&V, Error> {
        let h = self.half_edge_handle(edge)?;
        Ok(&self.vertices[self.links[h].origin])
    }

    /// Returns the half edge running in the opposite direction of `edge`.
    pub fn twin(&self, edge: &E) -> Result<&E, Error> {
        let h = self.half_edge_handle(edge)?;
        Ok(&self.half_edges[self.links[h].twin])
    }

    /// Returns the face to the left of `edge`.
    pub fn incident_face(&self, edge: &E) -> Result<&F, Error> {
        let h = self.half_edge_handle(edge)?;
        Ok(&self.faces[self.links[h].face])
    }

    /// Returns the successor of `edge` in the counter-clockwise walk along
    /// its face's boundary.
    pub fn next(&self, edge: &E) -> Result<&E, Error> {
        let h = self.half_edge_handle(edge)?;
        Ok(&self.half_edges[self.links[h].next])
    }

    /// Returns the predecessor of `edge` in the counter-clockwise walk
    /// along its face's boundary.
    pub fn previous(&self, edge: &E) -> Result<&E, Error> {
        let h = self.half_edge_handle(edge)?;
        Ok(&self.half_edges[self.links[h].prev])
    }

    /// Returns a half edge on the outer boundary cycle of `face`, or `None`
    /// for the unbounded face (which has no outer boundary).
    pub fn outer_component(&self, face: &F) -> Result<Option<&E>, Error> {
        let fh = self.face_handle(face)?;
        Ok(self.face_links[fh].outer.map(|h| &self.half_edges[h]))
    }

    /// Returns one entry half edge per hole or island inside `face`. Each
    /// returned edge is incident to `face` itself, so walking its `next`
    /// chain traverses the respective inner boundary cycle.
    pub fn inner_components(&self, face: &F) -> Result<Vec<&E>, Error> {
        let fh = self.face_handle(face)?;
        Ok(self.face_links[fh]
            .inner
            .iter()
            .map(|&h| &self.half_edges[h])
            .collect())
    }

    /// Returns all half edges with `vertex` as their origin, in rotation
    /// order around the vertex.
    ///
    /// The rotation is traversed via `next(twin(current))`. The walk is
    /// capped at the total half-edge count; exceeding the cap means the
    /// structure is inconsistent and yields [`Error::CorruptRotation`].
    pub fn outgoing(&self, vertex: &V) -> Result<Vec<&E>, Error> {
        let vh = self.vertex_handle(vertex)?;
        let start = self.incident[vh];

        let mut out = Vec::new();
        let mut current = start;
        loop {
            out.push(&self.half_edges[current]);
            current = self.links[self.links[current].twin].next;
            if current == start {
                return Ok(out);
            }
            if out.len() >= self.links.num_elements() as usize {
                return Err(Error::CorruptRotation {
                    vertex: format!("{:?}", vertex),
                });
            }
        }
    }

    /// The face representing the unbounded plane around the subdivision.
    pub fn unbounded_face(&self) -> &F {
        &self.faces[self.unbounded]
    }

    /// The bounding envelope the subdivision was built with.
    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    /// Iterator over all vertices.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.values()
    }

    /// Iterator over all half edges.
    pub fn half_edges(&self) -> impl Iterator<Item = &E> {
        self.half_edges.values()
    }

    /// Iterator over all faces (including the unbounded one).
    pub fn faces(&self) -> impl Iterator<Item = &F> {
        self.faces.values()
    }

    pub fn num_vertices(&self) -> hsize {
        self.vertices.num_elements()
    }

    pub fn num_half_edges(&self) -> hsize {
        self.half_edges.num_elements()
    }

    pub fn num_faces(&self) -> hsize {
        self.faces.num_elements()
    }

    fn vertex_handle(&self, vertex: &V) -> Result<VertexHandle, Error> {
        self.vertex_handles
            .get(vertex)
            .copied()
            .ok_or_else(|| Error::NotAnElement {
                kind: Element::Vertex,
                entity: format!("{:?}", vertex),
            })
    }

    fn half_edge_handle(&self, edge: &E) -> Result<HalfEdgeHandle, Error> {
        self.half_edge_handles
            .get(edge)
            .copied()
            .ok_or_else(|| Error::NotAnElement {
                kind: Element::HalfEdge,
                entity: format!("{:?}", edge),
            })
    }

    fn face_handle(&self, face: &F) -> Result<FaceHandle, Error> {
        self.face_handles
            .get(face)
            .copied()
            .ok_or_else(|| Error::NotAnElement {
                kind: Element::Face,
                entity: format!("{:?}", face),
            })
    }
}
