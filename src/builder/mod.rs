//! Incremental construction of a subdivision from single half-edge
//! insertions.
//!
//! The builder accepts half edges in any order. Nothing global is known
//! while edges arrive, so all topology is derived locally and repaired as
//! better information shows up:
//!
//! - twins are paired by scanning the destination's outgoing edges for the
//!   reverse direction;
//! - `next`/`prev` links are resolved angularly: at a shared vertex, the
//!   successor of an incoming half edge is the outgoing half edge of the
//!   same face that is first in clockwise direction from the incoming
//!   edge's reversed direction. A newly inserted edge may take over a link
//!   an earlier edge claimed, if it is angularly closer; the loser's link
//!   is cleared and resolved again by a later insertion.
//! - connected components are tracked as per-vertex labels so that
//!   `finalize` can tell holes and islands apart from the boundaries a face
//!   owns itself.
//!
//! The result of [`SubdivisionBuilder::finalize`] does not depend on the
//! insertion order.

use std::collections::HashMap;

use cgmath::{Rad, Vector2};
use smallvec::SmallVec;

use crate::{
    entity::{Face, HalfEdge, Vertex},
    error::Error,
    handle::{FaceHandle, HalfEdgeHandle, Handle, VertexHandle},
    map::DenseMap,
    math::{self, Envelope},
    subdivision::{FaceLinks, HalfEdgeLinks, Subdivision},
};



/// Topology of one half edge while it is under construction.
///
/// `twin`, `next` and `prev` start out unset and are filled in (and
/// occasionally cleared again) as insertions arrive. `finalize` refuses to
/// publish a structure in which any of them stayed unset.
#[derive(Debug, Clone)]
struct HalfEdgeRecord {
    origin: VertexHandle,
    destination: VertexHandle,
    face: FaceHandle,
    twin: Option<HalfEdgeHandle>,
    next: Option<HalfEdgeHandle>,
    prev: Option<HalfEdgeHandle>,
}

/// Adjacency and component label of one vertex.
#[derive(Debug, Clone)]
struct VertexRecord {
    outgoing: SmallVec<[HalfEdgeHandle; 4]>,
    incoming: SmallVec<[HalfEdgeHandle; 4]>,
    component: u32,
}

/// Boundary bookkeeping of one face.
#[derive(Debug, Clone)]
struct FaceRecord {
    outer: Option<HalfEdgeHandle>,
    inner: Vec<HalfEdgeHandle>,
}


/// Builds a [`Subdivision`] from individual half-edge insertions.
///
/// The builder is created with the bounding [`Envelope`] of all coordinates
/// and the face representing the unbounded plane. Every undirected edge is
/// then inserted as two directed half edges (one [`insert`] call each, in
/// any order, interleaved with other edges as the caller likes). Finally,
/// [`finalize`] validates the accumulated topology and produces the
/// immutable query structure.
///
/// The inserted edges must form a valid subdivision: edges only meet at
/// shared vertices and never cross. This is not checked; the builder
/// assembles topology and does not validate geometry.
///
/// [`insert`]: Self::insert
/// [`finalize`]: Self::finalize
#[derive(Debug)]
pub struct SubdivisionBuilder<V: Vertex, E: HalfEdge, F: Face> {
    envelope: Envelope,
    unbounded: FaceHandle,

    vertices: DenseMap<VertexHandle, V>,
    half_edges: DenseMap<HalfEdgeHandle, E>,
    faces: DenseMap<FaceHandle, F>,

    vertex_handles: HashMap<V, VertexHandle, ahash::RandomState>,
    half_edge_handles: HashMap<E, HalfEdgeHandle, ahash::RandomState>,
    face_handles: HashMap<F, FaceHandle, ahash::RandomState>,

    vertex_records: DenseMap<VertexHandle, VertexRecord>,
    records: DenseMap<HalfEdgeHandle, HalfEdgeRecord>,
    face_records: DenseMap<FaceHandle, FaceRecord>,

    next_component: u32,
}

impl<V: Vertex, E: HalfEdge, F: Face> SubdivisionBuilder<V, E, F> {
    /// Creates an empty builder for a subdivision within `envelope`, with
    /// `unbounded` as the face surrounding everything.
    ///
    /// Panics if `unbounded.is_unbounded()` is `false`.
    pub fn new(envelope: Envelope, unbounded: F) -> Self {
        assert!(
            unbounded.is_unbounded(),
            "face {:?} passed as the unbounded face, but `is_unbounded()` returns false",
            unbounded,
        );

        let mut builder = Self {
            envelope,
            unbounded: FaceHandle::new(0),
            vertices: DenseMap::new(),
            half_edges: DenseMap::new(),
            faces: DenseMap::new(),
            vertex_handles: HashMap::default(),
            half_edge_handles: HashMap::default(),
            face_handles: HashMap::default(),
            vertex_records: DenseMap::new(),
            records: DenseMap::new(),
            face_records: DenseMap::new(),
            next_component: 0,
        };
        builder.unbounded = builder.intern_face(unbounded);
        builder
    }

    /// Inserts one directed half edge running from `origin` to
    /// `destination` with `left_face` to its left.
    ///
    /// The reverse direction is a separate half edge and needs its own
    /// `insert` call (with the two vertices swapped and the face on the
    /// other side) before the builder can be finalized.
    ///
    /// Panics if origin and destination are the same vertex or share a
    /// position, if the edge's boundary curve has fewer than two points, or
    /// if `half_edge` was already inserted.
    pub fn insert(&mut self, origin: V, destination: V, left_face: F, half_edge: E) {
        assert!(
            origin != destination,
            "half edge {:?} starts and ends at the same vertex {:?}",
            half_edge,
            origin,
        );
        assert_ne!(
            origin.position(),
            destination.position(),
            "origin {:?} and destination {:?} of {:?} share a position",
            origin,
            destination,
            half_edge,
        );
        let num_points = half_edge.boundary().len();
        assert!(
            num_points >= 2,
            "boundary of {:?} has {} point(s), but at least 2 are required",
            half_edge,
            num_points,
        );
        assert!(
            !self.half_edge_handles.contains_key(&half_edge),
            "half edge {:?} was inserted twice",
            half_edge,
        );

        let o = self.intern_vertex(origin);
        let d = self.intern_vertex(destination);
        let f = self.intern_face(left_face);
        self.merge_components(o, d);

        let h = self.half_edges.push(half_edge);
        self.half_edge_handles.insert(self.half_edges[h].clone(), h);
        let rh = self.records.push(HalfEdgeRecord {
            origin: o,
            destination: d,
            face: f,
            twin: None,
            next: None,
            prev: None,
        });
        debug_assert_eq!(h, rh);

        // The twin runs in the opposite direction, so it is outgoing at our
        // destination and ends at our origin. If it is not here yet, its own
        // insertion will find us.
        let twin = self.vertex_records[d]
            .outgoing
            .iter()
            .copied()
            .find(|&c| self.records[c].destination == o && self.records[c].twin.is_none());
        if let Some(t) = twin {
            self.records[t].twin = Some(h);
            self.records[h].twin = Some(t);
        }

        self.vertex_records[o].outgoing.push(h);
        self.vertex_records[d].incoming.push(h);

        self.resolve_next(h);
        self.resolve_prev(h);
    }

    /// Validates the accumulated topology and produces the immutable
    /// [`Subdivision`].
    ///
    /// Fails with [`Error::TwinNotFound`] if a reverse half edge was never
    /// inserted, and with [`Error::UnresolvedLink`] if the face boundaries
    /// do not close into cycles (a symptom of input violating the
    /// no-crossing contract).
    pub fn finalize(mut self) -> Result<Subdivision<V, E, F>, Error> {
        let mut links = DenseMap::new();
        for (h, record) in self.records.iter() {
            let twin = record.twin.ok_or_else(|| Error::TwinNotFound {
                edge: format!("{:?}", self.half_edges[h]),
            })?;
            let next = record.next.ok_or_else(|| Error::UnresolvedLink {
                edge: format!("{:?}", self.half_edges[h]),
                link: "next",
            })?;
            let prev = record.prev.ok_or_else(|| Error::UnresolvedLink {
                edge: format!("{:?}", self.half_edges[h]),
                link: "previous",
            })?;

            links.push(HalfEdgeLinks {
                origin: record.origin,
                twin,
                face: record.face,
                next,
                prev,
            });
        }

        self.derive_faces(&links);

        let mut incident = DenseMap::new();
        for record in self.vertex_records.values() {
            // Every vertex has an outgoing half edge once all twins are
            // paired.
            incident.push(record.outgoing[0]);
        }

        let mut face_links = DenseMap::new();
        for record in self.face_records.values() {
            face_links.push(FaceLinks {
                outer: record.outer,
                inner: record.inner.clone(),
            });
        }

        Ok(Subdivision {
            envelope: self.envelope,
            unbounded: self.unbounded,
            vertices: self.vertices,
            half_edges: self.half_edges,
            faces: self.faces,
            vertex_handles: self.vertex_handles,
            half_edge_handles: self.half_edge_handles,
            face_handles: self.face_handles,
            links,
            incident,
            face_links,
        })
    }

    fn intern_vertex(&mut self, vertex: V) -> VertexHandle {
        if let Some(&vh) = self.vertex_handles.get(&vertex) {
            return vh;
        }

        let vh = self.vertices.push(vertex.clone());
        self.vertex_handles.insert(vertex, vh);

        let label = self.next_component;
        self.next_component += 1;
        let rh = self.vertex_records.push(VertexRecord {
            outgoing: SmallVec::new(),
            incoming: SmallVec::new(),
            component: label,
        });
        debug_assert_eq!(vh, rh);

        vh
    }

    fn intern_face(&mut self, face: F) -> FaceHandle {
        if let Some(&fh) = self.face_handles.get(&face) {
            return fh;
        }

        let fh = self.faces.push(face.clone());
        self.face_handles.insert(face, fh);
        let rh = self.face_records.push(FaceRecord {
            outer: None,
            inner: Vec::new(),
        });
        debug_assert_eq!(fh, rh);

        fh
    }

    /// Unifies the component labels of `a` and `b`. The numerically smaller
    /// label is canonical; every vertex carrying the larger one is
    /// relabeled.
    fn merge_components(&mut self, a: VertexHandle, b: VertexHandle) {
        let la = self.vertex_records[a].component;
        let lb = self.vertex_records[b].component;
        if la == lb {
            return;
        }

        let (keep, gone) = if la < lb { (la, lb) } else { (lb, la) };
        for record in self.vertex_records.values_mut() {
            if record.component == gone {
                record.component = keep;
            }
        }
    }

    /// The direction in which the curve of `h` leaves the vertex `v` (one
    /// of its two endpoints).
    fn direction_leaving(&self, v: VertexHandle, h: HalfEdgeHandle) -> Vector2<f64> {
        let curve = self.half_edges[h].boundary();
        if self.records[h].origin == v {
            math::direction_from_start(curve)
        } else {
            debug_assert_eq!(self.records[h].destination, v);
            math::direction_from_end(curve)
        }
    }

    /// Resolves the `next` link of `h` at its destination vertex.
    ///
    /// Among the destination's outgoing half edges of the same face, the
    /// boundary continuation is the one with the smallest clockwise angle
    /// from `h`'s reversed direction. If that candidate's `prev` slot is
    /// already claimed, the claim closer in clockwise angle wins and the
    /// loser's link is cleared.
    fn resolve_next(&mut self, h: HalfEdgeHandle) {
        let d = self.records[h].destination;
        let face = self.records[h].face;
        let base = self.direction_leaving(d, h);

        let mut best: Option<(HalfEdgeHandle, Rad<f64>)> = None;
        for &c in &self.vertex_records[d].outgoing {
            if self.records[c].face != face {
                continue;
            }
            let angle = math::cw_angle(base, self.direction_leaving(d, c));
            if best.map_or(true, |(_, best_angle)| angle < best_angle) {
                best = Some((c, angle));
            }
        }
        let (winner, angle) = match best {
            Some(best) => best,
            None => return,
        };

        match self.records[winner].prev {
            None => {
                self.records[h].next = Some(winner);
                self.records[winner].prev = Some(h);
            }
            Some(incumbent) => {
                let incumbent_angle = math::cw_angle(
                    self.direction_leaving(d, incumbent),
                    self.direction_leaving(d, winner),
                );
                if angle < incumbent_angle {
                    self.records[incumbent].next = None;
                    self.records[h].next = Some(winner);
                    self.records[winner].prev = Some(h);
                }
            }
        }
    }

    /// Resolves the `prev` link of `h` at its origin vertex, symmetric to
    /// [`Self::resolve_next`]: the predecessor is the incoming same-face
    /// half edge from whose reversed direction `h` is the closest clockwise
    /// continuation.
    fn resolve_prev(&mut self, h: HalfEdgeHandle) {
        let o = self.records[h].origin;
        let face = self.records[h].face;
        let dir = self.direction_leaving(o, h);

        let mut best: Option<(HalfEdgeHandle, Rad<f64>)> = None;
        for &e in &self.vertex_records[o].incoming {
            if self.records[e].face != face {
                continue;
            }
            let angle = math::cw_angle(self.direction_leaving(o, e), dir);
            if best.map_or(true, |(_, best_angle)| angle < best_angle) {
                best = Some((e, angle));
            }
        }
        let (winner, angle) = match best {
            Some(best) => best,
            None => return,
        };

        match self.records[winner].next {
            None => {
                self.records[winner].next = Some(h);
                self.records[h].prev = Some(winner);
            }
            Some(incumbent) => {
                let incumbent_angle = math::cw_angle(
                    self.direction_leaving(o, winner),
                    self.direction_leaving(o, incumbent),
                );
                if angle < incumbent_angle {
                    self.records[incumbent].prev = None;
                    self.records[winner].next = Some(h);
                    self.records[h].prev = Some(winner);
                }
            }
        }
    }

    /// Assigns every boundary cycle to its face, distinguishing outer
    /// boundaries from inner components (holes and islands).
    ///
    /// Insertion order cannot tell the two apart (a hole's edges may all
    /// arrive before any edge of the surrounding face's outer cycle), but
    /// orientation can: a face's outer boundary is walked counter-clockwise
    /// and encloses positive signed area, while the cycle a face sees
    /// around a hole or island runs clockwise, and a bare tree of edges
    /// encloses none. The unbounded face only ever sees inner cycles.
    ///
    /// Each connected component has exactly one inner cycle: the one its
    /// enclosing face sees.
    fn derive_faces(&mut self, links: &DenseMap<HalfEdgeHandle, HalfEdgeLinks>) {
        let mut components: HashMap<u32, Vec<VertexHandle>, ahash::RandomState> =
            HashMap::default();
        for (v, record) in self.vertex_records.iter() {
            components.entry(record.component).or_default().push(v);
        }

        let mut labels: Vec<_> = components.keys().copied().collect();
        labels.sort_unstable();

        for label in labels {
            // One representative half edge per face touched by this
            // component. A face and a connected component share exactly one
            // boundary cycle, so one representative covers it.
            let mut reps: HashMap<FaceHandle, HalfEdgeHandle, ahash::RandomState> =
                HashMap::default();
            let mut faces = Vec::new();
            for &v in &components[&label] {
                for &h in &self.vertex_records[v].outgoing {
                    let f = self.records[h].face;
                    if !reps.contains_key(&f) {
                        reps.insert(f, h);
                        faces.push(f);
                    }
                }
            }

            for f in faces {
                let h = reps[&f];
                if f != self.unbounded && self.cycle_area(links, h) > 0.0 {
                    self.face_records[f].outer = Some(h);
                } else {
                    self.face_records[f].inner.push(h);
                }
            }
        }
    }

    /// Signed area enclosed by the boundary cycle through `start`
    /// (shoelace over the cycle's curves). Positive for counter-clockwise
    /// cycles.
    fn cycle_area(
        &self,
        links: &DenseMap<HalfEdgeHandle, HalfEdgeLinks>,
        start: HalfEdgeHandle,
    ) -> f64 {
        let mut doubled = 0.0;
        let mut current = start;
        loop {
            let curve = self.half_edges[current].boundary();
            for segment in curve.windows(2) {
                doubled += segment[0].x * segment[1].y - segment[1].x * segment[0].y;
            }
            current = links[current].next;
            if current == start {
                break;
            }
        }
        doubled / 2.0
    }
}
