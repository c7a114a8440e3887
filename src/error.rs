//! Error types returned by the builder and the query interface.

use std::fmt;

use failure::Fail;


/// The kind of subdivision element an operation referred to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Vertex,
    HalfEdge,
    Face,
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Element::Vertex => "vertex".fmt(f),
            Element::HalfEdge => "half edge".fmt(f),
            Element::Face => "face".fmt(f),
        }
    }
}

/// Errors that can occur while building or querying a subdivision.
#[derive(Debug, Clone, PartialEq, Fail)]
pub enum Error {
    /// A query was made for an element that is not part of the subdivision.
    #[fail(display = "{} {} is not an element of this subdivision", kind, entity)]
    NotAnElement {
        kind: Element,
        /// Debug rendering of the unknown element.
        entity: String,
    },

    /// A half edge was inserted without its oppositely-directed partner.
    #[fail(display = "half edge {} has no twin: the reverse half edge was never inserted", edge)]
    TwinNotFound {
        edge: String,
    },

    /// A half edge ended up without a successor or predecessor in its face
    /// boundary, meaning the inserted edges do not close up into cycles.
    #[fail(display = "half edge {} has no {} link: face boundaries do not close", edge, link)]
    UnresolvedLink {
        edge: String,
        link: &'static str,
    },

    /// Walking the edges around a vertex did not return to the start.
    #[fail(display = "rotation around vertex {} does not close", vertex)]
    CorruptRotation {
        vertex: String,
    },
}
