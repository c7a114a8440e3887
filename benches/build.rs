//! Builds an n×n grid subdivision: (n+1)² vertices, n² bounded cells and
//! 4·n·(n+1) half edges, inserted row by row and finalized.

use cgmath::Point2;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dcel::{Envelope, Face, HalfEdge, Subdivision, SubdivisionBuilder, Vertex};

use std::hash::{Hash, Hasher};


#[derive(Debug, Clone)]
struct GridVertex {
    id: u32,
    pos: Point2<f64>,
}

impl PartialEq for GridVertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for GridVertex {}
impl Hash for GridVertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
impl Vertex for GridVertex {
    fn position(&self) -> Point2<f64> {
        self.pos
    }
}

#[derive(Debug, Clone)]
struct GridEdge {
    id: u32,
    curve: [Point2<f64>; 2],
}

impl PartialEq for GridEdge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for GridEdge {}
impl Hash for GridEdge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
impl HalfEdge for GridEdge {
    fn boundary(&self) -> &[Point2<f64>] {
        &self.curve
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct GridFace {
    id: u32,
    unbounded: bool,
}

impl Face for GridFace {
    fn is_unbounded(&self) -> bool {
        self.unbounded
    }
}


fn build_grid(n: u32) -> Subdivision<GridVertex, GridEdge, GridFace> {
    let f0 = GridFace {
        id: 0,
        unbounded: true,
    };
    let envelope = Envelope::new(Point2::new(0.0, 0.0), Point2::new(n as f64, n as f64));
    let mut builder = SubdivisionBuilder::new(envelope, f0.clone());

    let vert = |i: u32, j: u32| GridVertex {
        id: j * (n + 1) + i,
        pos: Point2::new(i as f64, j as f64),
    };
    let cell = |i: u32, j: u32| GridFace {
        id: 1 + j * n + i,
        unbounded: false,
    };

    let mut next_edge_id = 0;
    let mut edge = |o: &GridVertex, d: &GridVertex| {
        let out = GridEdge {
            id: next_edge_id,
            curve: [o.pos, d.pos],
        };
        next_edge_id += 1;
        out
    };

    // Horizontal edges: the cell above is to the left of the eastward half
    // edge, the cell below to the left of the westward one. On the grid
    // boundary the unbounded face takes that role.
    for j in 0..=n {
        for i in 0..n {
            let a = vert(i, j);
            let b = vert(i + 1, j);
            let above = if j < n { cell(i, j) } else { f0.clone() };
            let below = if j > 0 { cell(i, j - 1) } else { f0.clone() };

            let east = edge(&a, &b);
            builder.insert(a.clone(), b.clone(), above, east);
            let west = edge(&b, &a);
            builder.insert(b, a, below, west);
        }
    }

    // Vertical edges, same scheme with west/east cells.
    for i in 0..=n {
        for j in 0..n {
            let a = vert(i, j);
            let b = vert(i, j + 1);
            let west_cell = if i > 0 { cell(i - 1, j) } else { f0.clone() };
            let east_cell = if i < n { cell(i, j) } else { f0.clone() };

            let north = edge(&a, &b);
            builder.insert(a.clone(), b.clone(), west_cell, north);
            let south = edge(&b, &a);
            builder.insert(b, a, east_cell, south);
        }
    }

    builder.finalize().unwrap()
}

fn grid(c: &mut Criterion) {
    c.bench_function("build_grid_16x16", |b| b.iter(|| build_grid(black_box(16))));
}

criterion_group!(benches, grid);
criterion_main!(benches);
