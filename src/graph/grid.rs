// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Triangular grid graphs.
//!
//! The grid `T_n` has one vertex per lattice point `(x, y)` with
//! `x + y <= n`. Two points are joined when they are at Manhattan distance 1,
//! or on a common anti-diagonal at distance 2 (`(x + 1, y - 1)`).
//!
//! Vertices are numbered row by row along anti-diagonals: every point with
//! `x + y = s` comes before those with `x + y = s + 1`, in increasing `x`.

use crate::graph::Graph;

/// Vertex id of lattice point `(x, y)`.
pub fn grid_vertex(x: u32, y: u32) -> u32 {
    let diagonal = x + y;
    diagonal * (diagonal + 1) / 2 + x
}

/// Lattice point of vertex id `vertex`.
pub fn grid_coordinate(vertex: u32) -> (u32, u32) {
    let mut diagonal = 0;
    while (diagonal + 1) * (diagonal + 2) / 2 <= vertex {
        diagonal += 1;
    }
    let x = vertex - diagonal * (diagonal + 1) / 2;
    (x, diagonal - x)
}

fn is_grid_edge(a: (u32, u32), b: (u32, u32)) -> bool {
    let dx = i64::from(a.0) - i64::from(b.0);
    let dy = i64::from(a.1) - i64::from(b.1);
    match dx.abs() + dy.abs() {
        1 => true,
        2 => dx.abs() == 1 && dy.abs() == 1 && dx != dy,
        _ => false,
    }
}

impl Graph<u32> {
    /// Build `T_n` together with its border cycle.
    ///
    /// The border runs along the bottom row from `(0, 0)` to `(n, 0)`, up the
    /// hypotenuse to `(0, n)` and back down the left side, so consecutive
    /// entries (and the last and first) are adjacent. It holds `3n` vertices
    /// for `n >= 1`.
    pub fn triangular_grid(n: u32) -> (Self, Vec<u32>) {
        let points: Vec<(u32, u32)> = (0..=n)
            .flat_map(|diagonal| (0..=diagonal).map(move |x| (x, diagonal - x)))
            .collect();

        let mut graph = Graph::new();
        for &(x, y) in &points {
            graph.add_vertex(grid_vertex(x, y));
        }
        for (i, &a) in points.iter().enumerate() {
            for &b in &points[i + 1..] {
                if is_grid_edge(a, b) {
                    graph.add_edge(grid_vertex(a.0, a.1), grid_vertex(b.0, b.1));
                }
            }
        }

        let bottom = (0..=n).map(|x| (x, 0));
        let hypotenuse = (1..=n).map(|y| (n - y, y));
        let left = (1..n).rev().map(|y| (0, y));
        let border = bottom
            .chain(hypotenuse)
            .chain(left)
            .map(|(x, y)| grid_vertex(x, y))
            .collect();

        (graph, border)
    }
}
