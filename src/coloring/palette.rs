// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Colors still available to a vertex.

use std::collections::BTreeSet;

use crate::coloring::{Color, Coloring};
use crate::error::InvalidGraphError;
use crate::graph::{Graph, VertexKey};

/// Colors from `0..palette` not used by `vertex` or any of its neighbors.
pub fn allowed_colors<V: VertexKey>(
    graph: &Graph<V>,
    coloring: &Coloring<V>,
    vertex: &V,
    palette: u32,
) -> Result<BTreeSet<Color>, InvalidGraphError> {
    let neighbors = graph
        .neighbors(vertex)
        .ok_or_else(|| InvalidGraphError::unknown(vertex))?;

    let mut allowed: BTreeSet<Color> = (0..palette).map(Color::new).collect();
    for used in std::iter::once(vertex)
        .chain(neighbors)
        .filter_map(|v| coloring.get(v))
    {
        allowed.remove(&used);
    }
    Ok(allowed)
}
