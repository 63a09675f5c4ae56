//! Deterministic force-directed node layout.
//!
//! Fruchterman-Reingold spring layout with a fixed iteration and cooling
//! schedule. Nodes start on a circle in id order, so the result is a pure
//! function of the graph structure: same nodes and edges, same positions.

use std::f64::consts::TAU;

const ITERATIONS: usize = 60;
const AREA: f64 = 1.0;
// Minimum separation used in place of a zero distance between coincident
// nodes, which would otherwise produce an undefined force direction.
const MIN_DISTANCE: f64 = 1e-6;

/// Compute positions for `n` nodes joined by `edges` (index pairs).
///
/// Positions land roughly within the unit square centred on the origin.
pub(crate) fn force_directed(n: usize, edges: &[(usize, usize)]) -> Vec<(f64, f64)> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![(0.0, 0.0)];
    }

    let k = (AREA / n as f64).sqrt();
    let mut pos: Vec<(f64, f64)> = (0..n)
        .map(|i| {
            let angle = TAU * i as f64 / n as f64;
            (angle.cos() * 0.5, angle.sin() * 0.5)
        })
        .collect();
    let mut disp = vec![(0.0f64, 0.0f64); n];

    for iteration in 0..ITERATIONS {
        for d in disp.iter_mut() {
            *d = (0.0, 0.0);
        }

        // Repulsive forces between every node pair.
        for i in 0..n {
            for j in (i + 1)..n {
                let (dx, dy, dist) = delta(pos[i], pos[j]);
                let force = k * k / dist;
                let (fx, fy) = (dx / dist * force, dy / dist * force);
                disp[i].0 += fx;
                disp[i].1 += fy;
                disp[j].0 -= fx;
                disp[j].1 -= fy;
            }
        }

        // Attractive forces along edges.
        for &(a, b) in edges {
            let (dx, dy, dist) = delta(pos[a], pos[b]);
            let force = dist * dist / k;
            let (fx, fy) = (dx / dist * force, dy / dist * force);
            disp[a].0 -= fx;
            disp[a].1 -= fy;
            disp[b].0 += fx;
            disp[b].1 += fy;
        }

        // Linear cooling caps how far a node may move this iteration.
        let temperature = 0.1 * (1.0 - iteration as f64 / ITERATIONS as f64);
        for i in 0..n {
            let (dx, dy) = disp[i];
            let length = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
            let step = length.min(temperature);
            pos[i].0 += dx / length * step;
            pos[i].1 += dy / length * step;
        }
    }

    pos
}

fn delta(a: (f64, f64), b: (f64, f64)) -> (f64, f64, f64) {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    let dist = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
    (dx, dy, dist)
}
