#![allow(dead_code)]

use fastrand::Rng;
use petgraph::prelude::*;
use roadnet::{core::Town, Graph};

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

pub fn town(i: usize) -> Town {
    Town::new(format!("Town_{i}")).unwrap()
}

// Erdős–Rényi style graph, every pair of towns is connected with probability
// `density`.
pub fn random_edges(vertex_count: usize, density: f32, rng: &mut Rng) -> Vec<(usize, usize, u32)> {
    let mut edges = Vec::new();

    for u in 0..vertex_count {
        for v in (u + 1)..vertex_count {
            if rng.f32() < density {
                edges.push((u, v, rng.u32(1..100)));
            }
        }
    }

    edges
}

pub fn roadnet_random(vertex_count: usize, density: f32, rng: &mut Rng) -> Graph {
    let mut graph = Graph::new();

    for i in 0..vertex_count {
        graph.add_vertex(town(i));
    }

    for (i, (u, v, distance)) in random_edges(vertex_count, density, rng).into_iter().enumerate() {
        graph
            .add_edge(&town(u), &town(v), distance.into(), format!("Road_{i}"))
            .unwrap();
    }

    graph
}

pub fn petgraph_random(vertex_count: usize, density: f32, rng: &mut Rng) -> UnGraph<(), u64> {
    let mut graph = UnGraph::with_capacity(vertex_count, vertex_count);

    let vertices = (0..vertex_count)
        .map(|_| graph.add_node(()))
        .collect::<Vec<_>>();

    for (u, v, distance) in random_edges(vertex_count, density, rng) {
        graph.add_edge(vertices[u], vertices[v], distance.into());
    }

    graph
}
