mod common;

use common::{petgraph_random, roadnet_random, town, RANDOM_SEED};
use fastrand::Rng;
use petgraph::prelude::*;
use roadnet::algo::ShortestPaths;

fn main() {
    divan::main();
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.25])]
fn roadnet_dijkstra_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = roadnet_random(N, density, &mut Rng::with_seed(RANDOM_SEED));
    let start = town(0);

    bencher.bench(|| ShortestPaths::on(&graph).run(&start));
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.25])]
fn roadnet_shortest_path_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = roadnet_random(N, density, &mut Rng::with_seed(RANDOM_SEED));
    let (start, goal) = (town(0), town(N - 1));

    bencher.bench(|| graph.shortest_path(&start, &goal));
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.25])]
fn petgraph_dijkstra_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = petgraph_random(N, density, &mut Rng::with_seed(RANDOM_SEED));
    let start = NodeIndex::new(0);

    bencher.bench(|| petgraph::algo::dijkstra(&graph, start, None, |e| *e.weight()));
}
