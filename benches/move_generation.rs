//! Benchmarks for move generation and state transitions.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use im::Vector;
use rust_pursuit::rules::fugitive_moves;
use rust_pursuit::standard::{fugitive_tickets, seeker_tickets, STANDARD_24_ROUNDS};
use rust_pursuit::{Colour, GameSetup, GameState, Graph, Location, Piece, PieceState, Transport};

/// Taxi ring of `size` stops with a bus chord every third stop and an
/// underground chord every sixth.
fn ring(size: u32) -> Graph {
    (1..=size).fold(Graph::new(), |g, i| {
        let g = g.with_edge(Location::new(i), Location::new(i % size + 1), Transport::Taxi);
        let g = if i % 3 == 1 {
            g.with_edge(Location::new(i), Location::new((i + 2) % size + 1), Transport::Bus)
        } else {
            g
        };
        if i % 6 == 1 {
            let across = Location::new((i + size / 2) % size + 1);
            g.with_edge(Location::new(i), across, Transport::Underground)
        } else {
            g
        }
    })
}

fn seekers(size: u32) -> Vector<PieceState> {
    Colour::ALL
        .iter()
        .zip(1..)
        .map(|(&colour, n)| {
            let at = Location::new(n * size / 6 + 1);
            PieceState::new(Piece::Seeker(colour), at, seeker_tickets())
        })
        .collect()
}

fn initial(size: u32) -> GameState {
    let setup = GameSetup::new(ring(size), STANDARD_24_ROUNDS).unwrap();
    let fugitive = PieceState::fugitive(Location::new(size), fugitive_tickets());
    GameState::build(setup, fugitive, seekers(size)).unwrap()
}

/// Fugitive move enumeration, dominated by double moves.
fn benchmark_fugitive_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("Fugitive Moves");

    for size in [60, 200] {
        let graph = ring(size);
        let fugitive = PieceState::fugitive(Location::new(size), fugitive_tickets());
        let seekers = seekers(size);
        group.bench_with_input(BenchmarkId::new("ring", size), &size, |b, _| {
            b.iter(|| black_box(fugitive_moves(&graph, &fugitive, &seekers, 24)));
        });
    }
    group.finish();
}

/// One full round: the fugitive's first move followed by every seeker.
fn benchmark_advance_round(c: &mut Criterion) {
    let state = initial(200);

    c.bench_function("advance_round", |b| {
        b.iter(|| {
            let mut current = state.clone();
            while current.round() == 0 || !current.to_move().contains(&Piece::Fugitive) {
                let Some(&mv) = current.available_moves().iter().next() else {
                    break;
                };
                current = current.advance(&mv).unwrap();
            }
            black_box(current)
        });
    });
}

criterion_group!(benches, benchmark_fugitive_moves, benchmark_advance_round);
criterion_main!(benches);
