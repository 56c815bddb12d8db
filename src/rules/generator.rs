//! Move generation.
//!
//! Pure functions from (graph, occupancy, piece) to the exhaustive set of
//! legal moves. Results are `im::OrdSet`s, so identical moves reached
//! through different edges collapse into one.
//!
//! ## Blocking
//!
//! `occupied` holds the locations of the *other* pieces that block the mover:
//! every seeker for the fugitive, every other seeker for a seeker. The
//! fugitive's square never blocks a seeker; moving onto it is a capture.

use im::{OrdSet, Vector};
use rustc_hash::FxHashSet;
use tracing::trace;

use crate::core::{DoubleMove, Location, Move, Piece, PieceState, SingleMove, Ticket, Tickets};
use crate::graph::TransportGraph;

/// Locations that block `mover`: all seekers other than `mover` itself.
#[must_use]
pub fn occupied_by_seekers(seekers: &Vector<PieceState>, mover: Piece) -> FxHashSet<Location> {
    seekers
        .iter()
        .filter(|s| s.piece() != mover)
        .map(PieceState::location)
        .collect()
}

/// Every single move `piece` can make from its current location.
///
/// For each unoccupied neighbour: one move per transport mode whose ticket
/// the piece holds, plus one SECRET move if the piece may and does hold a
/// SECRET ticket.
#[must_use]
pub fn single_moves<G: TransportGraph>(
    graph: &G,
    occupied: &FxHashSet<Location>,
    piece: &PieceState,
) -> OrdSet<SingleMove> {
    let mover = piece.piece();
    let source = piece.location();
    let tickets = piece.tickets();
    let secret = mover.may_hold_special_tickets() && tickets.has(Ticket::Secret);

    let moves: OrdSet<SingleMove> = graph
        .adjacent(source)
        .filter(|destination| !occupied.contains(destination))
        .flat_map(|destination| {
            let modes = graph.transports(source, destination);
            let travel = modes
                .iter()
                .filter_map(|transport| transport.required_ticket())
                .filter(move |&ticket| tickets.has(ticket));
            let hidden = (secret && !modes.is_empty()).then_some(Ticket::Secret);

            travel
                .chain(hidden)
                .map(move |ticket| SingleMove::new(mover, source, ticket, destination))
        })
        .collect();

    trace!(piece = %mover, source = %source, count = moves.len(), "generated single moves");
    moves
}

/// Every double move the fugitive can make.
///
/// Empty unless the fugitive holds a DOUBLE ticket and at least two rounds
/// remain. Both legs are generated against the same occupancy, and the bank
/// must cover both legs at once.
#[must_use]
pub fn double_moves<G: TransportGraph>(
    graph: &G,
    occupied: &FxHashSet<Location>,
    fugitive: &PieceState,
    rounds_remaining: usize,
) -> OrdSet<DoubleMove> {
    let mover = fugitive.piece();
    let tickets = fugitive.tickets();
    if !mover.may_hold_special_tickets() || !tickets.has(Ticket::Double) || rounds_remaining < 2 {
        return OrdSet::new();
    }

    let moves: OrdSet<DoubleMove> = single_moves(graph, occupied, fugitive)
        .into_iter()
        .flat_map(|first| {
            let midway = PieceState::new(mover, first.destination, tickets);
            single_moves(graph, occupied, &midway)
                .into_iter()
                .filter(move |second| can_pay_both(tickets, first.ticket, second.ticket))
                .filter_map(move |second| DoubleMove::chain(first, second))
        })
        .collect();

    trace!(source = %fugitive.location(), count = moves.len(), "generated double moves");
    moves
}

/// Check that one bank covers two legs. The same kind twice needs two.
fn can_pay_both(tickets: Tickets, first: Ticket, second: Ticket) -> bool {
    if first == second {
        tickets.has_at_least(first, 2)
    } else {
        tickets.has(first) && tickets.has(second)
    }
}

/// The fugitive's full move set: singles plus doubles.
#[must_use]
pub fn fugitive_moves<G: TransportGraph>(
    graph: &G,
    fugitive: &PieceState,
    seekers: &Vector<PieceState>,
    rounds_remaining: usize,
) -> OrdSet<Move> {
    if rounds_remaining == 0 {
        return OrdSet::new();
    }
    let occupied = occupied_by_seekers(seekers, fugitive.piece());
    let singles = single_moves(graph, &occupied, fugitive).into_iter().map(Move::Single);
    let doubles = double_moves(graph, &occupied, fugitive, rounds_remaining)
        .into_iter()
        .map(Move::Double);
    singles.chain(doubles).collect()
}

/// Single moves for one seeker. Seekers never get SECRET or DOUBLE moves.
#[must_use]
pub fn seeker_moves<G: TransportGraph>(
    graph: &G,
    seeker: &PieceState,
    seekers: &Vector<PieceState>,
) -> OrdSet<SingleMove> {
    let occupied = occupied_by_seekers(seekers, seeker.piece());
    single_moves(graph, &occupied, seeker)
}

/// Union of the single moves of every seeker in `pending`.
#[must_use]
pub fn pending_seeker_moves<G: TransportGraph>(
    graph: &G,
    seekers: &Vector<PieceState>,
    pending: &OrdSet<Piece>,
) -> OrdSet<Move> {
    seekers
        .iter()
        .filter(|s| pending.contains(&s.piece()))
        .flat_map(|s| seeker_moves(graph, s, seekers).into_iter().map(Move::Single))
        .collect()
}
