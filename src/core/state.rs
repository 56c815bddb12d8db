//! Game state: the immutable value every transition produces.
//!
//! ## Lifecycle
//!
//! - `GameState::build` validates a setup plus initial pieces and produces
//!   the first state.
//! - `GameState::advance` returns a *new* state; the receiver is untouched,
//!   so callers can fork any state into as many futures as they like.
//!
//! ## Cached results
//!
//! Available moves and the winner are computed once, when the state is
//! produced, and stored. Queries never recompute or overwrite them.
//!
//! ## Hidden information
//!
//! No query exposes the fugitive's location. Hosts learn it only through
//! revealed travel-log entries (or, on the fugitive's own turn, through the
//! sources of its available moves).
//!
//! ## Sharing
//!
//! All collections are `im` persistent structures and the setup is behind an
//! `Arc`, so cloning a state is cheap and states may be shared across
//! threads freely.

use im::{OrdSet, Vector};
use rustc_hash::FxHashSet;
use tracing::{debug, instrument, warn};

use super::error::{ConfigError, IllegalMove};
use super::location::Location;
use super::log::TravelLog;
use super::moves::Move;
use super::piece::{Colour, Piece};
use super::player::PieceState;
use super::setup::GameSetup;
use super::ticket::Tickets;
use crate::graph::{Graph, TransportGraph};
use crate::rules::{evaluate, fugitive_moves, pending_seeker_moves, Position, Side};

/// Complete game state.
#[derive(Debug, PartialEq, Eq)]
pub struct GameState<G = Graph> {
    setup: GameSetup<G>,
    fugitive: PieceState,
    /// Seekers in seating order. Locations are pairwise distinct.
    seekers: Vector<PieceState>,
    log: TravelLog,
    /// Pieces still to act this round.
    to_move: OrdSet<Piece>,
    /// Moves available to `to_move`. Empty once the game is over.
    moves: OrdSet<Move>,
    /// Non-empty exactly when the game is over.
    winner: OrdSet<Piece>,
}

impl<G> Clone for GameState<G> {
    fn clone(&self) -> Self {
        Self {
            setup: self.setup.clone(),
            fugitive: self.fugitive,
            seekers: self.seekers.clone(),
            log: self.log.clone(),
            to_move: self.to_move.clone(),
            moves: self.moves.clone(),
            winner: self.winner.clone(),
        }
    }
}

impl<G: TransportGraph> GameState<G> {
    /// Build the initial state.
    ///
    /// The fugitive moves first. Fails if the pieces do not form a valid
    /// game on this setup; see `ConfigError` for the conditions.
    #[instrument(skip_all)]
    pub fn build(
        setup: GameSetup<G>,
        fugitive: PieceState,
        seekers: impl IntoIterator<Item = PieceState>,
    ) -> Result<Self, ConfigError> {
        let seekers: Vector<PieceState> = seekers.into_iter().collect();
        validate(&setup, &fugitive, &seekers)?;

        debug!(
            seekers = seekers.len(),
            rounds = setup.round_count(),
            "built initial game state"
        );
        Ok(Self::settle(
            setup,
            fugitive,
            seekers,
            TravelLog::new(),
            OrdSet::unit(Piece::Fugitive),
        ))
    }

    /// Apply `mv` and return the resulting state.
    ///
    /// Fails if the game is over or `mv` is not one of
    /// [`available_moves`](Self::available_moves). On failure nothing changes.
    #[instrument(skip(self), fields(round = self.round()))]
    pub fn advance(&self, mv: &Move) -> Result<Self, IllegalMove> {
        if self.is_over() {
            warn!(%mv, "rejected move after game end");
            return Err(IllegalMove::GameOver(*mv));
        }
        if !self.moves.contains(mv) {
            warn!(%mv, "rejected unavailable move");
            return Err(IllegalMove::NotAvailable(*mv));
        }

        let next = match mv.piece() {
            Piece::Fugitive => self.advance_fugitive(mv),
            Piece::Seeker(_) => self.advance_seeker(mv),
        }
        .ok_or(IllegalMove::NotAvailable(*mv))?;

        debug!(%mv, "move applied");
        if let Some(side) = next.winning_side() {
            debug!(%side, round = next.round(), "game over");
        }
        Ok(next)
    }

    fn advance_fugitive(&self, mv: &Move) -> Option<Self> {
        let fugitive = self.fugitive.travel(mv)?;

        let log = mv.legs().into_iter().fold(self.log.clone(), |log, leg| {
            let reveal = self.setup.is_reveal(log.len());
            log.append(leg.ticket, leg.destination, reveal)
        });
        let to_move = self.seekers.iter().map(PieceState::piece).collect();

        Some(Self::settle(
            self.setup.clone(),
            fugitive,
            self.seekers.clone(),
            log,
            to_move,
        ))
    }

    fn advance_seeker(&self, mv: &Move) -> Option<Self> {
        let piece = mv.piece();
        let index = self.seekers.iter().position(|s| s.piece() == piece)?;
        let moved = self.seekers[index].travel(mv)?;
        let seekers = self.seekers.update(index, moved);

        // Spent travel tickets go to the fugitive.
        let fugitive = mv
            .tickets()
            .into_iter()
            .filter(|t| t.is_travel())
            .fold(self.fugitive, |fugitive, ticket| fugitive.receive(ticket));

        // The round ends only once no pending seeker can move.
        let remaining = self.to_move.without(&piece);
        let stuck = pending_seeker_moves(self.setup.graph(), &seekers, &remaining).is_empty();
        let to_move = if stuck {
            debug!(round = self.round(), "seekers finished round");
            OrdSet::unit(Piece::Fugitive)
        } else {
            remaining
        };

        Some(Self::settle(
            self.setup.clone(),
            fugitive,
            seekers,
            self.log.clone(),
            to_move,
        ))
    }

    /// Compute moves and winner for freshly assembled parts.
    fn settle(
        setup: GameSetup<G>,
        fugitive: PieceState,
        seekers: Vector<PieceState>,
        log: TravelLog,
        to_move: OrdSet<Piece>,
    ) -> Self {
        let graph = setup.graph();
        let round = log.len();
        let round_count = setup.round_count();

        let available = if to_move.contains(&Piece::Fugitive) {
            fugitive_moves(graph, &fugitive, &seekers, round_count.saturating_sub(round))
        } else {
            pending_seeker_moves(graph, &seekers, &to_move)
        };

        let side = evaluate(&Position {
            fugitive: &fugitive,
            seekers: &seekers,
            to_move: &to_move,
            round,
            round_count,
            available: &available,
        });
        let (moves, winner) = match side {
            Some(side) => (OrdSet::new(), side.pieces(&seekers)),
            None => (available, OrdSet::new()),
        };

        Self {
            setup,
            fugitive,
            seekers,
            log,
            to_move,
            moves,
            winner,
        }
    }
}

impl<G> GameState<G> {
    #[must_use]
    pub fn setup(&self) -> &GameSetup<G> {
        &self.setup
    }

    /// Every piece in the game.
    #[must_use]
    pub fn players(&self) -> OrdSet<Piece> {
        self.seekers
            .iter()
            .map(PieceState::piece)
            .chain(std::iter::once(Piece::Fugitive))
            .collect()
    }

    /// Where the `colour` seeker stands, if it is playing.
    #[must_use]
    pub fn seeker_location(&self, colour: Colour) -> Option<Location> {
        self.seeker(colour).map(PieceState::location)
    }

    /// Ticket bank of `piece`, if it is playing.
    #[must_use]
    pub fn tickets(&self, piece: Piece) -> Option<Tickets> {
        match piece {
            Piece::Fugitive => Some(self.fugitive.tickets()),
            Piece::Seeker(colour) => self.seeker(colour).map(PieceState::tickets),
        }
    }

    /// The fugitive's travel log, concealed per the round schedule.
    #[must_use]
    pub fn travel_log(&self) -> &TravelLog {
        &self.log
    }

    /// Winning pieces. Empty while the game continues.
    #[must_use]
    pub fn winner(&self) -> &OrdSet<Piece> {
        &self.winner
    }

    /// The winning side, if the game is over.
    #[must_use]
    pub fn winning_side(&self) -> Option<Side> {
        if self.winner.contains(&Piece::Fugitive) {
            Some(Side::Fugitive)
        } else if self.winner.is_empty() {
            None
        } else {
            Some(Side::Seekers)
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        !self.winner.is_empty()
    }

    /// Every legal move for the pieces to act. Empty once the game is over.
    #[must_use]
    pub fn available_moves(&self) -> &OrdSet<Move> {
        &self.moves
    }

    /// Pieces still to act this round.
    #[must_use]
    pub fn to_move(&self) -> &OrdSet<Piece> {
        &self.to_move
    }

    /// Rounds played so far.
    #[must_use]
    pub fn round(&self) -> usize {
        self.log.len()
    }

    fn seeker(&self, colour: Colour) -> Option<&PieceState> {
        self.seekers
            .iter()
            .find(|s| s.piece() == Piece::Seeker(colour))
    }
}

/// Check initial pieces against the setup.
fn validate<G: TransportGraph>(
    setup: &GameSetup<G>,
    fugitive: &PieceState,
    seekers: &Vector<PieceState>,
) -> Result<(), ConfigError> {
    if !fugitive.piece().is_fugitive() {
        return Err(ConfigError::NotAFugitive {
            piece: fugitive.piece(),
        });
    }
    if seekers.is_empty() {
        return Err(ConfigError::NoSeekers);
    }

    let mut locations = FxHashSet::default();
    let mut colours = FxHashSet::default();
    for seeker in seekers {
        let Some(colour) = seeker.piece().colour() else {
            return Err(ConfigError::NotASeeker);
        };
        if !locations.insert(seeker.location()) {
            return Err(ConfigError::OverlappingSeekers {
                location: seeker.location(),
            });
        }
        if !colours.insert(colour) {
            return Err(ConfigError::DuplicateSeeker { colour });
        }
        if let Some(ticket) = seeker.special_ticket() {
            return Err(ConfigError::SeekerHoldsSpecialTicket {
                piece: seeker.piece(),
                ticket,
            });
        }
    }

    let graph = setup.graph();
    if let Some(stray) = std::iter::once(fugitive)
        .chain(seekers.iter())
        .find(|p| !graph.contains(p.location()))
    {
        return Err(ConfigError::LocationNotInGraph {
            piece: stray.piece(),
            location: stray.location(),
        });
    }
    Ok(())
}
