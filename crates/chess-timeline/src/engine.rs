//! Rules-engine adapter - Single source of truth for chess logic
//!
//! Wraps the shakmaty position as the authoritative game state. The adapter
//! is the only place the rules engine is consulted for:
//!
//! - Move validation and application (with notation for the history)
//! - Legal destination enumeration for the side to move
//! - Position encoding (FEN) in both directions
//!
//! The controller keeps exactly one [`LivePosition`] in lockstep with the
//! timeline cursor; nothing else mutates it.

use shakmaty::{
    fen::Fen, san::SanPlus, CastlingMode, Chess, Color, EnPassantMode, Position, Role, Square,
};
use std::collections::BTreeMap;
use tracing::debug;

use crate::error::{TimelineError, TimelineResult};

/// FEN of the canonical initial position, what the timeline's start sentinel
/// resolves to
pub const INITIAL_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Outcome of a legal gesture: the new encoding plus the move's notation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedMove {
    pub fen: String,
    pub san: String,
}

/// Live rules-engine position for one session
#[derive(Debug, Clone)]
pub struct LivePosition {
    pos: Chess,
}

impl Default for LivePosition {
    fn default() -> Self {
        Self::new()
    }
}

impl LivePosition {
    /// Canonical initial position
    pub fn new() -> Self {
        Self {
            pos: Chess::default(),
        }
    }

    /// Back to the canonical initial position
    pub fn reset(&mut self) {
        self.pos = Chess::default();
    }

    /// Side to move
    pub fn turn(&self) -> Color {
        self.pos.turn()
    }

    /// Serialize the current position
    pub fn fen(&self) -> String {
        Fen::from_position(self.pos.clone(), EnPassantMode::Legal).to_string()
    }

    /// Reload the live position from a stored encoding
    pub fn load(&mut self, fen: &str) -> TimelineResult<()> {
        let parsed: Fen = fen.parse().map_err(|_| TimelineError::InvalidFen {
            fen: fen.to_string(),
        })?;
        self.pos = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|_| TimelineError::InvalidFen {
                fen: fen.to_string(),
            })?;
        Ok(())
    }

    /// Validate and apply a drag gesture against the live position
    ///
    /// Promotion gestures default to queen, mirroring the board widget which
    /// offers no piece picker. Returns `None` for an illegal gesture and
    /// leaves the position untouched; the caller snaps the board back.
    pub fn apply(&mut self, from: Square, to: Square) -> Option<AppliedMove> {
        let candidate = self.pos.legal_moves().into_iter().find(|m| {
            m.from() == Some(from)
                && m.to() == to
                && (!m.is_promotion() || m.promotion() == Some(Role::Queen))
        })?;
        let san = SanPlus::from_move_and_play_unchecked(&mut self.pos, &candidate);
        let applied = AppliedMove {
            fen: self.fen(),
            san: san.to_string(),
        };
        debug!(san = %applied.san, "move applied");
        Some(applied)
    }

    /// Legal-destination map for the side to move
    ///
    /// Origin square to reachable destination squares; squares with no legal
    /// moves are omitted. This map is the sole mechanism constraining the
    /// board widget's drag gestures, so it is recomputed after every position
    /// change. Castles follow the engine's king-takes-rook encoding, which is
    /// also what gesture matching expects.
    pub fn legal_destinations(&self) -> BTreeMap<Square, Vec<Square>> {
        let mut dests: BTreeMap<Square, Vec<Square>> = BTreeMap::new();
        for m in self.pos.legal_moves() {
            if let Some(from) = m.from() {
                let targets = dests.entry(from).or_default();
                // the four promotion moves share one destination square
                if !targets.contains(&m.to()) {
                    targets.push(m.to());
                }
            }
        }
        dests
    }
}
