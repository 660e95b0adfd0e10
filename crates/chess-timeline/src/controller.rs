//! Game timeline controller - The session operations
//!
//! Mediates between the rules engine and the board widget. All four session
//! operations (`handle_gesture`, `jump_to`, `reset`, `annotate`) plus the
//! clamped navigation helpers live here; they are the only code that mutates
//! the live position or the cursor, keeping the two in lockstep.
//!
//! Everything runs synchronously on the caller's thread in response to a
//! gesture or a button click; there is no background work to cancel.

use shakmaty::Square;
use tracing::debug;

use crate::annotation::Annotation;
use crate::board::{color_name, BoardConfig, BoardView, Movable};
use crate::engine::LivePosition;
use crate::error::TimelineResult;
use crate::timeline::{PositionTag, Timeline, TimelineEntry};

/// One mounted session: live position, history, and the widget handle
pub struct GameTimelineController<V: BoardView> {
    live: LivePosition,
    timeline: Timeline,
    view: V,
}

impl<V: BoardView> GameTimelineController<V> {
    /// Mount a fresh session and push the initial configuration to the widget
    pub fn mount(view: V) -> Self {
        let mut controller = Self {
            live: LivePosition::new(),
            timeline: Timeline::new(),
            view,
        };
        controller.push_config();
        controller
    }

    /// Completed drag gesture from the board widget
    ///
    /// Legal: append to the timeline (truncating any redo branch) and push
    /// the new position with fresh drag constraints. Illegal: re-push the
    /// unchanged position so the dragged piece snaps back; no error is
    /// raised and the timeline is untouched.
    pub fn handle_gesture(&mut self, from: Square, to: Square) {
        match self.live.apply(from, to) {
            Some(applied) => {
                self.timeline
                    .truncate_and_append(TimelineEntry::after_move(applied.fen, applied.san));
                self.push_config();
            }
            None => {
                debug!(%from, %to, "illegal gesture, snapping back");
                self.push_config();
            }
        }
    }

    /// Show the position at a history index
    ///
    /// The index is clamped to the timeline bounds; the live position is
    /// reloaded from the entry (the start sentinel resolves to the initial
    /// position) and the widget re-rendered. Jumping to the current cursor
    /// re-pushes identical state, which is harmless.
    pub fn jump_to(&mut self, index: usize) -> TimelineResult<()> {
        let landed = self.timeline.jump(index);
        match &self.timeline.current().position {
            PositionTag::Start => self.live.reset(),
            PositionTag::Fen(fen) => self.live.load(fen)?,
        }
        debug!(index = landed, "jumped to history entry");
        self.push_config();
        Ok(())
    }

    /// Previous position, clamped at the start
    pub fn step_back(&mut self) -> TimelineResult<()> {
        self.jump_to(self.timeline.cursor().saturating_sub(1))
    }

    /// Next position, clamped at the tail
    pub fn step_forward(&mut self) -> TimelineResult<()> {
        self.jump_to(self.timeline.cursor() + 1)
    }

    /// Discard the session history and start over from the initial position
    pub fn reset(&mut self) {
        self.live.reset();
        self.timeline.reset();
        self.push_config();
    }

    /// Mark the currently shown move; data-only, the widget is not touched
    pub fn annotate(&mut self, symbol: Annotation) {
        self.timeline.annotate(symbol);
    }

    /// Widget configuration derived from the current live position
    pub fn current_config(&self) -> BoardConfig {
        let turn = color_name(self.live.turn());
        let dests = self
            .live
            .legal_destinations()
            .into_iter()
            .map(|(from, targets)| {
                let targets = targets.into_iter().map(|s| s.to_string()).collect();
                (from.to_string(), targets)
            })
            .collect();
        BoardConfig {
            fen: self.live.fen(),
            turn_color: turn,
            movable: Movable { color: turn, dests },
        }
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    fn push_config(&mut self) {
        let config = self.current_config();
        self.view.set(config);
    }
}
