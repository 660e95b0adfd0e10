//! Game timeline controller - Session move history without rendering coupling
//!
//! Owns the authoritative move-by-move history of one chess session and keeps
//! two external collaborators synchronized:
//!
//! - **Rules engine** (shakmaty): validates and applies candidate moves,
//!   produces position encodings and move notation, enumerates legal
//!   destinations. Wrapped by [`LivePosition`]; never re-implemented here.
//! - **Board widget**: renders a position and emits drag gestures. Reached
//!   through the [`BoardView`] seam; the widget's gesture callback is wired to
//!   [`GameTimelineController::handle_gesture`] once at mount.
//!
//! # Architecture
//!
//! The history is linear, not a tree: jumping back and then moving destroys
//! the redo branch. The live rules-engine position and the timeline cursor
//! move in strict lockstep and are mutated only by the controller operations
//! (`handle_gesture`, `jump_to`, `reset`, `annotate` and the clamped
//! navigation helpers), never by rendering code.
//!
//! # Module Structure
//!
//! - `controller` - The four session operations plus clamped navigation
//! - `timeline` - Entry/cursor data model and history labels
//! - `engine` - Rules-engine adapter (apply, legal destinations, FEN)
//! - `board` - Board-widget configuration payload and view seam
//! - `annotation` - Closed set of move-quality markers

pub mod annotation;
pub mod board;
pub mod controller;
pub mod engine;
pub mod error;
pub mod timeline;


// Re-export the session-facing surface, plus the rules-engine types that
// appear in it
pub use shakmaty::{Color, Square};

pub use annotation::Annotation;
pub use board::{BoardConfig, BoardView, Movable};
pub use controller::GameTimelineController;
pub use engine::{AppliedMove, LivePosition, INITIAL_FEN};
pub use error::{TimelineError, TimelineResult};
pub use timeline::{PositionTag, Timeline, TimelineEntry};
