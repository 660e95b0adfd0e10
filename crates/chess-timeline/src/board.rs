//! Board-widget seam
//!
//! The widget accepts a configuration object on every (re)render:
//! `{ fen, turnColor, movable: { color, dests } }`. [`BoardConfig`] is that
//! object, serialized camelCase so it can be handed to the widget verbatim.
//! The [`BoardView`] trait is the render side of the seam; the gesture side
//! is the controller's `handle_gesture`, wired once at mount.

use serde::Serialize;
use shakmaty::Color;
use std::collections::BTreeMap;

/// Drag constraints for the side allowed to move
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Movable {
    pub color: &'static str,
    pub dests: BTreeMap<String, Vec<String>>,
}

/// Full widget configuration pushed after every position change
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardConfig {
    pub fen: String,
    pub turn_color: &'static str,
    pub movable: Movable,
}

/// Widget-side color name
pub fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "white",
        Color::Black => "black",
    }
}

/// Render side of the board-widget collaborator
pub trait BoardView {
    /// Re-render the widget with a fresh configuration
    fn set(&mut self, config: BoardConfig);
}
