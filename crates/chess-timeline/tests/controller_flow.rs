//! Session Flow Integration Tests
//!
//! Drives a full controller session against a recording board widget:
//! - Gesture handling (legal and illegal)
//! - History jumps and redo-branch truncation
//! - Annotation rules
//! - Navigation clamping and reset

use chess_timeline::{
    Annotation, BoardConfig, BoardView, GameTimelineController, PositionTag, Square, INITIAL_FEN,
};

/// Board-widget double that records every configuration pushed to it
#[derive(Default)]
struct RecordingBoard {
    configs: Vec<BoardConfig>,
}

impl BoardView for RecordingBoard {
    fn set(&mut self, config: BoardConfig) {
        self.configs.push(config);
    }
}

fn sq(name: &str) -> Square {
    name.parse().expect("valid square name")
}

fn mount() -> GameTimelineController<RecordingBoard> {
    GameTimelineController::mount(RecordingBoard::default())
}

fn last_config(controller: &GameTimelineController<RecordingBoard>) -> &BoardConfig {
    controller.view().configs.last().expect("config was pushed")
}

// ============================================================================
// Mount
// ============================================================================

#[test]
fn test_mount_pushes_initial_configuration() {
    let controller = mount();

    assert_eq!(controller.view().configs.len(), 1);
    let config = last_config(&controller);
    assert_eq!(config.fen, INITIAL_FEN);
    assert_eq!(config.turn_color, "white");
    assert_eq!(config.movable.color, "white");

    let total: usize = config.movable.dests.values().map(Vec::len).sum();
    assert_eq!(total, 20, "Widget is constrained to the 20 opening moves");
}

// ============================================================================
// Gesture Handling
// ============================================================================

#[test]
fn test_legal_gesture_appends_and_reconfigures() {
    let mut controller = mount();

    controller.handle_gesture(sq("e2"), sq("e4"));

    let timeline = controller.timeline();
    assert_eq!(timeline.len(), 2);
    assert_eq!(timeline.cursor(), 1);
    assert_eq!(timeline.current().move_label, "e4");
    assert_eq!(timeline.label(1).unwrap(), "1. e4");

    let config = last_config(&controller);
    assert_eq!(config.turn_color, "black");
    assert_eq!(config.movable.color, "black");
    assert!(
        config.movable.dests.contains_key("e7"),
        "Constraints now describe black's moves"
    );
}

#[test]
fn test_illegal_gesture_snaps_back_without_history_change() {
    let mut controller = mount();
    controller.handle_gesture(sq("e2"), sq("e4"));
    let pushes_before = controller.view().configs.len();
    let fen_before = last_config(&controller).fen.clone();

    // drag from an empty square
    controller.handle_gesture(sq("e5"), sq("e6"));

    assert_eq!(controller.timeline().len(), 2, "Timeline untouched");
    assert_eq!(controller.timeline().cursor(), 1);
    assert_eq!(
        controller.view().configs.len(),
        pushes_before + 1,
        "Board was re-pushed for the visual snap-back"
    );
    assert_eq!(last_config(&controller).fen, fen_before);
}

// ============================================================================
// History Jumps
// ============================================================================

#[test]
fn test_jump_to_start_reloads_initial_position() {
    let mut controller = mount();
    controller.handle_gesture(sq("e2"), sq("e4"));

    controller.jump_to(0).unwrap();

    assert_eq!(controller.timeline().cursor(), 0);
    assert_eq!(last_config(&controller).fen, INITIAL_FEN);
    assert_eq!(last_config(&controller).turn_color, "white");
}

#[test]
fn test_move_after_jump_truncates_redo_branch() {
    let mut controller = mount();
    controller.handle_gesture(sq("e2"), sq("e4"));
    controller.jump_to(0).unwrap();

    controller.handle_gesture(sq("d2"), sq("d4"));

    let timeline = controller.timeline();
    assert_eq!(timeline.len(), 2, "The e4 entry was discarded");
    assert_eq!(timeline.cursor(), 1);
    assert_eq!(timeline.current().move_label, "d4");
    assert_eq!(
        timeline.get(1).unwrap().position,
        PositionTag::Fen("rnbqkbnr/pppppppp/8/8/3P4/8/8/RNBQKBNR b KQkq - 0 1".to_string())
    );
}

#[test]
fn test_jump_is_idempotent_in_effect() {
    let mut controller = mount();
    controller.handle_gesture(sq("e2"), sq("e4"));

    controller.jump_to(1).unwrap();
    let first = last_config(&controller).clone();
    controller.jump_to(1).unwrap();

    assert_eq!(*last_config(&controller), first);
    assert_eq!(controller.timeline().cursor(), 1);
}

// ============================================================================
// Navigation Clamping
// ============================================================================

#[test]
fn test_step_back_clamps_at_start() {
    let mut controller = mount();

    controller.step_back().unwrap();

    assert_eq!(controller.timeline().cursor(), 0);
    assert_eq!(last_config(&controller).fen, INITIAL_FEN);
}

#[test]
fn test_step_forward_clamps_at_tail() {
    let mut controller = mount();
    controller.handle_gesture(sq("e2"), sq("e4"));

    controller.step_forward().unwrap();
    assert_eq!(controller.timeline().cursor(), 1, "Already at the tail");

    controller.step_back().unwrap();
    assert_eq!(controller.timeline().cursor(), 0);
    controller.step_forward().unwrap();
    assert_eq!(controller.timeline().cursor(), 1);
}

// ============================================================================
// Annotation
// ============================================================================

#[test]
fn test_annotate_current_move_and_overwrite() {
    let mut controller = mount();
    controller.handle_gesture(sq("e2"), sq("e4"));

    controller.annotate(Annotation::Brilliant);
    assert_eq!(
        controller.timeline().current().annotation,
        Some(Annotation::Brilliant)
    );
    assert_eq!(controller.timeline().label(1).unwrap(), "1. e4!!");

    controller.annotate(Annotation::Mistake);
    assert_eq!(
        controller.timeline().current().annotation,
        Some(Annotation::Mistake)
    );
}

#[test]
fn test_annotate_at_sentinel_is_a_no_op() {
    let mut controller = mount();
    controller.handle_gesture(sq("e2"), sq("e4"));
    controller.jump_to(0).unwrap();
    let pushes_before = controller.view().configs.len();

    controller.annotate(Annotation::Good);

    assert!(controller.timeline().get(0).unwrap().annotation.is_none());
    assert_eq!(
        controller.view().configs.len(),
        pushes_before,
        "Annotation never touches the board widget"
    );
}

// ============================================================================
// Reset
// ============================================================================

#[test]
fn test_reset_discards_session() {
    let mut controller = mount();
    controller.handle_gesture(sq("e2"), sq("e4"));
    controller.handle_gesture(sq("e7"), sq("e5"));
    controller.annotate(Annotation::Good);

    controller.reset();

    let timeline = controller.timeline();
    assert_eq!(timeline.len(), 1);
    assert_eq!(timeline.cursor(), 0);
    assert_eq!(timeline.current().position, PositionTag::Start);
    assert_eq!(last_config(&controller).fen, INITIAL_FEN);
    assert_eq!(last_config(&controller).turn_color, "white");
}
