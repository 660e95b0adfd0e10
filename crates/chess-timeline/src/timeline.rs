//! Timeline data model - Linear session history with a cursor
//!
//! The timeline is an ordered sequence of positions reached during the
//! session, always starting with a fixed sentinel entry for the initial
//! position, plus a cursor identifying the position currently shown on the
//! board. It is linear by design: appending a move while the cursor sits in
//! the middle of the history truncates everything after the cursor first
//! (no redo branch, no variation tree).

use crate::annotation::Annotation;

/// Position payload of a timeline entry
///
/// The sentinel start entry carries no encoding of its own; every other entry
/// holds the full FEN produced by the rules engine after its move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionTag {
    /// Canonical initial position (entry 0 only)
    Start,
    /// Full position encoding produced by the rules engine
    Fen(String),
}

/// One reached position plus the move that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    pub position: PositionTag,
    pub move_label: String,
    pub annotation: Option<Annotation>,
}

impl TimelineEntry {
    /// The fixed sentinel entry at index 0
    pub fn start() -> Self {
        Self {
            position: PositionTag::Start,
            move_label: "Start".to_string(),
            annotation: None,
        }
    }

    /// Entry for a move the rules engine just applied
    pub fn after_move(fen: String, san: String) -> Self {
        Self {
            position: PositionTag::Fen(fen),
            move_label: san,
            annotation: None,
        }
    }
}

/// Ordered session history plus the cursor into it
///
/// Invariants, upheld by every method:
/// - the sequence is never empty; index 0 is always the sentinel start entry
/// - `cursor < len()` at all times
/// - the sentinel is never overwritten and never annotated
#[derive(Debug, Clone)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
    cursor: usize,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Timeline {
    /// Fresh history: single sentinel entry, cursor on it
    pub fn new() -> Self {
        Self {
            entries: vec![TimelineEntry::start()],
            cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; the sentinel entry is permanent
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&TimelineEntry> {
        self.entries.get(index)
    }

    /// The entry the cursor points at
    pub fn current(&self) -> &TimelineEntry {
        &self.entries[self.cursor]
    }

    /// Append a new entry after the cursor, destroying any redo branch
    ///
    /// Entries past the cursor are discarded in place before the append; the
    /// cursor then moves to the new tail.
    pub fn truncate_and_append(&mut self, entry: TimelineEntry) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(entry);
        self.cursor = self.entries.len() - 1;
    }

    /// Move the cursor, clamped to the valid range; returns the index landed on
    pub fn jump(&mut self, index: usize) -> usize {
        self.cursor = index.min(self.entries.len() - 1);
        self.cursor
    }

    /// Mark the entry under the cursor with a quality symbol
    ///
    /// Overwrites any prior annotation. No-op at index 0: the sentinel is not
    /// a move and is never annotated. Returns whether anything changed.
    pub fn annotate(&mut self, symbol: Annotation) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.entries[self.cursor].annotation = Some(symbol);
        true
    }

    /// Discard the whole history, back to the single sentinel entry
    pub fn reset(&mut self) {
        self.entries.clear();
        self.entries.push(TimelineEntry::start());
        self.cursor = 0;
    }

    /// History-panel label for an entry: "Start", "1. e4", "1... e5!", ...
    ///
    /// Odd indices are white moves ("N."), even non-zero indices black moves
    /// ("N..."); an annotation glyph is appended when present.
    pub fn label(&self, index: usize) -> Option<String> {
        let entry = self.entries.get(index)?;
        if index == 0 {
            return Some(entry.move_label.clone());
        }
        let number = index.div_ceil(2);
        let separator = if index % 2 == 1 { "." } else { "..." };
        let glyph = entry.annotation.map(Annotation::glyph).unwrap_or("");
        Some(format!(
            "{}{} {}{}",
            number, separator, entry.move_label, glyph
        ))
    }
}
