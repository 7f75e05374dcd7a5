//! Linear undo/redo history of full-state snapshots

use crate::record::GameRecord;

/// Undo and redo stacks. Entries are owned copies, never shared with the
/// live state.
#[derive(Clone, Debug, Default)]
pub struct History {
    undo: Vec<GameRecord>,
    redo: Vec<GameRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember the state before a mutation. Any redo branch is dropped.
    pub fn record(&mut self, before: GameRecord) {
        self.undo.push(before);
        self.redo.clear();
    }

    /// Swap `current` for the latest undo snapshot
    pub fn undo(&mut self, current: GameRecord) -> Option<GameRecord> {
        let previous = self.undo.pop()?;
        self.redo.push(current);
        Some(previous)
    }

    /// Swap `current` for the latest redo snapshot
    pub fn redo(&mut self, current: GameRecord) -> Option<GameRecord> {
        let next = self.redo.pop()?;
        self.undo.push(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameType;
    use crate::game::GameState;

    fn snapshot(turn: u32) -> GameRecord {
        let mut record = GameState::empty(GameType::OneVsOne, None).to_record();
        record.turn = turn;
        record
    }

    #[test]
    fn test_empty_history() {
        let mut history = History::new();
        assert!(!history.can_undo());
        assert!(history.undo(snapshot(0)).is_none());
        assert!(history.redo(snapshot(0)).is_none());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_then_redo() {
        let mut history = History::new();
        history.record(snapshot(0));
        history.record(snapshot(1));

        let restored = history.undo(snapshot(2)).unwrap();
        assert_eq!(restored.turn, 1);
        assert!(history.can_redo());

        let restored = history.redo(snapshot(1)).unwrap();
        assert_eq!(restored.turn, 2);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_record_clears_redo() {
        let mut history = History::new();
        history.record(snapshot(0));
        history.undo(snapshot(1));
        assert!(history.can_redo());

        history.record(snapshot(0));
        assert!(!history.can_redo());
        assert!(history.can_undo());
    }
}
