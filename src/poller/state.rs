//! Poll loop state.

use serde_json::Value;

/// In-memory state owned by the poll loop.
///
/// Nothing here survives a restart; a fresh process starts a fresh window.
#[derive(Debug, Default)]
pub struct PollState {
    /// Lower bound of the next fetch window, seconds since epoch.
    from_date: i64,

    /// Most recently seen homework list. `None` until the first cycle has
    /// recorded one, so an initial non-empty list always counts as a
    /// change.
    last_seen: Option<Vec<Value>>,
}

impl PollState {
    /// Creates state with the fetch window starting at `from_date`.
    #[must_use]
    pub fn new(from_date: i64) -> Self {
        Self {
            from_date,
            last_seen: None,
        }
    }

    /// Current lower bound of the fetch window.
    #[must_use]
    pub fn from_date(&self) -> i64 {
        self.from_date
    }

    /// Records `homeworks` and reports whether they differ from the last
    /// remembered list.
    ///
    /// The whole list is compared, so a change in any record (or in the
    /// record count) registers exactly once.
    pub fn note_homeworks(&mut self, homeworks: &[Value]) -> bool {
        let changed = self.last_seen.as_deref() != Some(homeworks);
        if changed {
            self.last_seen = Some(homeworks.to_vec());
        }
        changed
    }

    /// Advances the fetch window to the server-reported timestamp, when
    /// the server provided one.
    pub fn advance_window(&mut self, current_date: Option<i64>) {
        if let Some(timestamp) = current_date {
            self.from_date = timestamp;
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_first_nonempty_list_is_a_change() {
        let mut state = PollState::new(0);
        let homeworks = [json!({ "homework_name": "hw1", "status": "approved" })];
        assert!(state.note_homeworks(&homeworks));
    }

    #[test]
    fn test_unchanged_list_is_not_a_change() {
        let mut state = PollState::new(0);
        let homeworks = [json!({ "homework_name": "hw1", "status": "approved" })];
        assert!(state.note_homeworks(&homeworks));
        assert!(!state.note_homeworks(&homeworks));
    }

    #[test]
    fn test_status_flip_is_a_change() {
        let mut state = PollState::new(0);
        let reviewing = [json!({ "homework_name": "hw1", "status": "reviewing" })];
        let approved = [json!({ "homework_name": "hw1", "status": "approved" })];
        assert!(state.note_homeworks(&reviewing));
        assert!(state.note_homeworks(&approved));
        assert!(!state.note_homeworks(&approved));
    }

    #[test]
    fn test_empty_list_participates_in_comparison() {
        let mut state = PollState::new(0);
        let homeworks = [json!({ "homework_name": "hw1", "status": "approved" })];
        assert!(state.note_homeworks(&[]));
        assert!(!state.note_homeworks(&[]));
        assert!(state.note_homeworks(&homeworks));
    }

    #[test]
    fn test_window_advances_only_when_reported() {
        let mut state = PollState::new(100);
        state.advance_window(None);
        assert_eq!(state.from_date(), 100);
        state.advance_window(Some(1000));
        assert_eq!(state.from_date(), 1000);
    }
}
