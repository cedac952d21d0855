/// Single-item selection over a list whose length may change under it.
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    selected_index: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn set(&mut self, index: Option<usize>) {
        self.selected_index = index;
    }

    pub fn next(&mut self, max_count: usize) {
        if max_count == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(idx) => (idx + 1).min(max_count - 1),
            None => 0,
        });
    }

    pub fn prev(&mut self) {
        self.selected_index = Some(match self.selected_index {
            Some(idx) => idx.saturating_sub(1),
            None => 0,
        });
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected_index == Some(index)
    }

    /// Keep the selection valid after the list shrank or emptied.
    pub fn clamp(&mut self, max_count: usize) {
        if let Some(idx) = self.selected_index {
            if max_count == 0 {
                self.selected_index = None;
            } else if idx >= max_count {
                self.selected_index = Some(max_count - 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_selects_first_then_advances() {
        let mut selection = SelectionState::new();
        selection.next(3);
        assert_eq!(selection.get(), Some(0));
        selection.next(3);
        assert_eq!(selection.get(), Some(1));
        selection.set(Some(2));
        selection.next(3);
        assert_eq!(selection.get(), Some(2));
    }

    #[test]
    fn next_on_empty_list_keeps_none() {
        let mut selection = SelectionState::new();
        selection.next(0);
        assert!(selection.get().is_none());
    }

    #[test]
    fn prev_stops_at_zero() {
        let mut selection = SelectionState::new();
        selection.set(Some(2));
        selection.prev();
        assert_eq!(selection.get(), Some(1));
        selection.prev();
        selection.prev();
        assert_eq!(selection.get(), Some(0));
    }

    #[test]
    fn clamp_after_shrink() {
        let mut selection = SelectionState::new();
        selection.set(Some(7));
        selection.clamp(3);
        assert_eq!(selection.get(), Some(2));
        selection.clamp(0);
        assert!(selection.get().is_none());
    }
}
