// Transient per-view state. Each view wraps one of these in an RwSignal;
// nothing here outlives the view that created it.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnHeaderState {
    pub edit_mode: bool,
}

impl ColumnHeaderState {
    pub fn enter_edit_mode(&mut self) {
        self.edit_mode = true;
    }

    pub fn exit_edit_mode(&mut self) {
        self.edit_mode = false;
    }

    pub fn drag_disabled(&self) -> bool {
        self.edit_mode
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCardState {
    pub edit_mode: bool,
    pub mouse_over: bool,
}

impl TaskCardState {
    pub fn toggle_edit_mode(&mut self) {
        self.edit_mode = !self.edit_mode;
        self.mouse_over = false;
    }

    // Blur can follow a keyboard exit, so leaving is idempotent
    pub fn exit_edit_mode(&mut self) {
        if self.edit_mode {
            self.toggle_edit_mode();
        }
    }

    pub fn pointer_enter(&mut self) {
        self.mouse_over = true;
    }

    pub fn pointer_leave(&mut self) {
        self.mouse_over = false;
    }

    pub fn shows_delete_button(&self) -> bool {
        self.mouse_over && !self.edit_mode
    }

    pub fn drag_disabled(&self) -> bool {
        self.edit_mode
    }
}

pub fn ends_title_edit(key: &str) -> bool {
    key == "Enter"
}

// Plain Enter inserts a newline in the content field
pub fn ends_content_edit(key: &str, shift: bool) -> bool {
    key == "Enter" && shift
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_clicks_restore_task_mode() {
        let mut state = TaskCardState::default();
        state.toggle_edit_mode();
        assert!(state.edit_mode);
        state.toggle_edit_mode();
        assert_eq!(state, TaskCardState::default());
    }

    #[test]
    fn exiting_twice_stays_out_of_edit_mode() {
        let mut state = TaskCardState::default();
        state.toggle_edit_mode();
        state.exit_edit_mode();
        state.exit_edit_mode();
        assert!(!state.edit_mode);
    }

    #[test]
    fn toggling_clears_hover() {
        let mut state = TaskCardState::default();
        state.pointer_enter();
        state.toggle_edit_mode();
        assert!(!state.mouse_over);
    }

    #[test]
    fn delete_button_needs_hover_and_no_edit_mode() {
        let mut state = TaskCardState::default();
        assert!(!state.shows_delete_button());

        state.pointer_enter();
        assert!(state.shows_delete_button());

        state.pointer_leave();
        assert!(!state.shows_delete_button());

        state.toggle_edit_mode();
        state.pointer_enter();
        assert!(!state.shows_delete_button(), "editing hides the button even when hovered");
    }

    #[test]
    fn column_edit_mode_disables_dragging() {
        let mut state = ColumnHeaderState::default();
        assert!(!state.drag_disabled());
        state.enter_edit_mode();
        assert!(state.drag_disabled());
        state.exit_edit_mode();
        assert!(!state.drag_disabled());
    }

    #[test]
    fn task_edit_mode_disables_dragging() {
        let mut state = TaskCardState::default();
        state.toggle_edit_mode();
        assert!(state.drag_disabled());
        state.toggle_edit_mode();
        assert!(!state.drag_disabled());
    }

    #[test]
    fn edit_exit_keys() {
        assert!(ends_title_edit("Enter"));
        assert!(!ends_title_edit("a"));
        assert!(ends_content_edit("Enter", true));
        assert!(!ends_content_edit("Enter", false));
        assert!(!ends_content_edit("Tab", true));
    }
}
