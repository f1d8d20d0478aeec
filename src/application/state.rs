//! Application state management for the terminal to-do list.
//!
//! This module contains the main application state and mode management
//! for the terminal user interface.

use crate::domain::{apply, TaskEvent, TaskList, TaskRecord};

/// Represents the current mode of the application.
///
/// The application can be in different modes that determine how user input
/// is interpreted and what UI elements are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Normal navigation mode - arrow keys move selection, shortcuts available
    Normal,
    /// The new-task input field is focused and receiving keystrokes
    AddingTask,
    /// The selected task's text is being edited
    EditingTask,
    /// Help screen is displayed
    Help,
}

/// Main application state containing the task list and UI state.
///
/// This structure holds all the data needed to render the terminal UI
/// and manage user interactions with the to-do list. The task list itself
/// is only ever replaced wholesale through [`dispatch`](App::dispatch);
/// everything else here is view bookkeeping.
///
/// # Examples
///
/// ```
/// use ttodo::application::{App, AppMode};
///
/// let app = App::default();
/// assert_eq!(app.selected, 0);
/// assert!(matches!(app.mode, AppMode::Normal));
/// ```
#[derive(Debug)]
pub struct App {
    /// The task list snapshot currently displayed
    pub list: TaskList,
    /// Current application mode
    pub mode: AppMode,
    /// Currently selected task row (zero-based)
    pub selected: usize,
    /// First visible task row in the viewport
    pub scroll: usize,
    /// Edit buffer for task-text editing mode
    pub edit_buffer: String,
    /// Cursor position within the active input buffer
    pub cursor_position: usize,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// Scroll position in help text
    pub help_scroll: usize,
    /// Viewport height in task rows (for scrolling calculations)
    pub viewport_rows: usize,
}

impl Default for App {
    fn default() -> Self {
        Self {
            list: TaskList::default(),
            mode: AppMode::Normal,
            selected: 0,
            scroll: 0,
            edit_buffer: String::new(),
            cursor_position: 0,
            status_message: None,
            help_scroll: 0,
            viewport_rows: 20,
        }
    }
}

impl App {
    /// Routes an event through the pure transition function and commits
    /// the resulting snapshot.
    ///
    /// On failure the current snapshot is kept and the error is surfaced
    /// as a status message, so a stale id degrades to a visible no-op.
    pub fn dispatch(&mut self, event: TaskEvent) {
        match apply(&self.list, event) {
            Ok(next) => self.list = next,
            Err(err) => self.status_message = Some(err.to_string()),
        }
    }

    /// Returns the task record under the selection cursor, if any.
    pub fn selected_task(&self) -> Option<&TaskRecord> {
        self.list.get(self.selected)
    }

    /// Moves the selection cursor up one row.
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.ensure_cursor_visible();
        }
    }

    /// Moves the selection cursor down one row.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.list.len() {
            self.selected += 1;
            self.ensure_cursor_visible();
        }
    }

    /// Toggles the completed flag of the selected task.
    pub fn toggle_selected(&mut self) {
        if let Some(task) = self.selected_task() {
            let event = TaskEvent::CheckToggled {
                id: task.id,
                checked: !task.completed,
            };
            self.dispatch(event);
        }
    }

    /// Switches focus to the new-task input field.
    ///
    /// The field content lives in the task list snapshot, not here, so
    /// whatever was typed before is still present.
    pub fn start_adding(&mut self) {
        self.mode = AppMode::AddingTask;
        self.cursor_position = self.list.pending_input.len();
        self.status_message = None;
    }

    /// Submits the new-task field and returns focus to the list.
    ///
    /// The new task lands at the top of the list, so the selection cursor
    /// moves there. Submitting an empty field is accepted.
    pub fn finish_adding(&mut self) {
        self.dispatch(TaskEvent::Submitted);
        self.mode = AppMode::Normal;
        self.cursor_position = 0;
        self.selected = 0;
        self.ensure_cursor_visible();
    }

    /// Returns focus to the list without submitting.
    ///
    /// The pending input is deliberately kept; refocusing the field
    /// resumes where the user left off.
    pub fn cancel_adding(&mut self) {
        self.mode = AppMode::Normal;
        self.cursor_position = 0;
    }

    /// Inserts a character into the new-task field at the cursor.
    ///
    /// The field is controlled: the keystroke is turned into a full
    /// replacement string and dispatched, never buffered locally.
    pub fn pending_insert(&mut self, c: char) {
        let mut text = self.list.pending_input.clone();
        text.insert(self.cursor_position, c);
        self.cursor_position += c.len_utf8();
        self.dispatch(TaskEvent::InputChanged(text));
    }

    /// Removes the character before the cursor in the new-task field.
    pub fn pending_backspace(&mut self) {
        let start = prev_char_boundary(&self.list.pending_input, self.cursor_position);
        if start < self.cursor_position {
            let mut text = self.list.pending_input.clone();
            text.remove(start);
            self.cursor_position = start;
            self.dispatch(TaskEvent::InputChanged(text));
        }
    }

    /// Removes the character under the cursor in the new-task field.
    pub fn pending_delete(&mut self) {
        if self.cursor_position < self.list.pending_input.len() {
            let mut text = self.list.pending_input.clone();
            text.remove(self.cursor_position);
            self.dispatch(TaskEvent::InputChanged(text));
        }
    }

    /// Moves the new-task field cursor one character left.
    pub fn pending_cursor_left(&mut self) {
        self.cursor_position = prev_char_boundary(&self.list.pending_input, self.cursor_position);
    }

    /// Moves the new-task field cursor one character right.
    pub fn pending_cursor_right(&mut self) {
        self.cursor_position = next_char_boundary(&self.list.pending_input, self.cursor_position);
    }

    /// Inserts a character into the edit buffer at the cursor.
    pub fn edit_insert(&mut self, c: char) {
        self.edit_buffer.insert(self.cursor_position, c);
        self.cursor_position += c.len_utf8();
    }

    /// Removes the character before the cursor in the edit buffer.
    pub fn edit_backspace(&mut self) {
        let start = prev_char_boundary(&self.edit_buffer, self.cursor_position);
        if start < self.cursor_position {
            self.edit_buffer.remove(start);
            self.cursor_position = start;
        }
    }

    /// Removes the character under the cursor in the edit buffer.
    pub fn edit_delete(&mut self) {
        if self.cursor_position < self.edit_buffer.len() {
            self.edit_buffer.remove(self.cursor_position);
        }
    }

    /// Moves the edit buffer cursor one character left.
    pub fn edit_cursor_left(&mut self) {
        self.cursor_position = prev_char_boundary(&self.edit_buffer, self.cursor_position);
    }

    /// Moves the edit buffer cursor one character right.
    pub fn edit_cursor_right(&mut self) {
        self.cursor_position = next_char_boundary(&self.edit_buffer, self.cursor_position);
    }

    /// Switches to task-text editing mode for the selected task.
    ///
    /// Loads the task's current text into the edit buffer and positions
    /// the cursor at the end. No-op when the list is empty.
    pub fn start_editing(&mut self) {
        if let Some(task) = self.selected_task() {
            self.edit_buffer = task.text.clone();
            self.cursor_position = self.edit_buffer.len();
            self.mode = AppMode::EditingTask;
            self.status_message = None;
        }
    }

    /// Commits the edit buffer as the selected task's new text.
    pub fn finish_editing(&mut self) {
        if let Some(task) = self.selected_task() {
            let event = TaskEvent::TextEdited {
                id: task.id,
                text: self.edit_buffer.clone(),
            };
            self.dispatch(event);
        }
        self.mode = AppMode::Normal;
        self.edit_buffer.clear();
        self.cursor_position = 0;
    }

    /// Cancels editing and returns to normal mode without saving changes.
    pub fn cancel_editing(&mut self) {
        self.mode = AppMode::Normal;
        self.edit_buffer.clear();
        self.cursor_position = 0;
    }

    /// Updates the viewport size for proper scrolling calculations.
    pub fn update_viewport_size(&mut self, rows: usize) {
        self.viewport_rows = rows.max(1);
    }

    /// Ensures the selected task is visible by adjusting scroll position.
    pub fn ensure_cursor_visible(&mut self) {
        if self.selected < self.scroll {
            self.scroll = self.selected;
        } else if self.selected >= self.scroll + self.viewport_rows {
            self.scroll = self.selected.saturating_sub(self.viewport_rows - 1);
        }
    }
}

/// Byte index of the char boundary preceding `cursor`, or 0 at the start.
///
/// `cursor` must itself lie on a char boundary, which every cursor
/// movement in this module preserves.
fn prev_char_boundary(text: &str, cursor: usize) -> usize {
    text[..cursor]
        .chars()
        .next_back()
        .map(|c| cursor - c.len_utf8())
        .unwrap_or(0)
}

/// Byte index of the char boundary following `cursor`, or `cursor` at the end.
fn next_char_boundary(text: &str, cursor: usize) -> usize {
    text[cursor..]
        .chars()
        .next()
        .map(|c| cursor + c.len_utf8())
        .unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TaskEvent, TaskId};

    #[test]
    fn test_app_default() {
        let app = App::default();
        assert_eq!(app.selected, 0);
        assert_eq!(app.scroll, 0);
        assert!(matches!(app.mode, AppMode::Normal));
        assert!(app.edit_buffer.is_empty());
        assert_eq!(app.cursor_position, 0);
        assert!(app.status_message.is_none());
        assert_eq!(app.list.len(), 3);
    }

    #[test]
    fn test_dispatch_commits_new_snapshot() {
        let mut app = App::default();
        app.dispatch(TaskEvent::InputChanged("Walk dog".to_string()));
        assert_eq!(app.list.pending_input, "Walk dog");
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_dispatch_error_keeps_snapshot_and_sets_status() {
        let mut app = App::default();
        let before = app.list.clone();

        app.dispatch(TaskEvent::CheckToggled {
            id: TaskId(999),
            checked: true,
        });

        assert_eq!(app.list, before);
        assert!(app.status_message.as_ref().unwrap().contains("Unknown task"));
    }

    #[test]
    fn test_adding_flow_submits_and_selects_new_task() {
        let mut app = App::default();
        app.selected = 2;
        app.start_adding();
        assert!(matches!(app.mode, AppMode::AddingTask));

        for c in "Walk dog".chars() {
            app.pending_insert(c);
        }
        assert_eq!(app.list.pending_input, "Walk dog");

        app.finish_adding();
        assert!(matches!(app.mode, AppMode::Normal));
        assert_eq!(app.list.tasks[0].text, "Walk dog");
        assert!(app.list.pending_input.is_empty());
        assert_eq!(app.selected, 0);
        assert_eq!(app.cursor_position, 0);
    }

    #[test]
    fn test_cancel_adding_keeps_pending_input() {
        let mut app = App::default();
        app.start_adding();
        app.pending_insert('W');
        app.cancel_adding();

        assert!(matches!(app.mode, AppMode::Normal));
        assert_eq!(app.list.pending_input, "W");

        // Refocusing resumes at the end of the kept text
        app.start_adding();
        assert_eq!(app.cursor_position, 1);
    }

    #[test]
    fn test_pending_input_cursor_editing() {
        let mut app = App::default();
        app.start_adding();
        for c in "dg".chars() {
            app.pending_insert(c);
        }

        // Insert in the middle
        app.cursor_position = 1;
        app.pending_insert('o');
        assert_eq!(app.list.pending_input, "dog");
        assert_eq!(app.cursor_position, 2);

        app.pending_backspace();
        assert_eq!(app.list.pending_input, "dg");
        assert_eq!(app.cursor_position, 1);

        app.pending_delete();
        assert_eq!(app.list.pending_input, "d");
    }

    #[test]
    fn test_pending_input_multibyte_editing() {
        let mut app = App::default();
        app.start_adding();
        for c in "café".chars() {
            app.pending_insert(c);
        }
        assert_eq!(app.list.pending_input, "café");
        assert_eq!(app.cursor_position, "café".len());

        // Backspace over the two-byte 'é'
        app.pending_backspace();
        assert_eq!(app.list.pending_input, "caf");
        assert_eq!(app.cursor_position, 3);

        // Cursor steps over whole chars, inserts stay on boundaries
        app.pending_insert('é');
        app.pending_cursor_left();
        app.pending_insert('e');
        assert_eq!(app.list.pending_input, "cafeé");

        app.pending_cursor_right();
        assert_eq!(app.cursor_position, app.list.pending_input.len());
        app.pending_delete();
        assert_eq!(app.list.pending_input, "cafeé");
    }

    #[test]
    fn test_edit_buffer_multibyte_editing() {
        let mut app = App::default();
        app.start_editing();
        app.edit_buffer = "é".to_string();
        app.cursor_position = app.edit_buffer.len();

        app.edit_cursor_left();
        assert_eq!(app.cursor_position, 0);
        app.edit_insert('a');
        assert_eq!(app.edit_buffer, "aé");
        assert_eq!(app.cursor_position, 1);

        app.edit_backspace();
        assert_eq!(app.edit_buffer, "é");
        assert_eq!(app.cursor_position, 0);

        app.edit_delete();
        assert!(app.edit_buffer.is_empty());
    }

    #[test]
    fn test_toggle_selected() {
        let mut app = App::default();
        assert!(!app.list.tasks[0].completed);

        app.toggle_selected();
        assert!(app.list.tasks[0].completed);

        app.toggle_selected();
        assert!(!app.list.tasks[0].completed);
    }

    #[test]
    fn test_editing_flow_commits_text() {
        let mut app = App::default();
        app.selected = 2;
        app.start_editing();

        assert!(matches!(app.mode, AppMode::EditingTask));
        assert_eq!(app.edit_buffer, "Prepare dinner");
        assert_eq!(app.cursor_position, "Prepare dinner".len());

        app.edit_buffer = "Prepare lunch".to_string();
        app.finish_editing();

        assert!(matches!(app.mode, AppMode::Normal));
        assert_eq!(app.list.tasks[2].text, "Prepare lunch");
        assert!(!app.list.tasks[2].completed);
        assert!(app.edit_buffer.is_empty());
    }

    #[test]
    fn test_cancel_editing_discards_buffer() {
        let mut app = App::default();
        app.start_editing();
        app.edit_buffer = "Scrapped".to_string();
        app.cancel_editing();

        assert!(matches!(app.mode, AppMode::Normal));
        assert_eq!(app.list.tasks[0].text, "Buy groceries");
        assert!(app.edit_buffer.is_empty());
        assert_eq!(app.cursor_position, 0);
    }

    #[test]
    fn test_start_editing_on_empty_list_is_noop() {
        let mut app = App::default();
        app.list = crate::domain::TaskList::seeded(&[]);
        app.start_editing();
        assert!(matches!(app.mode, AppMode::Normal));
    }

    #[test]
    fn test_selection_movement_clamps_at_ends() {
        let mut app = App::default();
        app.select_previous();
        assert_eq!(app.selected, 0);

        app.select_next();
        app.select_next();
        assert_eq!(app.selected, 2);
        app.select_next();
        assert_eq!(app.selected, 2);
    }

    #[test]
    fn test_scrolling_follows_selection() {
        let mut app = App::default();
        for n in 0..20 {
            app.dispatch(TaskEvent::InputChanged(format!("task {}", n)));
            app.dispatch(TaskEvent::Submitted);
        }
        app.update_viewport_size(5);

        app.selected = 10;
        app.ensure_cursor_visible();
        assert_eq!(app.scroll, 6); // 10 - 5 + 1

        app.selected = 2;
        app.ensure_cursor_visible();
        assert_eq!(app.scroll, 2);
    }

    #[test]
    fn test_app_mode_transitions() {
        let mut app = App::default();

        // Normal -> AddingTask -> Normal
        assert!(matches!(app.mode, AppMode::Normal));
        app.start_adding();
        assert!(matches!(app.mode, AppMode::AddingTask));
        app.finish_adding();
        assert!(matches!(app.mode, AppMode::Normal));

        // Normal -> EditingTask -> Normal
        app.start_editing();
        assert!(matches!(app.mode, AppMode::EditingTask));
        app.cancel_editing();
        assert!(matches!(app.mode, AppMode::Normal));
    }
}
