//! Pure view building for the terminal to-do list.
//!
//! Everything here is a deterministic function of application state and
//! uses no ratatui types, so the full rendering contract can be unit
//! tested without a terminal.

use crate::application::{App, AppMode};
use crate::domain::TaskId;

/// Display description for a single task row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItemView {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    /// Muted/struck-through presentation; mirrors `completed` and carries
    /// no data-model consequence.
    pub struck: bool,
    pub selected: bool,
}

/// Display description for the whole screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    /// Value shown in the new-task field; always the owned state value.
    pub input_value: String,
    pub input_focused: bool,
    pub items: Vec<TaskItemView>,
    /// Hint line matching the current mode.
    pub mode_line: String,
    pub status: Option<String>,
    pub show_help: bool,
}

/// Builds the view model for the current application state.
///
/// Deterministic: rendering the same state twice yields the same view.
pub fn build_view(app: &App) -> ViewModel {
    let items = app
        .list
        .tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let text = match app.mode {
                AppMode::EditingTask if i == app.selected => app.edit_buffer.clone(),
                _ => task.text.clone(),
            };
            TaskItemView {
                id: task.id,
                text,
                completed: task.completed,
                struck: task.completed,
                selected: i == app.selected,
            }
        })
        .collect();

    ViewModel {
        input_value: app.list.pending_input.clone(),
        input_focused: matches!(app.mode, AppMode::AddingTask),
        items,
        mode_line: mode_line(app),
        status: app.status_message.clone(),
        show_help: matches!(app.mode, AppMode::Help),
    }
}

fn mode_line(app: &App) -> String {
    match app.mode {
        AppMode::Normal => {
            "i: add task | Space: toggle | Enter/e: edit | F1/?: help | q: quit".to_string()
        }
        AppMode::AddingTask => "New task (Enter to add, Esc to cancel)".to_string(),
        AppMode::EditingTask => "Editing task (Enter to save, Esc to cancel)".to_string(),
        AppMode::Help => "↑↓/jk: scroll | Home: top | Esc/q: close help".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskEvent;

    #[test]
    fn test_view_mirrors_task_records() {
        let app = App::default();
        let view = build_view(&app);

        assert_eq!(view.items.len(), 3);
        assert_eq!(view.items[0].text, "Buy groceries");
        assert!(!view.items[0].completed);
        assert!(view.items[1].completed);
        assert!(view.items[1].struck);
        assert!(view.input_value.is_empty());
        assert!(!view.input_focused);
        assert!(!view.show_help);
    }

    #[test]
    fn test_struck_mirrors_completed() {
        let app = App::default();
        let view = build_view(&app);
        for item in &view.items {
            assert_eq!(item.struck, item.completed);
        }
    }

    #[test]
    fn test_rendering_same_state_twice_is_identical() {
        let mut app = App::default();
        app.dispatch(TaskEvent::InputChanged("Walk dog".to_string()));
        app.selected = 1;

        assert_eq!(build_view(&app), build_view(&app));
    }

    #[test]
    fn test_input_field_shows_owned_state_value() {
        let mut app = App::default();
        app.start_adding();
        for c in "Walk dog".chars() {
            app.pending_insert(c);
        }

        let view = build_view(&app);
        assert_eq!(view.input_value, "Walk dog");
        assert!(view.input_focused);
    }

    #[test]
    fn test_selected_row_is_marked() {
        let mut app = App::default();
        app.selected = 2;
        let view = build_view(&app);

        let selected: Vec<bool> = view.items.iter().map(|i| i.selected).collect();
        assert_eq!(selected, [false, false, true]);
    }

    #[test]
    fn test_editing_row_shows_edit_buffer() {
        let mut app = App::default();
        app.selected = 1;
        app.start_editing();
        app.edit_buffer = "Do more chores".to_string();

        let view = build_view(&app);
        assert_eq!(view.items[1].text, "Do more chores");
        // Other rows still show committed state
        assert_eq!(view.items[0].text, "Buy groceries");
        assert_eq!(view.items[2].text, "Prepare dinner");
    }

    #[test]
    fn test_status_message_is_surfaced() {
        let mut app = App::default();
        app.status_message = Some("Unknown task: #9".to_string());
        let view = build_view(&app);
        assert_eq!(view.status.unwrap(), "Unknown task: #9");
    }
}
