use crate::application::{App, AppMode};
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, _modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key),
            AppMode::AddingTask => Self::handle_adding_mode(app, key),
            AppMode::EditingTask => Self::handle_editing_mode(app, key),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode) {
        app.status_message = None;

        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                app.select_previous();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.select_next();
            }
            KeyCode::Char(' ') => {
                app.toggle_selected();
            }
            KeyCode::Enter | KeyCode::F(2) | KeyCode::Char('e') => {
                app.start_editing();
            }
            KeyCode::Char('i') | KeyCode::Tab => {
                app.start_adding();
            }
            KeyCode::F(1) | KeyCode::Char('?') => {
                app.mode = AppMode::Help;
                app.help_scroll = 0;
            }
            KeyCode::Char('q') => {
                // Will be handled by main loop
            }
            _ => {}
        }
    }

    fn handle_adding_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => {
                app.finish_adding();
            }
            KeyCode::Esc => {
                app.cancel_adding();
            }
            KeyCode::Backspace => {
                app.pending_backspace();
            }
            KeyCode::Delete => {
                app.pending_delete();
            }
            KeyCode::Left => {
                app.pending_cursor_left();
            }
            KeyCode::Right => {
                app.pending_cursor_right();
            }
            KeyCode::Home => {
                app.cursor_position = 0;
            }
            KeyCode::End => {
                app.cursor_position = app.list.pending_input.len();
            }
            KeyCode::Char(c) => {
                app.pending_insert(c);
            }
            _ => {}
        }
    }

    fn handle_editing_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => {
                app.finish_editing();
            }
            KeyCode::Esc => {
                app.cancel_editing();
            }
            KeyCode::Backspace => {
                app.edit_backspace();
            }
            KeyCode::Delete => {
                app.edit_delete();
            }
            KeyCode::Left => {
                app.edit_cursor_left();
            }
            KeyCode::Right => {
                app.edit_cursor_right();
            }
            KeyCode::Home => {
                app.cursor_position = 0;
            }
            KeyCode::End => {
                app.cursor_position = app.edit_buffer.len();
            }
            KeyCode::Char(c) => {
                app.edit_insert(c);
            }
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.mode = AppMode::Normal;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if app.help_scroll > 0 {
                    app.help_scroll -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.help_scroll += 1;
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }
}
