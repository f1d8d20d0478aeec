use crate::application::{App, AppMode};
use crate::presentation::view::{build_view, ViewModel};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

pub fn render_ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    // List rows available inside the bordered list block
    app.update_viewport_size(chunks[2].height.saturating_sub(2) as usize);
    app.ensure_cursor_visible();

    let view = build_view(app);

    render_header(f, &view, chunks[0]);
    render_input_field(f, &view, chunks[1]);
    render_task_list(f, app.scroll, &view, chunks[2]);
    render_status_bar(f, &view, chunks[3]);

    if view.show_help {
        render_help_popup(f, app.help_scroll);
    }
}

fn render_header(f: &mut Frame, view: &ViewModel, area: Rect) {
    let done = view.items.iter().filter(|i| i.completed).count();
    let header = Paragraph::new(format!(
        "ttodo - Terminal To-Do List | {}/{} done",
        done,
        view.items.len()
    ))
    .style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn render_input_field(f: &mut Frame, view: &ViewModel, area: Rect) {
    let (title, style) = if view.input_focused {
        ("New task", Style::default().fg(Color::Green))
    } else {
        ("New task (press i)", Style::default())
    };

    let field = Paragraph::new(view.input_value.as_str())
        .block(Block::default().borders(Borders::ALL).title(title))
        .style(style);
    f.render_widget(field, area);
}

fn render_task_list(f: &mut Frame, scroll: usize, view: &ViewModel, area: Rect) {
    let visible_rows = area.height.saturating_sub(2) as usize;

    let items: Vec<ListItem> = view
        .items
        .iter()
        .skip(scroll)
        .take(visible_rows)
        .map(|item| {
            let checkbox = if item.completed { "[x] " } else { "[ ] " };

            let mut text_style = Style::default();
            if item.struck {
                text_style = text_style
                    .add_modifier(Modifier::CROSSED_OUT)
                    .add_modifier(Modifier::DIM);
            }
            if item.selected {
                text_style = text_style.bg(Color::Blue).fg(Color::White);
            }

            let line = Line::from(vec![
                Span::styled(checkbox, if item.selected {
                    Style::default().bg(Color::Blue).fg(Color::White)
                } else {
                    Style::default().fg(Color::Yellow)
                }),
                Span::styled(item.text.clone(), text_style),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Tasks"));
    f.render_widget(list, area);
}

fn render_status_bar(f: &mut Frame, view: &ViewModel, area: Rect) {
    let text = match &view.status {
        Some(status) => status.clone(),
        None => view.mode_line.clone(),
    };

    let style = if view.input_focused {
        Style::default().fg(Color::Green)
    } else if view.show_help {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let status = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(style);
    f.render_widget(status, area);
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_text = get_help_text();
    let help_lines: Vec<&str> = help_text.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("ttodo Help")
                .style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

fn get_help_text() -> String {
    r#"TTODO KEYBOARD REFERENCE

=== LIST NAVIGATION ===
Up/Down or k/j  Move selection between tasks
Space           Toggle the selected task's checkbox
Enter, F2 or e  Edit the selected task's text
i or Tab        Focus the new-task input field
F1 or ?         Show this help
q               Quit application

=== NEW TASK FIELD ===
Type to build the task text; the field always shows exactly
what will be submitted.
Enter           Add the task at the top of the list
Esc             Back to the list (typed text is kept)

=== EDITING A TASK ===
Enter           Save the new text
Esc             Discard changes

=== HELP NAVIGATION ===
↑↓ or j/k       Scroll help text up/down one line
Home            Jump to top of help text
Esc/F1/?/q      Close this help window

Note: the list lives in memory only; nothing is saved to disk."#
        .to_string()
}
