//! UI rendering

use gradebook_core::Roster;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

use crate::app::{App, Focus, Modal, Severity};

/// Main UI rendering function
pub fn draw(frame: &mut Frame, app: &App, roster: &Roster) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_form(frame, app, chunks[0]);
    draw_table(frame, app, roster, chunks[1]);
    draw_status_bar(frame, app, chunks[2]);

    if let Some(modal) = &app.modal {
        draw_modal(frame, modal);
    }
}

/// Draw the form pane (top)
fn draw_form(frame: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.focus.in_form() {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let title = match app.selected_id {
        Some(id) => format!(" Student (editing ID {}) ", id),
        None => " Student (new) ".to_string(),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let fields = [
        (Focus::Name, "Name:       ", &app.name_input),
        (Focus::Email, "Email:      ", &app.email_input),
        (Focus::Gpa, "GPA (0-10): ", &app.gpa_input),
    ];

    let lines: Vec<Line> = fields
        .iter()
        .map(|(focus, label, value)| {
            let label_style = if app.focus == *focus {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::DIM)
            };
            Line::from(vec![
                Span::styled(*label, label_style),
                Span::raw(value.as_str()),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);

    // Place the terminal cursor at the end of the focused field
    if app.modal.is_none() && app.focus.in_form() {
        let (row, value) = match app.focus {
            Focus::Name => (0, &app.name_input),
            Focus::Email => (1, &app.email_input),
            Focus::Gpa => (2, &app.gpa_input),
            Focus::Table => unreachable!(),
        };
        let label_width = 12u16;
        let cursor_x = area.x + 1 + label_width + value.chars().count() as u16;
        let cursor_y = area.y + 1 + row;
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

/// Draw the student table (middle)
fn draw_table(frame: &mut Frame, app: &App, roster: &Roster, area: Rect) {
    let is_active = app.focus == Focus::Table;

    let border_style = if is_active {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let direction = if app.sort_ascending { "↑" } else { "↓" };
    let title = format!(
        " Students ({}) — sort: {} {} ",
        roster.len(),
        app.sort_column.label(),
        direction
    );

    let header = Row::new(["ID", "Name", "Email", "GPA"].map(|h| {
        Cell::from(Span::styled(
            h,
            Style::default().add_modifier(Modifier::BOLD),
        ))
    }));

    let view = app.sorted_view(roster);
    let rows: Vec<Row> = view
        .iter()
        .map(|s| {
            Row::new(vec![
                Cell::from(s.id.to_string()),
                Cell::from(s.name.clone()),
                Cell::from(s.email.clone()),
                Cell::from(format!("{:.2}", s.gpa)),
            ])
        })
        .collect();

    let highlight_style = if is_active {
        Style::default()
            .add_modifier(Modifier::BOLD)
            .add_modifier(Modifier::REVERSED)
    } else {
        Style::default().add_modifier(Modifier::REVERSED)
    };

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Percentage(35),
            Constraint::Percentage(45),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style),
    )
    .row_highlight_style(highlight_style);

    let mut state = TableState::default();
    if app.selected_id.is_some() && !view.is_empty() {
        state.select(Some(app.table_index));
    }

    frame.render_stateful_widget(table, area, &mut state);
}

/// Draw the status bar at the bottom
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let content = if app.focus.in_form() {
        "Tab:next field  Enter:add/update  ^D:delete  Esc:clear  ^C:quit"
    } else {
        "↑/↓:select  s:sort column  S:direction  Enter:update  Del:delete  Esc:clear  q:quit"
    };

    let paragraph =
        Paragraph::new(content).style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(paragraph, area);
}

/// Draw a centered blocking modal
fn draw_modal(frame: &mut Frame, modal: &Modal) {
    let area = frame.area();

    let (title, message, hint, color) = match modal {
        Modal::Feedback { severity, message } => {
            let (title, color) = match severity {
                Severity::Info => (" Info ", Color::Green),
                Severity::Warning => (" Warning ", Color::Yellow),
                Severity::Error => (" Error ", Color::Red),
            };
            (title, message.clone(), "Press any key to continue", color)
        }
        Modal::ConfirmDelete { id } => (
            " Confirm Delete ",
            format!("Delete student with ID {}?", id),
            "y:yes  n:no",
            Color::Yellow,
        ),
    };

    // Calculate centered popup area, sized to the message
    let popup_width = (message.len() as u16 + 6)
        .max(30)
        .min(area.width.saturating_sub(4));
    let popup_height = 5.min(area.height.saturating_sub(2));
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let text = vec![
        Line::from(message),
        Line::from(""),
        Line::from(Span::styled(
            hint,
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

    let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, popup_area);
}
