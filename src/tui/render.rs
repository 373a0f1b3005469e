use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::session::Sender;
use crate::tui::app::App;

/// Render the main UI
pub fn render_ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Transcript
            Constraint::Length(3), // Input
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app);
    render_transcript(frame, chunks[1], app);
    render_input(frame, chunks[2], app);
    render_status_bar(frame, chunks[3], app);
}

/// Render the header
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let header_text = vec![
        Line::from(vec![
            Span::styled(
                app.persona.title,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | Model: "),
            Span::styled(&app.model_name, Style::default().fg(Color::Green)),
        ]),
        Line::from(Span::styled(
            app.persona.subtitle,
            Style::default().fg(Color::Gray),
        )),
    ];

    let header = Paragraph::new(header_text)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(header, area);
}

/// Render the transcript as "<sender>: <text>" in chronological order
fn render_transcript(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::new();

    for turn in app.session.transcript() {
        let (label_style, label) = match turn.sender {
            Sender::User => (
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                turn.sender.label(),
            ),
            Sender::Assistant => (
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                turn.sender.label(),
            ),
        };

        let mut text_lines = turn.text.lines();
        let first = text_lines.next().unwrap_or("");
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", label), label_style),
            Span::raw(first.to_string()),
        ]));
        for rest in text_lines {
            lines.push(Line::from(Span::raw(rest.to_string())));
        }
        lines.push(Line::from(""));
    }

    if let Some(error) = &app.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    let transcript = Paragraph::new(lines)
        .block(Block::default().borders(Borders::NONE))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll_offset, 0));

    frame.render_widget(transcript, area);
}

/// Render the input area with the persona's prompt as its title
fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let input = Paragraph::new(app.session.pending_input())
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(app.persona.input_prompt),
        );

    frame.render_widget(input, area);

    // Place the cursor at the end of the pending input
    let cursor_x = area.x + 1 + app.session.pending_input().chars().count() as u16;
    frame.set_cursor_position((cursor_x.min(area.right().saturating_sub(2)), area.y + 1));
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let text = if let Some(status) = &app.status_message {
        Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from(Span::styled(
            "Enter: send | Ctrl+L: clear chat | Esc/Ctrl+C: quit",
            Style::default().fg(Color::DarkGray),
        ))
    };

    let status_bar = Paragraph::new(text).alignment(Alignment::Left);
    frame.render_widget(status_bar, area);
}
