// File: src/tui/view.rs
use crate::help;
use crate::model::day::WEEKDAYS_JA;
use crate::model::time_range::format_hm;
use crate::tui::state::{AppState, Focus, InputMode, TimeField};

use chrono::Datelike;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};
use rust_i18n::t;
use unicode_width::UnicodeWidthStr;

// Each calendar cell is padded to this many terminal columns.
const CELL_WIDTH: usize = 4;

pub fn draw(f: &mut Frame, state: &mut AppState) {
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    draw_header(f, state, v_chunks[0]);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(0)])
        .split(v_chunks[1]);

    draw_month(f, state, h_chunks[0]);
    draw_list(f, state, h_chunks[1]);
    draw_footer(f, state, v_chunks[2]);

    match state.mode {
        InputMode::PickingTime => draw_time_modal(f, state),
        InputMode::ViewingEvents => draw_events(f, state),
        InputMode::Normal => {}
    }

    if state.show_full_help {
        draw_help(f);
    }
}

fn toggle_span(label: String, on: bool) -> Span<'static> {
    let mark = if on { "[x]" } else { "[ ]" };
    let style = if on {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Span::styled(format!("{} {}  ", mark, label), style)
}

fn draw_header(f: &mut Frame, state: &AppState, area: Rect) {
    let line = Line::from(vec![
        toggle_span(t!("toggle_priority").to_string(), state.selection.priority_enabled()),
        toggle_span(t!("toggle_time").to_string(), state.selection.time_enabled()),
    ]);
    let p = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", t!("app_title"))),
    );
    f.render_widget(p, area);
}

/// Pads `text` on the left so it occupies `width` terminal columns.
fn pad_cell(text: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(text);
    format!("{}{}", " ".repeat(width.saturating_sub(w)), text)
}

fn draw_month(f: &mut Frame, state: &AppState, area: Rect) {
    let busy = state.busy_days();
    let pending = state.selection.pending().map(|p| p.day);
    let cursor = state.cursor.date();

    let mut lines = Vec::new();
    lines.push(Line::from(Span::styled(
        format!("{}年{}月", cursor.year(), cursor.month()),
        Style::default().add_modifier(Modifier::BOLD),
    )));

    let header: Vec<Span> = WEEKDAYS_JA
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let style = match i {
                0 => Style::default().fg(Color::LightRed),
                6 => Style::default().fg(Color::LightBlue),
                _ => Style::default().fg(Color::Gray),
            };
            Span::styled(pad_cell(w, CELL_WIDTH), style)
        })
        .collect();
    lines.push(Line::from(header));

    for week in state.month_grid() {
        let spans: Vec<Span> = week
            .iter()
            .map(|cell| match cell {
                None => Span::raw(" ".repeat(CELL_WIDTH)),
                Some(day) => {
                    let mut style = Style::default();
                    if busy.contains(day) {
                        style = style.fg(Color::Magenta);
                    }
                    if *day == state.today {
                        style = style.add_modifier(Modifier::UNDERLINED);
                    }
                    if state.selection.contains(*day) {
                        style = style.fg(Color::Black).bg(Color::Green);
                    } else if pending == Some(*day) {
                        style = style.fg(Color::Black).bg(Color::Yellow);
                    }
                    if *day == state.cursor {
                        style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
                    }
                    Span::styled(pad_cell(&day.date().day().to_string(), CELL_WIDTH), style)
                }
            })
            .collect();
        lines.push(Line::from(spans));
    }

    let border_style = if state.focus == Focus::Calendar {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let p = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", t!("calendar")))
            .border_style(border_style),
    );
    f.render_widget(p, area);
}

fn draw_list(f: &mut Frame, state: &mut AppState, area: Rect) {
    let items: Vec<ListItem> = if state.selection.is_empty() {
        vec![ListItem::new(Span::styled(
            t!("no_dates").to_string(),
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        state
            .selection
            .rows()
            .iter()
            .map(|row| ListItem::new(row.text.clone()))
            .collect()
    };

    let border_style = if state.focus == Focus::List {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ({}) ", t!("selected_dates"), state.selection.len()))
                .border_style(border_style),
        )
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(Color::Green)
                .fg(Color::Black),
        );
    f.render_stateful_widget(list, area, &mut state.list_state);
}

fn draw_footer(f: &mut Frame, state: &AppState, area: Rect) {
    f.render_widget(Clear, area);

    let status_style = if state.message_is_error {
        Style::default().fg(Color::LightRed)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let status = Paragraph::new(state.message.clone())
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::TOP | Borders::BOTTOM)
                .title(" Status "),
        );

    let help_str = match (state.mode, state.focus) {
        (InputMode::PickingTime, _) => "Tab:Field ↑/↓:±15m PgUp/PgDn:±1h Enter:OK Esc:Cancel",
        (InputMode::ViewingEvents, _) => "Esc:Close",
        (InputMode::Normal, Focus::Calendar) => {
            "?:Help q:Quit Tab:List Enter:Pick p:Prio t:Time y:Copy v:Events"
        }
        (InputMode::Normal, Focus::List) => "?:Help q:Quit Tab:Calendar d:Delete y:Copy",
    };
    let help = Paragraph::new(help_str).alignment(Alignment::Right).block(
        Block::default()
            .borders(Borders::RIGHT | Borders::TOP | Borders::BOTTOM)
            .title(" Actions "),
    );

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);
    f.render_widget(status, chunks[0]);
    f.render_widget(help, chunks[1]);
}

fn draw_time_modal(f: &mut Frame, state: &AppState) {
    let Some(draft) = state.time_draft else {
        return;
    };
    let area = centered_rect(50, 30, f.area());

    let field_style = |field: TimeField| {
        if draft.field == field {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            draft.day.format_ja(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw(format!("{} ", t!("time_start"))),
            Span::styled(format!(" {} ", format_hm(draft.start)), field_style(TimeField::Start)),
            Span::raw("  ～  "),
            Span::raw(format!("{} ", t!("time_end"))),
            Span::styled(format!(" {} ", format_hm(draft.end)), field_style(TimeField::End)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                " [Enter] ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("{}    ", t!("confirm"))),
            Span::styled(
                " [Esc] ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(t!("cancel").to_string()),
        ]),
    ];

    let p = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" {} ", t!("time_modal_title")))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(p, area);
}

fn draw_events(f: &mut Frame, state: &AppState) {
    let area = centered_rect(70, 60, f.area());
    let items: Vec<ListItem> = state
        .events
        .iter()
        .map(|e| ListItem::new(e.label()))
        .collect();
    let popup = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ({}) ", t!("device_events"), state.events.len())),
    );
    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn draw_help(f: &mut Frame) {
    let colors = [Color::Cyan, Color::Yellow, Color::Green, Color::Magenta];
    let mut lines = Vec::new();
    for (i, section) in help::get_keyboard_help().into_iter().enumerate() {
        lines.push(Line::from(Span::styled(
            format!(" {} ", section.title),
            Style::default()
                .fg(colors[i % colors.len()])
                .add_modifier(Modifier::BOLD),
        )));
        for item in section.items {
            lines.push(Line::from(vec![
                Span::styled(
                    pad_cell(&item.keys, 16),
                    Style::default().fg(Color::White),
                ),
                Span::raw(format!("  {}", item.desc)),
            ]));
        }
    }

    let area = centered_rect(70, 80, f.area());
    let p = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help "))
        .wrap(Wrap { trim: false });
    f.render_widget(Clear, area);
    f.render_widget(p, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_cell_counts_wide_glyphs_as_two_columns() {
        assert_eq!(pad_cell("日", 4), "  日");
        assert_eq!(pad_cell("7", 4), "   7");
        assert_eq!(pad_cell("12345", 4), "12345");
    }
}
