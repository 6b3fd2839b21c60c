use barberbook_core::{CellOrigin, Temporal, DAYS_PER_WEEK};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, List, ListItem, Paragraph, Row, Table, Wrap},
    Frame,
};

use crate::tui::app::{App, Focus};

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Booking panes
            Constraint::Length(1), // Notice
            Constraint::Length(2), // Footer/Help
        ])
        .split(size);

    let header = Paragraph::new(app.shop_name.to_uppercase())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(25),
            Constraint::Percentage(35),
        ])
        .split(main_chunks[1]);

    draw_calendar(f, app, content_chunks[0]);
    draw_slots(f, app, content_chunks[1]);
    draw_services(f, app, content_chunks[2]);

    if let Some(notice) = &app.notice {
        let p = Paragraph::new(notice.as_str())
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        f.render_widget(p, main_chunks[2]);
    }

    let c = &app.contacts;
    let footer = Paragraph::new(vec![
        Line::from("Tab: Pane | arrows/hjkl: Move | Enter: Select | [ ]: Month | c: Confirm | x: Clear | q: Quit"),
        Line::from(format!("{}  ·  @{}  ·  {}", c.phone, c.instagram.trim_start_matches('@'), c.address)),
    ])
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[3]);

    if app.draft.is_some() {
        draw_draft_dialog(f, app, size);
    }
}

fn pane_block(title: String, focused: bool) -> Block<'static> {
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
}

fn draw_calendar(f: &mut Frame, app: &App, area: Rect) {
    let grid = app.session.grid();
    let selected = app.session.selected_date();
    let focused = app.focus == Focus::Calendar;

    let rows: Vec<Row> = grid
        .rows()
        .enumerate()
        .map(|(r, week)| {
            let cells: Vec<Cell> = week
                .iter()
                .enumerate()
                .map(|(c, cell)| {
                    let mut style = match cell.origin {
                        CellOrigin::Previous | CellOrigin::Next => Style::default().fg(Color::DarkGray),
                        CellOrigin::Current(Temporal::Past) => {
                            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
                        }
                        CellOrigin::Current(Temporal::Today) => {
                            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                        }
                        CellOrigin::Current(Temporal::Future) => Style::default().fg(Color::White),
                    };
                    let is_selected = cell.is_current()
                        && selected.is_some_and(|d| app.session.cursor().date(cell.day) == Some(d));
                    if is_selected {
                        style = style.bg(Color::Cyan).fg(Color::Black);
                    }
                    if focused && r * DAYS_PER_WEEK + c == app.day_cursor {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    Cell::from(Span::styled(format!("{:>3}", cell.day), style))
                })
                .collect();
            Row::new(cells)
        })
        .collect();

    let header = Row::new(
        app.session
            .locale()
            .weekday_headers()
            .iter()
            .map(|d| Cell::from(format!("{:>3}", d)))
            .collect::<Vec<_>>(),
    )
    .style(Style::default().fg(Color::Yellow));

    let table = Table::new(rows, [Constraint::Length(4); DAYS_PER_WEEK])
        .header(header)
        .block(pane_block(format!("◀ {} ▶", app.session.month_title()), focused));

    f.render_widget(table, area);
}

fn draw_slots(f: &mut Frame, app: &mut App, area: Rect) {
    let labels = app.session.locale().labels();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let chosen = app.session.selected_time().map(|t| t.to_string());
    let items: Vec<ListItem> = app
        .session
        .slots()
        .iter()
        .map(|slot| {
            let (marker, style) = if chosen.as_deref() == Some(slot.label.as_str()) {
                ("✔ ", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            } else if slot.available {
                ("  ", Style::default())
            } else {
                ("  ", Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT))
            };
            ListItem::new(Span::styled(format!("{}{}", marker, slot.label), style))
        })
        .collect();

    let title = app
        .session
        .slots_title()
        .unwrap_or_else(|| labels.available_time.to_string());
    let focused = app.focus == Focus::Slots;
    let list = List::new(items)
        .block(pane_block(title, focused))
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol(if focused { ">> " } else { "   " });
    f.render_stateful_widget(list, chunks[0], &mut app.slot_state);

    if app.session.can_confirm() {
        let button = Paragraph::new(format!("[ {} (c) ]", labels.confirm))
            .style(Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
        f.render_widget(button, chunks[1]);
    }
}

fn draw_services(f: &mut Frame, app: &mut App, area: Rect) {
    let chosen = app.session.selected_service_index();
    let items: Vec<ListItem> = app
        .session
        .catalog()
        .iter()
        .enumerate()
        .map(|(i, service)| {
            let is_chosen = chosen == Some(i);
            let marker = if is_chosen { "● " } else { "○ " };
            let name_style = if is_chosen {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, name_style),
                Span::styled(service.name.clone(), name_style),
                Span::styled(format!("  {}", service.price), Style::default().fg(Color::Yellow)),
            ]))
        })
        .collect();

    let focused = app.focus == Focus::Services;
    let title = app.session.locale().labels().service.to_string();
    let list = List::new(items)
        .block(pane_block(title, focused))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol(if focused { ">> " } else { "   " });
    f.render_stateful_widget(list, area, &mut app.service_state);
}

fn draw_draft_dialog(f: &mut Frame, app: &App, area: Rect) {
    let Some(draft) = &app.draft else {
        return;
    };
    let labels = app.session.locale().labels();

    let mut text: Vec<Line> = draft
        .summary
        .lines()
        .iter()
        .map(|line| {
            Line::from(vec![
                Span::styled(format!("{}: ", line.label), Style::default().fg(Color::Blue)),
                Span::styled(line.value.clone(), Style::default().add_modifier(Modifier::BOLD)),
            ])
        })
        .collect();
    text.push(Line::from(""));
    text.push(Line::from(Span::styled("Esc / Enter", Style::default().fg(Color::DarkGray))));

    let popup = centered_rect(50, 40, area);
    let dialog = Paragraph::new(text)
        .block(
            Block::default()
                .title(format!(" {} ", labels.booking_title))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, popup);
    f.render_widget(dialog, popup);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
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
        .split(vertical[1])[1]
}
