//! Frame rendering.
//!
//! Draws the composer above the note list. Every color shown comes from core
//! state: the text area border from the draft, each note block from its tag.

use super::{Focus, TuiState};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;
use yanote_core::{NoteColor, NoteItemView, NotesApp};

const HEADER: &str = "yet another notes app";
const TITLE_PLACEHOLDER: &str = "Title";
const TEXT_PLACEHOLDER: &str = "Write your note here...";
const SUBMIT_LABEL: &str = "[ Add Note ]";
const HELP_LINE: &str =
    "Tab: focus  Ctrl+S: add  Up/Down: select  d: delete  y/n: confirm  Esc: quit";
const CARET: &str = "▌";
const TEXT_AREA_HEIGHT: u16 = 7;

pub fn palette(color: NoteColor) -> Color {
    match color {
        NoteColor::Red => Color::Red,
        NoteColor::Blue => Color::Blue,
        NoteColor::Green => Color::Green,
        NoteColor::Pink => Color::Magenta,
    }
}

pub fn draw(frame: &mut Frame, app: &NotesApp, tui: &TuiState) {
    let [header, title, text, colors, submit, notes, help] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(TEXT_AREA_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

    frame.render_widget(
        Paragraph::new(HEADER).style(Style::default().add_modifier(Modifier::BOLD)),
        header,
    );
    draw_title_input(frame, app, tui, title);
    draw_text_area(frame, app, tui, text);
    draw_color_radios(frame, app, tui, colors);
    draw_submit(frame, tui, submit);
    draw_notes(frame, app, tui, notes);
    frame.render_widget(
        Paragraph::new(HELP_LINE).style(Style::default().add_modifier(Modifier::DIM)),
        help,
    );
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn field_lines<'a>(value: &'a str, placeholder: &'a str, focused: bool) -> Vec<Line<'a>> {
    if value.is_empty() && !focused {
        return vec![Line::styled(
            placeholder,
            Style::default().add_modifier(Modifier::DIM),
        )];
    }
    let mut lines = value.split('\n').map(Line::raw).collect::<Vec<_>>();
    if focused {
        if let Some(last) = lines.last_mut() {
            last.push_span(Span::raw(CARET));
        }
    }
    lines
}

fn draw_title_input(frame: &mut Frame, app: &NotesApp, tui: &TuiState, area: Rect) {
    let focused = tui.focus == Focus::Title;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_style(focused));
    let lines = field_lines(app.composer().title(), TITLE_PLACEHOLDER, focused);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_text_area(frame: &mut Frame, app: &NotesApp, tui: &TuiState, area: Rect) {
    let focused = tui.focus == Focus::Text;
    let border = palette(app.composer().border_color());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_style(focused).fg(border));
    let lines = field_lines(app.composer().text(), TEXT_PLACEHOLDER, focused);

    // Keep the caret line visible once the draft outgrows the box.
    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(inner_height) as u16;
    frame.render_widget(Paragraph::new(lines).block(block).scroll((scroll, 0)), area);
}

fn draw_color_radios(frame: &mut Frame, app: &NotesApp, tui: &TuiState, area: Rect) {
    let focused = tui.focus == Focus::Colors;
    let spans = NoteColor::ALL
        .into_iter()
        .flat_map(|color| {
            let marker = if app.composer().is_selected(color) {
                "(•) "
            } else {
                "( ) "
            };
            let mut style = Style::default().fg(palette(color));
            if focused && app.composer().is_selected(color) {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }
            [
                Span::styled(marker, style),
                Span::styled(color.label(), style),
                Span::raw("  "),
            ]
        })
        .collect::<Vec<_>>();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_submit(frame: &mut Frame, tui: &TuiState, area: Rect) {
    let style = if tui.focus == Focus::Submit {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    frame.render_widget(Paragraph::new(Span::styled(SUBMIT_LABEL, style)), area);
}

fn draw_notes(frame: &mut Frame, app: &NotesApp, tui: &TuiState, area: Rect) {
    let items = app.items();
    let heights = items.iter().map(item_height).collect::<Vec<_>>();
    let first = first_visible(&heights, tui.selected, area.height);

    let mut y = area.y;
    for (index, item) in items.iter().enumerate().skip(first) {
        let bottom = area.y + area.height;
        if y >= bottom {
            break;
        }
        let height = heights[index].min(bottom - y);
        let rect = Rect::new(area.x, y, area.width, height);
        let selected = tui.focus == Focus::Notes && index == tui.selected;
        draw_note(frame, item, selected, rect);
        y += height;
    }
}

/// Earliest index that still keeps the selected note on screen.
fn first_visible(heights: &[u16], selected: usize, available: u16) -> usize {
    let selected = selected.min(heights.len().saturating_sub(1));
    let mut first = 0;
    while first < selected {
        let span: u32 = heights[first..=selected]
            .iter()
            .map(|h| u32::from(*h))
            .sum();
        if span <= u32::from(available) {
            break;
        }
        first += 1;
    }
    first
}

fn item_lines(item: &NoteItemView) -> Vec<Line<'_>> {
    let mut lines = vec![
        Line::styled(
            item.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::raw(item.date_line.as_str()),
        Line::raw(item.time_line.as_str()),
    ];
    for (index, paragraph) in item.paragraphs.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        lines.extend(paragraph.split('\n').map(Line::raw));
    }

    let mut controls = vec![Span::styled(
        format!("[ {} ]", item.delete.primary),
        Style::default().fg(Color::Red),
    )];
    if let Some(secondary) = item.delete.secondary {
        controls.push(Span::raw("  "));
        controls.push(Span::raw(format!("[ {secondary} ]")));
    }
    lines.push(Line::from(controls));
    lines
}

fn item_height(item: &NoteItemView) -> u16 {
    let lines = item_lines(item).len() + 2;
    u16::try_from(lines).unwrap_or(u16::MAX)
}

fn draw_note(frame: &mut Frame, item: &NoteItemView, selected: bool, area: Rect) {
    let border_type = if selected {
        BorderType::Thick
    } else {
        BorderType::Plain
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(palette(item.color)));
    frame.render_widget(Paragraph::new(item_lines(item)).block(block), area);
}
