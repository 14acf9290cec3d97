//! Terminal adapter.
//!
//! The only module that knows about ratatui and crossterm. It reads key
//! events, maps them to core actions, and redraws after each one. All note
//! state stays in `NotesApp`; this layer owns focus and list selection only.

mod keymap;
mod render;

use keymap::{map_key, Command};
use log::debug;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use yanote_core::{Effect, NotesApp};

/// Focusable regions, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Title,
    Text,
    Colors,
    Submit,
    Notes,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Self::Title,
        Self::Text,
        Self::Colors,
        Self::Submit,
        Self::Notes,
    ];

    pub fn next(self) -> Self {
        self.step(1)
    }

    pub fn prev(self) -> Self {
        self.step(Self::ORDER.len() - 1)
    }

    pub fn is_composer(self) -> bool {
        self != Self::Notes
    }

    fn step(self, by: usize) -> Self {
        let index = Self::ORDER
            .iter()
            .position(|focus| *focus == self)
            .unwrap_or(0);
        Self::ORDER[(index + by) % Self::ORDER.len()]
    }
}

/// Presentation-only state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuiState {
    pub focus: Focus,
    /// Index into the rendered note list.
    pub selected: usize,
}

impl Default for TuiState {
    fn default() -> Self {
        Self {
            focus: Focus::Title,
            selected: 0,
        }
    }
}

impl TuiState {
    fn move_selection(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.selected = 0;
            return;
        }
        let next = self.selected.saturating_add_signed(delta);
        self.selected = next.min(len - 1);
    }

    fn apply_effect(&mut self, effect: Effect, len: usize) {
        match effect {
            Effect::NoteAdded(_) => self.selected = 0,
            Effect::NoteDeleted(_) => self.selected = self.selected.min(len.saturating_sub(1)),
            Effect::None => {}
        }
    }
}

pub fn run(mut app: NotesApp) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    let mut tui = TuiState::default();
    let result = event_loop(&mut terminal, &mut app, &mut tui);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut NotesApp,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    loop {
        terminal.draw(|frame| render::draw(frame, app, tui))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match map_key(key, tui, app) {
            Command::Quit => {
                debug!("event=quit module=tui status=ok");
                return Ok(());
            }
            Command::Focus(focus) => tui.focus = focus,
            Command::MoveSelection(delta) => tui.move_selection(delta, app.board().len()),
            Command::Dispatch(action) => {
                let effect = app.dispatch(action);
                tui.apply_effect(effect, app.board().len());
            }
            Command::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Focus, TuiState};
    use yanote_core::Effect;

    #[test]
    fn focus_cycles_in_both_directions() {
        assert_eq!(Focus::Notes.next(), Focus::Title);
        assert_eq!(Focus::Title.prev(), Focus::Notes);
        assert_eq!(Focus::Text.next(), Focus::Colors);
    }

    #[test]
    fn selection_is_clamped_to_the_list() {
        let mut tui = TuiState::default();
        tui.move_selection(-1, 3);
        assert_eq!(tui.selected, 0);
        tui.move_selection(5, 3);
        assert_eq!(tui.selected, 2);

        tui.apply_effect(Effect::NoteDeleted(1), 2);
        assert_eq!(tui.selected, 1);
        tui.apply_effect(Effect::NoteAdded(9), 3);
        assert_eq!(tui.selected, 0);
    }
}
