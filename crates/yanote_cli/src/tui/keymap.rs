//! Key event to command mapping.
//!
//! Pure over `(key, focus, app state)` so bindings are testable without a
//! terminal.

use super::{Focus, TuiState};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use yanote_core::{Action, DraftField, NoteColor, NotesApp};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    None,
    Quit,
    Focus(Focus),
    MoveSelection(isize),
    Dispatch(Action),
}

pub fn map_key(key: KeyEvent, tui: &TuiState, app: &NotesApp) -> Command {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => return Command::Quit,
        // Submit is consumed here so it never reaches another binding.
        KeyCode::Char('s') if ctrl && tui.focus.is_composer() => {
            return Command::Dispatch(Action::Submit)
        }
        KeyCode::Tab => return Command::Focus(tui.focus.next()),
        KeyCode::BackTab => return Command::Focus(tui.focus.prev()),
        _ => {}
    }

    match tui.focus {
        Focus::Title => map_field_key(key, DraftField::Title),
        Focus::Text => map_field_key(key, DraftField::Text),
        Focus::Colors => map_color_key(key, app.composer().color()),
        Focus::Submit => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Command::Dispatch(Action::Submit),
            KeyCode::Esc => Command::Quit,
            _ => Command::None,
        },
        Focus::Notes => map_note_key(key, tui, app),
    }
}

fn map_field_key(key: KeyEvent, field: DraftField) -> Command {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return Command::None;
    }
    match (key.code, field) {
        (KeyCode::Enter, DraftField::Title) => Command::Dispatch(Action::Submit),
        (KeyCode::Enter, DraftField::Text) => Command::Dispatch(Action::Type(field, '\n')),
        (KeyCode::Char(ch), _) => Command::Dispatch(Action::Type(field, ch)),
        (KeyCode::Backspace, _) => Command::Dispatch(Action::Erase(field)),
        (KeyCode::Esc, _) => Command::Quit,
        _ => Command::None,
    }
}

fn map_color_key(key: KeyEvent, current: NoteColor) -> Command {
    let select = |color| Command::Dispatch(Action::SelectColor(color));
    match key.code {
        KeyCode::Left => select(cycle_color(current, NoteColor::ALL.len() - 1)),
        KeyCode::Right => select(cycle_color(current, 1)),
        KeyCode::Char(digit @ '1'..='4') => {
            let index = digit as usize - '1' as usize;
            select(NoteColor::ALL[index])
        }
        KeyCode::Esc => Command::Quit,
        _ => Command::None,
    }
}

fn map_note_key(key: KeyEvent, tui: &TuiState, app: &NotesApp) -> Command {
    match key.code {
        KeyCode::Up => return Command::MoveSelection(-1),
        KeyCode::Down => return Command::MoveSelection(1),
        _ => {}
    }

    let Some(note) = app.board().notes().get(tui.selected) else {
        return match key.code {
            KeyCode::Esc => Command::Quit,
            _ => Command::None,
        };
    };
    let id = note.id();
    let confirming = app
        .list()
        .guard(id)
        .is_some_and(|guard| guard.is_confirming());

    match (key.code, confirming) {
        (KeyCode::Char('y') | KeyCode::Enter, true) => Command::Dispatch(Action::ConfirmDelete(id)),
        (KeyCode::Char('n') | KeyCode::Esc, true) => Command::Dispatch(Action::CancelDelete(id)),
        (KeyCode::Char('d') | KeyCode::Delete, false) => {
            Command::Dispatch(Action::RequestDelete(id))
        }
        (KeyCode::Esc, false) => Command::Quit,
        _ => Command::None,
    }
}

fn cycle_color(current: NoteColor, by: usize) -> NoteColor {
    let index = NoteColor::ALL
        .iter()
        .position(|color| *color == current)
        .unwrap_or(0);
    NoteColor::ALL[(index + by) % NoteColor::ALL.len()]
}

#[cfg(test)]
mod tests {
    use super::{map_key, Command};
    use crate::tui::{Focus, TuiState};
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use yanote_core::{Action, DraftField, NoteBoard, NoteColor, NotesApp};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn focused(focus: Focus) -> TuiState {
        TuiState {
            focus,
            ..TuiState::default()
        }
    }

    #[test]
    fn enter_submits_from_title_but_breaks_line_in_text() {
        let app = NotesApp::new(NoteBoard::empty());
        assert_eq!(
            map_key(key(KeyCode::Enter), &focused(Focus::Title), &app),
            Command::Dispatch(Action::Submit)
        );
        assert_eq!(
            map_key(key(KeyCode::Enter), &focused(Focus::Text), &app),
            Command::Dispatch(Action::Type(DraftField::Text, '\n'))
        );
    }

    #[test]
    fn ctrl_s_submits_from_any_composer_focus() {
        let app = NotesApp::new(NoteBoard::empty());
        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        for focus in [Focus::Title, Focus::Text, Focus::Colors, Focus::Submit] {
            assert_eq!(
                map_key(ctrl_s, &focused(focus), &app),
                Command::Dispatch(Action::Submit)
            );
        }
        assert_eq!(map_key(ctrl_s, &focused(Focus::Notes), &app), Command::None);
    }

    #[test]
    fn color_keys_wrap_and_select_by_digit() {
        let app = NotesApp::new(NoteBoard::empty());
        let tui = focused(Focus::Colors);
        assert_eq!(
            map_key(key(KeyCode::Left), &tui, &app),
            Command::Dispatch(Action::SelectColor(NoteColor::Red))
        );
        assert_eq!(
            map_key(key(KeyCode::Char('4')), &tui, &app),
            Command::Dispatch(Action::SelectColor(NoteColor::Pink))
        );
    }

    #[test]
    fn note_keys_follow_the_confirmation_state() {
        let mut app = NotesApp::new(NoteBoard::with_seed());
        let tui = focused(Focus::Notes);
        let id = app.board().notes()[0].id();

        assert_eq!(
            map_key(key(KeyCode::Char('d')), &tui, &app),
            Command::Dispatch(Action::RequestDelete(id))
        );
        assert_eq!(map_key(key(KeyCode::Esc), &tui, &app), Command::Quit);

        app.dispatch(Action::RequestDelete(id));
        assert_eq!(
            map_key(key(KeyCode::Esc), &tui, &app),
            Command::Dispatch(Action::CancelDelete(id))
        );
        assert_eq!(
            map_key(key(KeyCode::Char('y')), &tui, &app),
            Command::Dispatch(Action::ConfirmDelete(id))
        );
    }

    #[test]
    fn repeated_enter_never_deletes_an_idle_note() {
        let mut app = NotesApp::new(NoteBoard::with_seed());
        let tui = focused(Focus::Notes);
        let before = app.board().len();

        for _ in 0..2 {
            let command = map_key(key(KeyCode::Enter), &tui, &app);
            assert_eq!(command, Command::None);
            if let Command::Dispatch(action) = command {
                app.dispatch(action);
            }
        }

        assert_eq!(app.board().len(), before);
    }

    #[test]
    fn ctrl_c_quits_everywhere() {
        let app = NotesApp::new(NoteBoard::empty());
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c, &focused(Focus::Text), &app), Command::Quit);
        assert_eq!(map_key(ctrl_c, &focused(Focus::Notes), &app), Command::Quit);
    }
}
