use chrono::Utc;
use yanote_core::{Action, Composer, Effect, NoteBoard, NoteColor, NotesApp};

#[test]
fn submit_adds_literal_note_and_resets_draft() {
    let mut app = NotesApp::new(NoteBoard::with_seed());
    let before_len = app.board().len();
    let before = Utc::now();

    app.dispatch(Action::SetTitle("Hello".to_string()));
    app.dispatch(Action::SetText("World".to_string()));
    app.dispatch(Action::SelectColor(NoteColor::Green));
    let effect = app.dispatch(Action::Submit);

    let Effect::NoteAdded(id) = effect else {
        panic!("submit should add a note, got {effect:?}");
    };
    assert_eq!(app.board().len(), before_len + 1);

    let newest = &app.board().notes()[0];
    assert_eq!(newest.id(), id);
    assert_eq!(newest.title(), "Hello");
    assert_eq!(newest.text(), "World");
    assert_eq!(newest.color(), NoteColor::Green);
    assert!(newest.created_at() >= before);

    let draft = app.composer();
    assert_eq!(draft.title(), "");
    assert_eq!(draft.text(), "");
    assert_eq!(draft.color(), NoteColor::Blue);
}

#[test]
fn empty_submit_is_accepted() {
    let mut app = NotesApp::new(NoteBoard::empty());
    assert!(matches!(app.dispatch(Action::Submit), Effect::NoteAdded(_)));
    assert_eq!(app.board().len(), 1);
}

#[test]
fn color_selection_is_exclusive_for_every_pair() {
    for first in NoteColor::ALL {
        for second in NoteColor::ALL {
            let mut composer = Composer::new();
            composer.select_color(first);
            composer.select_color(second);

            let selected = NoteColor::ALL
                .into_iter()
                .filter(|color| composer.is_selected(*color))
                .collect::<Vec<_>>();
            assert_eq!(selected, vec![second], "{first} then {second}");
        }
    }
}

#[test]
fn border_color_tracks_draft_before_submit() {
    let mut app = NotesApp::new(NoteBoard::empty());
    assert_eq!(app.composer().border_color(), NoteColor::Blue);

    app.dispatch(Action::SelectColor(NoteColor::Pink));
    assert_eq!(app.composer().border_color(), NoteColor::Pink);

    app.dispatch(Action::Submit);
    assert_eq!(app.composer().border_color(), NoteColor::Blue);
}

#[test]
fn typed_characters_build_the_draft() {
    use yanote_core::DraftField;

    let mut app = NotesApp::new(NoteBoard::empty());
    for ch in "Hi!".chars() {
        app.dispatch(Action::Type(DraftField::Title, ch));
    }
    app.dispatch(Action::Erase(DraftField::Title));
    app.dispatch(Action::Type(DraftField::Text, '\n'));

    assert_eq!(app.composer().title(), "Hi");
    assert_eq!(app.composer().text(), "\n");
    assert_eq!(app.board().len(), 0);
}
