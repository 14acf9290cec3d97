//! Composer form draft state.
//!
//! # Responsibility
//! - Own the in-progress title, text and color.
//! - Yield a candidate note on submit and reset to defaults.
//!
//! # Invariants
//! - Exactly one color is selected at any time.
//! - After `submit` the draft is always `("", "", Blue)`.

use crate::model::note::{NewNote, NoteColor};

/// Editable text fields of the composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Text,
}

/// Draft state for the note composer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composer {
    title: String,
    text: String,
    color: NoteColor,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with a non-default draft color.
    pub fn with_color(color: NoteColor) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn color(&self) -> NoteColor {
        self.color
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.title = value.into();
    }

    pub fn set_text(&mut self, value: impl Into<String>) {
        self.text = value.into();
    }

    /// Appends one character to `field`.
    pub fn push_char(&mut self, field: DraftField, ch: char) {
        self.field_mut(field).push(ch);
    }

    /// Removes the last character of `field`, if any.
    pub fn pop_char(&mut self, field: DraftField) {
        self.field_mut(field).pop();
    }

    /// Radio-style selection: replaces the current color.
    pub fn select_color(&mut self, color: NoteColor) {
        self.color = color;
    }

    pub fn is_selected(&self, color: NoteColor) -> bool {
        self.color == color
    }

    /// Border color of the text area, tracking the draft live.
    pub fn border_color(&self) -> NoteColor {
        self.color
    }

    /// Takes the draft as a candidate note and resets all fields.
    pub fn submit(&mut self) -> NewNote {
        let draft = std::mem::take(self);
        NewNote {
            title: draft.title,
            text: draft.text,
            color: draft.color,
        }
    }

    fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Title => &mut self.title,
            DraftField::Text => &mut self.text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Composer, DraftField};
    use crate::model::note::NoteColor;

    #[test]
    fn push_and_pop_edit_only_the_addressed_field() {
        let mut composer = Composer::new();
        composer.push_char(DraftField::Title, 'h');
        composer.push_char(DraftField::Title, 'é');
        composer.push_char(DraftField::Text, 'x');
        composer.pop_char(DraftField::Title);
        composer.pop_char(DraftField::Title);
        composer.pop_char(DraftField::Title);

        assert_eq!(composer.title(), "");
        assert_eq!(composer.text(), "x");
    }

    #[test]
    fn submit_resets_a_custom_initial_color_to_blue() {
        let mut composer = Composer::with_color(NoteColor::Green);
        let candidate = composer.submit();
        assert_eq!(candidate.color, NoteColor::Green);
        assert_eq!(composer.color(), NoteColor::Blue);
    }
}
